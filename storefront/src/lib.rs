//! Browser-side page behaviour for the storefront site.
//!
//! The generated module exports `start()`; each page imports it and calls it
//! once:
//!
//! ```js
//! import init, { start } from "/static/pkg/storefront.js";
//! await init();
//! start();
//! ```
//!
//! `start()` waits for `DOMContentLoaded` if the document is still parsing and
//! then wires whichever behaviours have elements on the page: active link
//! highlighting, the mobile menu, smooth scrolling and flash banners.

use std::cell::RefCell;
use std::rc::Rc;

pub use js_sys;
pub use storefront_nav as nav_model;
pub use storefront_nav::Config;
pub use wasm_bindgen;
pub use web_sys;

use wasm_bindgen::prelude::*;

pub mod config;
pub mod controller;
mod dom;
pub mod flash;
mod log;
pub mod menu;
pub mod nav;
pub mod signal;

pub use controller::PageController;
pub use signal::Signal;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<PageController>>> = const { RefCell::new(None) };
}

/// Entry point for a page: hydrates with the configuration found on `window`.
#[derive(Debug, Default)]
pub struct Storefront {
    config: Config,
}

impl Storefront {
    /// Create an application configured from `window.STOREFRONT_CONFIG`, or
    /// the defaults when it is not set.
    pub fn new() -> Self {
        Self {
            config: config::load(),
        }
    }

    /// Create an application with an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Hydrate the whole document.
    pub fn hydrate(self) -> Result<Rc<PageController>, JsValue> {
        let document = dom::document()?;
        let root = document
            .document_element()
            .ok_or("No document element")?;

        self.hydrate_in(&root)
    }

    /// Hydrate only the elements under `root`.
    pub fn hydrate_in(self, root: &web_sys::Element) -> Result<Rc<PageController>, JsValue> {
        PageController::hydrate(root, self.config)
    }
}

/// The controller created by `start()`, once the page has been hydrated.
pub fn current() -> Option<Rc<PageController>> {
    CONTROLLER.with(|controller| controller.borrow().clone())
}

fn hydrate_page() -> Result<(), JsValue> {
    if current().is_some() {
        return Ok(());
    }

    let controller = Storefront::new().hydrate()?;
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));

    Ok(())
}

/// Wire the page behaviours once the document has been parsed.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let document = dom::document()?;

    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", move |_event| {
            log::report("start", hydrate_page());
        })
    } else {
        hydrate_page()
    }
}
