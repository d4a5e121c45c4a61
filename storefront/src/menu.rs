use std::rc::Rc;

use storefront_nav::{Config, MenuState};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::signal::Signal;
use crate::{dom, log};

/// The hamburger button and the navigation panel it shows on small screens.
#[derive(Debug)]
pub struct MobileMenu {
    hamburger: Element,
    panel: Element,
    icon: Option<Element>,
    state: Signal<MenuState>,
    breakpoint: f64,
}

impl MobileMenu {
    /// Find the hamburger and panel under `root`. `None` if either is missing.
    pub(crate) fn collect(root: &Element, config: &Config) -> Result<Option<Rc<Self>>, JsValue> {
        let selectors = &config.selectors;

        let Some(hamburger) = dom::query(root, &selectors.hamburger)? else {
            return Ok(None);
        };
        let Some(panel) = dom::query(root, &selectors.nav_panel)? else {
            return Ok(None);
        };
        let icon = dom::query(&hamburger, &selectors.hamburger_icon)?;

        let menu = Rc::new(Self {
            hamburger,
            panel,
            icon,
            state: crate::signal!(MenuState::default()),
            breakpoint: config.menu_breakpoint,
        });

        let panel = menu.panel.clone();
        let icon = menu.icon.clone();
        let active_class = config.classes.active.clone();
        menu.state.subscribe(move |state| {
            log::report(
                "menu sync",
                Self::render(&panel, icon.as_ref(), &active_class, *state),
            );
        });

        Ok(Some(menu))
    }

    pub(crate) fn bind(self: &Rc<Self>) -> Result<(), JsValue> {
        let menu = Rc::clone(self);
        dom::listen(&self.hamburger, "click", move |_event| {
            menu.toggle();
        })?;

        let menu = Rc::clone(self);
        dom::listen(&*dom::window()?, "resize", move |_event| {
            let width = dom::window()
                .and_then(|window| window.inner_width())
                .ok()
                .and_then(|width| width.as_f64());

            if let Some(width) = width {
                menu.handle_resize(width);
            }
        })
    }

    fn render(
        panel: &Element,
        icon: Option<&Element>,
        active_class: &str,
        state: MenuState,
    ) -> Result<(), JsValue> {
        dom::set_class(panel, active_class, state.is_open())?;
        if let Some(icon) = icon {
            icon.set_text_content(Some(state.icon()));
        }
        Ok(())
    }

    /// Flip the menu. Returns whether it is now open.
    pub fn toggle(&self) -> bool {
        self.state.update(MenuState::toggle)
    }

    /// Close the menu if open.
    pub fn close(&self) {
        self.state.update(MenuState::close);
    }

    /// Close the menu if the viewport grew past the breakpoint.
    pub fn handle_resize(&self, width: f64) {
        let breakpoint = self.breakpoint;
        self.state.update(|state| state.resize(width, breakpoint));
    }

    /// Whether the panel is shown.
    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }
}
