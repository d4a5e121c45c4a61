#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use storefront::{Config, PageController, Storefront};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MouseEvent, MouseEventInit};

thread_local! {
    static COUNTER: RefCell<AtomicUsize> = const { RefCell::new(AtomicUsize::new(0)) };
}

fn get_unique_id() -> usize {
    COUNTER.with(|counter| counter.borrow().fetch_add(1, Ordering::SeqCst))
}

/// Markup mounted in its own container under `<body>`.
///
/// A click listener on the container records whether the event reached it
/// with its default already prevented, then prevents it so that followed
/// links never navigate the test page away.
pub(crate) struct Fixture {
    pub(crate) root: Element,
    last_prevented: Rc<Cell<Option<bool>>>,
}

impl Fixture {
    pub(crate) fn mount(markup: &str) -> Self {
        let window = web_sys::window().expect("no global `window` exists");
        let document = window.document().expect("no global `document` exists");
        let body = document.body().expect("no global `body` exists");
        let root = document
            .create_element("div")
            .expect("failed to create fixture root");

        root.set_id(&format!("test-container-{}", get_unique_id()));
        root.set_inner_html(markup);
        body.append_child(&root).expect("failed to mount fixture");

        let last_prevented = Rc::new(Cell::new(None));
        let recorder = {
            let last_prevented = last_prevented.clone();
            Closure::wrap(Box::new(move |event: web_sys::Event| {
                last_prevented.set(Some(event.default_prevented()));
                event.prevent_default();
            }) as Box<dyn FnMut(_)>)
        };
        root.add_event_listener_with_callback("click", recorder.as_ref().unchecked_ref())
            .expect("failed to attach click recorder");
        recorder.forget();

        Self {
            root,
            last_prevented,
        }
    }

    pub(crate) fn hydrate(&self, config: Config) -> Rc<PageController> {
        Storefront::with_config(config)
            .hydrate_in(&self.root)
            .expect("hydrate failed")
    }

    pub(crate) fn find(&self, selector: &str) -> Element {
        self.root
            .query_selector(selector)
            .expect("bad selector")
            .unwrap_or_else(|| panic!("no element matches {selector}"))
    }

    pub(crate) fn exists(&self, selector: &str) -> bool {
        self.root
            .query_selector(selector)
            .expect("bad selector")
            .is_some()
    }

    /// Dispatch a bubbling click on `element`. Returns whether a page handler
    /// prevented the default action.
    pub(crate) fn click(&self, element: &Element) -> bool {
        self.last_prevented.set(None);

        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event =
            MouseEvent::new_with_mouse_event_init_dict("click", &init).expect("click event");
        element.dispatch_event(&event).expect("dispatch failed");

        self.last_prevented
            .get()
            .expect("click did not bubble to the fixture root")
    }

    pub(crate) fn unmount(self) {
        self.root.remove();
    }
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub(crate) fn current_path() -> String {
    web_sys::window()
        .expect("no global `window` exists")
        .location()
        .pathname()
        .expect("pathname not found")
}

pub(crate) async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .expect("no global `window` exists")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("setTimeout failed");
    });

    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .expect("sleep failed");
}
