//! Small wrappers over the `web-sys` calls the controller repeats.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| "No global window object".into())
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?.document().ok_or_else(|| "No document object".into())
}

/// Every element under `root` matching `selector`, in document order.
pub(crate) fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = root.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);

    for index in 0..nodes.length() {
        if let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }

    Ok(elements)
}

pub(crate) fn query(root: &Element, selector: &str) -> Result<Option<Element>, JsValue> {
    root.query_selector(selector)
}

/// Add or remove `class` so that its presence matches `on`.
pub(crate) fn set_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    let classes = element.class_list();
    if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    }
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub(crate) fn set_styles(element: &Element, styles: &[(&str, &str)]) -> Result<(), JsValue> {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };

    let style = element.style();
    for (property, value) in styles {
        style.set_property(property, value)?;
    }

    Ok(())
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();

    Ok(())
}

/// Run `f` once after `delay_ms`. The timer is never cancelled.
pub(crate) fn set_timeout<F>(delay_ms: u32, f: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);

    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
}
