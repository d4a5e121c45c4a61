use wasm_bindgen::JsValue;

/// Informational console output, printed only when `Config::debug` is set.
pub(crate) fn debug(enabled: bool, message: &str) {
    if enabled {
        web_sys::console::log_1(&format!("[storefront] {message}").into());
    }
}

pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&format!("[storefront] {message}").into());
}

/// Log a failed browser call from inside an event handler and carry on.
pub(crate) fn report(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        web_sys::console::warn_2(&format!("[storefront] {context} failed:").into(), &err);
    }
}
