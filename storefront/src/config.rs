//! Client-side access to configuration placed on `window` by the page.

use storefront_nav::Config;
use wasm_bindgen::prelude::*;

use crate::log;

/// Global the page may set before calling `start()`.
pub const CONFIG_GLOBAL: &str = "STOREFRONT_CONFIG";

/// Get a global from the window object, `None` when unset
pub fn get_global(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;

    if value.is_undefined() || value.is_null() {
        return None;
    }

    Some(value)
}

/// Deserialize a JS value by round-tripping it through JSON.
pub fn from_js<T>(value: &JsValue) -> Result<T, JsValue>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let json = js_sys::JSON::stringify(value)?
        .as_string()
        .ok_or("Value is not JSON-serializable")?;

    serde_json::from_str(&json).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Read `window.STOREFRONT_CONFIG`, falling back to defaults when it is absent
/// or does not parse.
pub fn load() -> Config {
    let Some(value) = get_global(CONFIG_GLOBAL) else {
        return Config::default();
    };

    match from_js::<Config>(&value) {
        Ok(config) => config,
        Err(err) => {
            log::warn(&format!(
                "ignoring window.{CONFIG_GLOBAL}: {}",
                err.as_string().unwrap_or_default()
            ));
            Config::default()
        }
    }
}
