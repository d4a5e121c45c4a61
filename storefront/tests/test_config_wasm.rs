#![cfg(target_arch = "wasm32")]
#![allow(missing_docs)]

mod helpers;

use helpers::{Fixture, has_class};
use storefront::config::{CONFIG_GLOBAL, load};
use storefront::nav_model::FlashTiming;
use storefront::{Config, Storefront};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn set_global(value: &JsValue) {
    let window = web_sys::window().expect("no global `window` exists");
    js_sys::Reflect::set(&window, &JsValue::from_str(CONFIG_GLOBAL), value)
        .expect("failed to set config global");
}

fn clear_global() {
    let window = web_sys::window().expect("no global `window` exists");
    js_sys::Reflect::delete_property(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .expect("failed to clear config global");
}

fn json(text: &str) -> JsValue {
    js_sys::JSON::parse(text).expect("invalid test JSON")
}

#[wasm_bindgen_test]
fn missing_global_gives_defaults() {
    clear_global();
    assert_eq!(load(), Config::default());
}

#[wasm_bindgen_test]
fn partial_global_overrides_only_given_fields() {
    set_global(&json(
        r#"{"menu_breakpoint": 1024, "debug": true, "flash": {"auto_dismiss_ms": 1200}}"#,
    ));

    let config = load();
    clear_global();

    assert_eq!(config.menu_breakpoint, 1024.0);
    assert!(config.debug);
    assert_eq!(
        config.flash,
        FlashTiming {
            auto_dismiss_ms: 1200,
            ..FlashTiming::default()
        }
    );
    assert_eq!(config.selectors, Config::default().selectors);
}

#[wasm_bindgen_test]
fn malformed_global_falls_back_to_defaults() {
    set_global(&json(r#"{"menu_breakpoint": "wide"}"#));
    assert_eq!(load(), Config::default());

    set_global(&JsValue::from_str("not an object"));
    assert_eq!(load(), Config::default());

    set_global(&JsValue::NULL);
    assert_eq!(load(), Config::default());

    clear_global();
}

#[wasm_bindgen_test]
fn hydration_reads_classes_from_global() {
    set_global(&json(r#"{"classes": {"active": "is-current"}}"#));
    let fixture = Fixture::mount(
        r#"
        <ul class="navbar-links">
            <li><a href="/">Home</a></li>
        </ul>
        "#,
    );

    let controller = Storefront::new()
        .hydrate_in(&fixture.root)
        .expect("hydrate failed");
    clear_global();

    controller.set_active(Some(0));
    let home = fixture.find("a[href='/']");
    assert!(has_class(&home, "is-current"));
    assert!(!has_class(&home, "active"));

    fixture.unmount();
}
