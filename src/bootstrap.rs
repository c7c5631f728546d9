//! Optional Bootstrap carousel integration.
//!
//! The page may or may not ship jQuery + Bootstrap. We look for
//! `jQuery.fn.carousel` and only call it when it exists.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// `jQuery` when the page has it and it carries the Bootstrap carousel plugin.
pub fn jquery_with_carousel() -> Option<Function> {
    let window = web_sys::window()?;
    let jquery = Reflect::get(&window, &JsValue::from_str("jQuery"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    let plugins = Reflect::get(&jquery, &JsValue::from_str("fn")).ok()?;
    let carousel = Reflect::get(&plugins, &JsValue::from_str("carousel")).ok()?;
    carousel.is_function().then_some(jquery)
}

/// Initialize `#carousel_id` with Bootstrap when available.
/// Returns `Ok(false)` when the plugin is absent.
pub fn init_carousel(carousel_id: &str) -> Result<bool, JsValue> {
    let Some(jquery) = jquery_with_carousel() else {
        return Ok(false);
    };
    let selection = jquery.call1(&JsValue::NULL, &JsValue::from_str(&format!("#{carousel_id}")))?;
    let method: Function = Reflect::get(&selection, &JsValue::from_str("carousel"))?.dyn_into()?;
    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("interval"), &JsValue::FALSE)?;
    Reflect::set(&options, &JsValue::from_str("wrap"), &JsValue::FALSE)?;
    Reflect::set(&options, &JsValue::from_str("touch"), &JsValue::TRUE)?;
    method.call1(&selection, &options)?;
    Ok(true)
}
