use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement};

/// Convert a JavaScript value into a readable string for error reporting.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> Option<u32> {
    web_sys::window()?
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|w| w.max(0.0) as u32)
}

/// Descendant `div[id]` elements of `root`, in DOM order.
pub fn id_slots(root: &Element) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all("div[id]")?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter(|el| !el.id().is_empty())
        .collect())
}

/// All elements matching `selector`, in DOM order.
pub fn query_all(root: &web_sys::Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// True when `el` carries the carousel wrapper class or id.
pub fn is_carousel_wrapper(el: &Element, class: &str, id: &str) -> bool {
    el.class_list().contains(class) || el.id() == id
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}
