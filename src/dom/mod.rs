//! `web-sys` bindings for the game page.
//!
//! The page markup is served as-is; nothing here creates structure beyond
//! the nine grid cells. [`Page`] and [`Jukebox`] look their elements up once
//! at startup and fail fast if any are missing.
mod jukebox;
mod page;
mod start;

pub use jukebox::*;
pub use page::*;
pub use start::*;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::Document;
use web_sys::Element;

pub type JsResult<T> = Result<T, JsValue>;

/// Element by id, or an error naming the id.
pub(crate) fn by_id(document: &Document, id: &str) -> JsResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))
}

/// Element by id, cast to a concrete element type.
pub(crate) fn typed<T>(document: &Document, id: &str) -> JsResult<T>
where
    T: JsCast,
{
    by_id(document, id)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{} has the wrong element type", id)))
}

/// First descendant matching a selector, or an error naming it.
pub(crate) fn within(parent: &Element, selector: &str) -> JsResult<Element> {
    parent
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("missing {}", selector)))
}

/// Render a JS error for the log.
pub(crate) fn describe(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
