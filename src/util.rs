// Browser helpers for the drawer component. None of these are called from the
// engine, which stays usable off the web.
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, TouchList};

use crate::model::TouchSample;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Page offset of `el`, summed over its offset parents and minus their scroll.
pub fn page_offset(el: &HtmlElement) -> (f64, f64) {
    let mut left = 0.0;
    let mut top = 0.0;
    let mut cur = Some(el.clone());
    while let Some(node) = cur {
        left += (node.offset_left() - node.scroll_left()) as f64;
        top += (node.offset_top() - node.scroll_top()) as f64;
        cur = node
            .offset_parent()
            .and_then(|p| p.dyn_into::<HtmlElement>().ok());
    }
    (left, top)
}

/// Window inner size, or zeros outside a browser window.
pub fn viewport_size() -> (f64, f64) {
    let Some(win) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Same check browsers expose as `'ontouchstart' in window`.
pub fn touch_supported() -> bool {
    web_sys::window()
        .map(|win| js_sys::Reflect::has(&win, &JsValue::from_str("ontouchstart")).unwrap_or(false))
        .unwrap_or(false)
}

pub fn touch_samples(list: &TouchList) -> Vec<TouchSample> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| TouchSample::new(t.identifier(), t.client_x() as f64, t.client_y() as f64))
        .collect()
}
