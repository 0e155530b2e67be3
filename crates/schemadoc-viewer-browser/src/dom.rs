//! Small helpers over the raw DOM API.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// The page document, if the code runs in a window context.
pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Set an element's inline `display` value. Non-HTML elements and style
/// failures are ignored.
pub fn set_display(element: &Element, value: &str) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let _ = html.style().set_property("display", value);
}

/// Read an element's inline `display` value, `""` when unset.
pub fn display_of(element: &Element) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|html| html.style().get_property_value("display").ok())
        .unwrap_or_default()
}

/// Run `f` for every element matching `selector`. A failed query and
/// non-element nodes are skipped.
///
/// Single querySelectorAll instead of N individual queries.
pub fn for_each_selected(document: &Document, selector: &str, mut f: impl FnMut(Element)) {
    let Ok(node_list) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..node_list.length() {
        let Some(node) = node_list.item(i) else {
            continue;
        };
        let Some(element) = node.dyn_ref::<Element>() else {
            continue;
        };
        f(element.clone());
    }
}
