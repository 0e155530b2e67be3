//! The shared hover tooltip for table names.
//!
//! One `div.tooltip-box` is created per document and reused by every hover
//! target. Enter fills it from the target's data attributes and shows it,
//! moves track the pointer with the viewport clamping from the core layout
//! module, leave hides it. A click anywhere outside a hover target hides
//! it too, which covers targets that disappear mid-hover when a click
//! swaps the page content.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use schemadoc_viewer_core::{
    PointerPosition, ScrollOffset, Size, TableMeta, ViewerError, contract, place_tooltip,
    render_tooltip_html,
};

use crate::dom;

/// The shared tooltip element plus the hover wiring that drives it.
/// Dropping it detaches the handlers and removes the element, so
/// re-mounting never accumulates boxes.
pub struct TooltipPresenter {
    tooltip: HtmlElement,
    listeners: Vec<EventListener>,
}

impl Drop for TooltipPresenter {
    fn drop(&mut self) {
        self.tooltip.remove();
    }
}

impl TooltipPresenter {
    /// Create the shared tooltip element and wire every hover target on
    /// the page. A page without targets still gets the element and the
    /// outside-click handler.
    pub fn mount(document: &Document) -> Result<Self, ViewerError> {
        let tooltip = create_tooltip_box(document)?;
        let mut presenter = TooltipPresenter { tooltip, listeners: Vec::new() };
        presenter.attach_targets(document);
        presenter.attach_outside_click(document);
        tracing::debug!(handlers = presenter.listeners.len(), "tooltip wired");
        Ok(presenter)
    }

    /// The shared tooltip element.
    pub fn element(&self) -> &HtmlElement {
        &self.tooltip
    }

    fn attach_targets(&mut self, document: &Document) {
        let mut targets = Vec::new();
        dom::for_each_selected(document, contract::TABLE_TOOLTIP_SELECTOR, |element| {
            targets.push(element);
        });
        for target in targets {
            self.attach_target(target);
        }
    }

    fn attach_target(&mut self, target: Element) {
        let tooltip = self.tooltip.clone();
        let hovered = target.clone();
        self.listeners.push(EventListener::new(&target, "mouseenter", move |_| {
            show_for(&tooltip, &hovered);
        }));

        let tooltip = self.tooltip.clone();
        self.listeners.push(EventListener::new(&target, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            track_pointer(&tooltip, event);
        }));

        let tooltip = self.tooltip.clone();
        self.listeners.push(EventListener::new(&target, "mouseleave", move |_| {
            dom::set_display(&tooltip, "none");
        }));
    }

    fn attach_outside_click(&mut self, document: &Document) {
        let tooltip = self.tooltip.clone();
        self.listeners.push(EventListener::new(document, "click", move |event| {
            let inside = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| {
                    element.closest(contract::TABLE_TOOLTIP_SELECTOR).ok().flatten()
                })
                .is_some();
            if !inside {
                dom::set_display(&tooltip, "none");
            }
        }));
    }
}

/// Fill the tooltip from the hovered element and show it.
fn show_for(tooltip: &HtmlElement, target: &Element) {
    let meta = TableMeta::from_attrs(
        target.get_attribute(contract::DATA_COLUMNS_ATTR).as_deref(),
        target.get_attribute(contract::DATA_TYPES_ATTR).as_deref(),
    );
    let name = target.text_content().unwrap_or_default();
    tooltip.set_inner_html(&render_tooltip_html(&name, &meta));
    dom::set_display(tooltip, "block");
}

/// Move the tooltip next to the pointer, clamped against the viewport.
fn track_pointer(tooltip: &HtmlElement, event: &MouseEvent) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let scroll = ScrollOffset {
        x: window.scroll_x().unwrap_or(0.0),
        y: window.scroll_y().unwrap_or(0.0),
    };
    let viewport = Size {
        width: window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
        height: window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
    };
    let rect = tooltip.get_bounding_client_rect();
    let box_size = Size { width: rect.width(), height: rect.height() };
    let pointer = PointerPosition {
        x: event.client_x() as f64,
        y: event.client_y() as f64,
    };

    let position = place_tooltip(pointer, scroll, box_size, viewport);
    let style = tooltip.style();
    let _ = style.set_property("left", &format!("{}px", position.x));
    let _ = style.set_property("top", &format!("{}px", position.y));
}

/// Create the tooltip element, hidden, and append it to the body.
fn create_tooltip_box(document: &Document) -> Result<HtmlElement, ViewerError> {
    let element = document
        .create_element("div")
        .map_err(|_| ViewerError::CreateElement("tooltip"))?;
    element.set_class_name(contract::TOOLTIP_BOX_CLASS);
    let element: HtmlElement = element
        .dyn_into()
        .map_err(|_| ViewerError::CreateElement("tooltip"))?;
    let _ = element.style().set_property("display", "none");
    let body = document.body().ok_or(ViewerError::NoBody)?;
    let _ = body.append_child(&element);
    Ok(element)
}
