//! Click-driven diagram scaling.
//!
//! Visual pages wrap their diagram in a container that catches the clicks
//! and a content element that receives the scale transform. The primary
//! button grows the scale, the secondary button shrinks it; the browser
//! context menu is suppressed so the secondary button is usable. The scale
//! lives behind `Rc<RefCell<..>>` because the two handlers share it;
//! handlers run one at a time on the main thread.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use schemadoc_viewer_core::{ZoomState, contract};

/// Primary mouse button per the MouseEvent contract.
const PRIMARY_BUTTON: i16 = 0;

/// Zoom wiring for the diagram pair; dropping it detaches the handlers and
/// leaves the last applied scale in place.
pub struct ZoomController {
    state: Rc<RefCell<ZoomState>>,
    _listeners: Vec<EventListener>,
}

impl ZoomController {
    /// Wire the container/content pair. A page without the pair gets no
    /// wiring, which is the normal case for everything but visual pages.
    pub fn mount(document: &Document) -> Option<Self> {
        let container = document.get_element_by_id(contract::ZOOM_CONTAINER_ID)?;
        let content: HtmlElement = document
            .get_element_by_id(contract::ZOOM_CONTENT_ID)?
            .dyn_into()
            .ok()?;

        let state = Rc::new(RefCell::new(ZoomState::new()));
        let mut listeners = Vec::new();

        let grow_state = Rc::clone(&state);
        let grow_content = content.clone();
        listeners.push(EventListener::new(&container, "mousedown", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if event.button() != PRIMARY_BUTTON {
                return;
            }
            grow_state.borrow_mut().zoom_in();
            apply_scale(&grow_content, &grow_state.borrow());
        }));

        let shrink_state = Rc::clone(&state);
        let shrink_content = content.clone();
        let options = EventListenerOptions::enable_prevent_default();
        listeners.push(EventListener::new_with_options(
            &container,
            "contextmenu",
            options,
            move |event| {
                event.prevent_default();
                if shrink_state.borrow_mut().zoom_out().is_some() {
                    apply_scale(&shrink_content, &shrink_state.borrow());
                }
            },
        ));

        Some(ZoomController { state, _listeners: listeners })
    }

    /// The current scale factor.
    pub fn scale(&self) -> f64 {
        self.state.borrow().scale()
    }
}

fn apply_scale(content: &HtmlElement, state: &ZoomState) {
    let _ = content.style().set_property("transform", &state.transform());
}
