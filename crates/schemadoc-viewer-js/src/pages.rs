//! Page entry points and the exports for inline handlers.
//!
//! Three kinds of generated page exist: the navigation index, text content
//! pages, and visual diagram pages. Each calls its init export once; the
//! wired controllers are parked in thread-local slots so their event
//! listeners stay attached for the lifetime of the page. Re-running an
//! init replaces the previous wiring.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use schemadoc_viewer_browser::{dom, hover, menu, messaging, scaling, switcher};
use schemadoc_viewer_core::{FrameMessage, ViewerError};

struct IndexPage {
    switcher: Rc<RefCell<switcher::ModeSwitcher>>,
    _links: menu::NavLinks,
    _messages: messaging::MessageSubscription,
}

struct ContentPage {
    _tooltip: Option<hover::TooltipPresenter>,
    _reporter: menu::LinkClickReporter,
    _messages: messaging::MessageSubscription,
}

struct VisualPage {
    _zoom: Option<scaling::ZoomController>,
    _messages: messaging::MessageSubscription,
}

thread_local! {
    static INDEX_PAGE: RefCell<Option<IndexPage>> = RefCell::new(None);
    static CONTENT_PAGE: RefCell<Option<ContentPage>> = RefCell::new(None);
    static VISUAL_PAGE: RefCell<Option<VisualPage>> = RefCell::new(None);
}

fn window() -> Result<web_sys::Window, JsError> {
    web_sys::window().ok_or_else(|| JsError::from(ViewerError::NoWindow))
}

fn document() -> Result<web_sys::Document, JsError> {
    window()?
        .document()
        .ok_or_else(|| JsError::from(ViewerError::NoDocument))
}

/// Wire the navigation index page: schema sections, navigation links, the
/// mode button, and the parent side of the frame messaging.
#[wasm_bindgen(js_name = initIndexPage)]
pub fn init_index_page() -> Result<(), JsError> {
    let document = document()?;
    let window = window()?;

    let switcher = Rc::new(RefCell::new(switcher::ModeSwitcher::new()));
    switcher.borrow().sync(&document);

    let links = menu::NavLinks::attach(&document);

    let dispatch_switcher = Rc::clone(&switcher);
    let dispatch_document = document.clone();
    let messages = messaging::on_message(&window, move |message| match message {
        FrameMessage::SwitchMode => {
            dispatch_switcher.borrow_mut().switch(&dispatch_document);
        }
        FrameMessage::HideModeButton => {
            menu::set_mode_button_visible(&dispatch_document, false);
        }
        FrameMessage::ShowModeButton => {
            menu::set_mode_button_visible(&dispatch_document, true);
        }
        // Only meaningful inside the content frame.
        FrameMessage::UpdatePage => {}
    });

    INDEX_PAGE.with(|slot| {
        *slot.borrow_mut() = Some(IndexPage {
            switcher,
            _links: links,
            _messages: messages,
        });
    });
    tracing::info!("index page wired");
    Ok(())
}

/// Wire a text content page inside the frame: hover tooltips, link
/// category reports to the parent, and the child side of the frame
/// messaging.
#[wasm_bindgen(js_name = initContentPage)]
pub fn init_content_page() -> Result<(), JsError> {
    let document = document()?;
    let window = window()?;

    let tooltip = match hover::TooltipPresenter::mount(&document) {
        Ok(presenter) => Some(presenter),
        // The page still works without tooltips.
        Err(err) => {
            tracing::warn!(%err, "tooltip not mounted");
            None
        }
    };

    let reporter = menu::LinkClickReporter::attach(&document);
    let messages = child_message_listener(&window);

    CONTENT_PAGE.with(|slot| {
        *slot.borrow_mut() = Some(ContentPage {
            _tooltip: tooltip,
            _reporter: reporter,
            _messages: messages,
        });
    });
    tracing::info!("content page wired");
    Ok(())
}

/// Wire a visual diagram page inside the frame: click zoom and the child
/// side of the frame messaging.
#[wasm_bindgen(js_name = initVisualPage)]
pub fn init_visual_page() -> Result<(), JsError> {
    let document = document()?;
    let window = window()?;

    let zoom = scaling::ZoomController::mount(&document);
    if zoom.is_none() {
        tracing::debug!("no zoom container on this page");
    }
    let messages = child_message_listener(&window);

    VISUAL_PAGE.with(|slot| {
        *slot.borrow_mut() = Some(VisualPage {
            _zoom: zoom,
            _messages: messages,
        });
    });
    tracing::info!("visual page wired");
    Ok(())
}

/// Child-side message dispatch. Everything except the update request is
/// parent-bound and dropped here, including our own reports bouncing back
/// when a content page is opened standalone at the top level.
fn child_message_listener(window: &web_sys::Window) -> messaging::MessageSubscription {
    let target = window.clone();
    messaging::on_message(window, move |message| {
        if message == FrameMessage::UpdatePage {
            switcher::toggle_location_variant(&target);
        }
    })
}

/// Toggle one schema's section in the menu. Called by inline handlers on
/// the schema headers.
#[wasm_bindgen(js_name = toggleSchema)]
pub fn toggle_schema(schema: &str) {
    let Some(document) = dom::document() else {
        return;
    };
    menu::toggle_schema(&document, schema);
}

/// Expand every schema section. Called by the menu's expand-all control.
#[wasm_bindgen(js_name = expandAll)]
pub fn expand_all() {
    let Some(document) = dom::document() else {
        return;
    };
    menu::expand_all(&document);
}

/// Collapse every schema section. Called by the menu's collapse-all
/// control.
#[wasm_bindgen(js_name = collapseAll)]
pub fn collapse_all() {
    let Some(document) = dom::document() else {
        return;
    };
    menu::collapse_all(&document);
}

/// Flip the text/visual mode. Called by the mode button's inline handler
/// on the index page; does nothing before `initIndexPage` has run.
#[wasm_bindgen(js_name = switchMode)]
pub fn switch_mode() {
    let Some(document) = dom::document() else {
        return;
    };
    INDEX_PAGE.with(|slot| {
        if let Some(page) = slot.borrow().as_ref() {
            page.switcher.borrow_mut().switch(&document);
        }
    });
}

/// Ask the navigation window to flip the mode, from inside a content
/// page. Mode controls embedded in generated content call this.
#[wasm_bindgen(js_name = requestModeSwitch)]
pub fn request_mode_switch() {
    messaging::post_to_parent(FrameMessage::SwitchMode);
}
