//! Navigation menu behavior.
//!
//! Collapsible per-schema sections, the expand/collapse-all pair, and the
//! click wiring that loads pages into the content iframe. All of it
//! tolerates absent markup: a page without a given id or class simply gets
//! no behavior for it.

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlIFrameElement};

use schemadoc_viewer_core::{SectionVisibility, contract, list_element_id};

use crate::dom;

/// Toggle one schema's section between shown and hidden. Unknown schema
/// names are ignored.
pub fn toggle_schema(document: &Document, schema: &str) {
    let id = list_element_id(schema);
    let Some(section) = document.get_element_by_id(&id) else {
        return;
    };
    let next = SectionVisibility::from_display(&dom::display_of(&section)).toggled();
    dom::set_display(&section, next.display_value());
}

/// Show every section list in the menu.
pub fn expand_all(document: &Document) {
    set_all_sections(document, SectionVisibility::Shown);
}

/// Hide every section list in the menu.
pub fn collapse_all(document: &Document) {
    set_all_sections(document, SectionVisibility::Hidden);
}

fn set_all_sections(document: &Document, state: SectionVisibility) {
    dom::for_each_selected(document, contract::SECTION_LIST_SELECTOR, |section| {
        dom::set_display(&section, state.display_value());
    });
}

/// Show or hide the mode button. Function pages exist in two variants, so
/// the button only makes sense while one of them is loaded; it shows as
/// `inline-block` to sit in the menu's flow.
pub fn set_mode_button_visible(document: &Document, visible: bool) {
    let Some(button) = document.get_element_by_id(contract::MODE_BUTTON_ID) else {
        return;
    };
    let display = if visible { "inline-block" } else { "none" };
    dom::set_display(&button, display);
}

/// Point the content iframe at `url`. Pages without an iframe are left
/// alone.
pub fn load_into_frame(document: &Document, url: &str) {
    let Ok(Some(element)) = document.query_selector("iframe") else {
        return;
    };
    let Some(frame) = element.dyn_ref::<HtmlIFrameElement>() else {
        return;
    };
    frame.set_src(url);
}

/// Click wiring for the navigation anchors; dropping it detaches the
/// handlers.
pub struct NavLinks {
    listeners: Vec<EventListener>,
}

impl NavLinks {
    /// Attach a click handler to every navigation anchor.
    ///
    /// A click loads the anchor's `href` into the content iframe instead of
    /// navigating the top window, and sets the mode button visibility by
    /// link category: table pages have a single variant, function pages
    /// have the text/visual pair.
    pub fn attach(document: &Document) -> Self {
        let mut listeners = Vec::new();
        dom::for_each_selected(document, contract::NAV_LINK_SELECTOR, |link| {
            let is_table = link.class_list().contains(contract::TABLE_LINK_CLASS);
            let doc = document.clone();
            let anchor = link.clone();
            let options = EventListenerOptions::enable_prevent_default();
            listeners.push(EventListener::new_with_options(
                &link,
                "click",
                options,
                move |event| {
                    event.prevent_default();
                    if let Some(href) = anchor.get_attribute("href") {
                        load_into_frame(&doc, &href);
                    }
                    set_mode_button_visible(&doc, !is_table);
                },
            ));
        });
        tracing::debug!(count = listeners.len(), "navigation links wired");
        Self { listeners }
    }

    /// Number of anchors that got a handler.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Content-page counterpart of [`NavLinks`]: clicks on links inside the
/// frame navigate the frame as usual, but their category is reported to the
/// parent window so it can show or hide the mode button. Dropping detaches
/// the handlers.
pub struct LinkClickReporter {
    listeners: Vec<EventListener>,
}

impl LinkClickReporter {
    /// Attach a reporting handler to every categorized link on the page.
    pub fn attach(document: &Document) -> Self {
        use schemadoc_viewer_core::FrameMessage;

        let mut listeners = Vec::new();
        dom::for_each_selected(document, contract::NAV_LINK_SELECTOR, |link| {
            let is_table = link.class_list().contains(contract::TABLE_LINK_CLASS);
            listeners.push(EventListener::new(&link, "click", move |_| {
                let report = if is_table {
                    FrameMessage::HideModeButton
                } else {
                    FrameMessage::ShowModeButton
                };
                crate::messaging::post_to_parent(report);
            }));
        });
        Self { listeners }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
