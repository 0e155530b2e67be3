//! The text/visual mode switcher.
//!
//! One controller on the navigation page owns the mode flag and pushes
//! every consequence of a flip out to the page: the button label, the
//! function link targets, and the content iframe. The iframe's `src`
//! attribute can go stale after in-frame navigation, so when it carries no
//! variant suffix the switcher falls back to messaging the frame, and a
//! page that knows its own location re-points itself.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlIFrameElement, Window};

use schemadoc_viewer_core::{FrameMessage, ViewMode, contract, url};

use crate::messaging;

/// Controller owning the navigation page's view mode.
#[derive(Debug, Default)]
pub struct ModeSwitcher {
    mode: ViewMode,
}

impl ModeSwitcher {
    /// A switcher in the initial text mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// The mode currently shown.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Write the current mode's button label and link targets to the page
    /// without flipping. Used once on page load.
    pub fn sync(&self, document: &Document) {
        self.update_button(document);
        self.update_links(document);
    }

    /// Flip the mode and update the button, the links, and the frame.
    /// Returns the mode now shown.
    pub fn switch(&mut self, document: &Document) -> ViewMode {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = ?self.mode, "switching view mode");
        self.update_button(document);
        self.update_links(document);
        self.update_frame(document);
        self.mode
    }

    fn update_button(&self, document: &Document) {
        let Some(button) = document.get_element_by_id(contract::MODE_BUTTON_ID) else {
            return;
        };
        button.set_text_content(Some(self.mode.button_label()));
    }

    /// Re-point every function link in the schema list at the current
    /// mode's page variant. Links without a `data-function` attribute are
    /// skipped.
    fn update_links(&self, document: &Document) {
        let Some(container) = document.get_element_by_id(contract::SCHEMA_LIST_ID) else {
            tracing::warn!("schema list container missing, link targets not updated");
            return;
        };
        let Ok(links) = container.query_selector_all(contract::FUNCTION_LINK_SELECTOR) else {
            return;
        };
        for i in 0..links.length() {
            let Some(node) = links.item(i) else {
                continue;
            };
            let Some(link) = node.dyn_ref::<web_sys::Element>() else {
                continue;
            };
            let Some(function) = link.get_attribute(contract::DATA_FUNCTION_ATTR) else {
                continue;
            };
            let _ = link.set_attribute("href", &url::function_page_url(&function, self.mode));
        }
    }

    fn update_frame(&self, document: &Document) {
        let Ok(Some(element)) = document.query_selector("iframe") else {
            return;
        };
        let Some(frame) = element.dyn_ref::<HtmlIFrameElement>() else {
            return;
        };
        let src = frame.src();
        if src.is_empty() || src == "about:blank" {
            return;
        }
        match url::rewrite_variant(&src, self.mode) {
            Some(rewritten) => frame.set_src(&rewritten),
            // No variant suffix in the attribute. Either a single-variant
            // page is loaded or the attribute went stale through in-frame
            // navigation; the frame itself knows which.
            None => messaging::post_to_frame(frame, FrameMessage::UpdatePage),
        }
    }
}

/// Re-point this window's location at the other page variant. The content
/// frame runs this on an update request; locations matching neither
/// variant suffix are left alone.
pub fn toggle_location_variant(window: &Window) {
    let location = window.location();
    let Ok(href) = location.href() else {
        return;
    };
    if let Some(next) = url::toggle_variant(&href) {
        let _ = location.set_href(&next);
    }
}
