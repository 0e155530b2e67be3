//! schemadoc-viewer-core: Pure Rust interaction logic for generated schema
//! documentation, without browser dependencies.
//!
//! This crate provides:
//! - `ViewMode` - the text/visual state behind the mode button
//! - URL rewriting between the `_text.html` / `_visual.html` page pair
//! - `FrameMessage` - the closed set of cross-frame signals
//! - `TableMeta` + tooltip rendering for hovered table names
//! - Placement arithmetic that keeps the tooltip inside the viewport
//! - `ZoomState` - the click-driven diagram scale

pub mod contract;
pub mod layout;
pub mod message;
pub mod mode;
pub mod nav;
pub mod tooltip;
pub mod url;
pub mod zoom;

mod error;

pub use error::ViewerError;
pub use layout::{DocPosition, POINTER_INSET, PointerPosition, ScrollOffset, Size, place_tooltip};
pub use message::{FrameMessage, WirePayload};
pub use mode::ViewMode;
pub use nav::{SectionVisibility, list_element_id};
pub use smol_str::SmolStr;
pub use tooltip::{TableMeta, render_tooltip_html};
pub use url::{
    TEXT_SUFFIX, VISUAL_SUFFIX, function_page_url, rewrite_variant, toggle_variant, variant_of,
};
pub use zoom::{MIN_SCALE, ZOOM_STEP, ZoomState};
