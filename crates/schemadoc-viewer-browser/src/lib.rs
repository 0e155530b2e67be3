//! Browser DOM layer for the schemadoc viewer.
//!
//! This crate wires the pure logic in `schemadoc-viewer-core` onto the
//! markup the documentation generator emits. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `dom`: small helpers over the raw DOM API
//! - `menu`: schema sections, navigation links, the mode button
//! - `switcher`: the text/visual switcher and its page-wide consequences
//! - `hover`: the shared hover tooltip for table names
//! - `scaling`: click-driven diagram scaling
//! - `messaging`: the window message wire between navigation and frame
//!
//! Controllers own their [`gloo_events::EventListener`]s; dropping a
//! controller detaches its handlers. Missing page elements are skipped
//! silently, a generated page only ever contains the subset of the markup
//! its kind needs.
//!
//! # Re-exports
//!
//! This crate re-exports `schemadoc-viewer-core` for convenience, so
//! consumers only need to depend on `schemadoc-viewer-browser`.

// Re-export core crate
pub use schemadoc_viewer_core;
pub use schemadoc_viewer_core::*;

pub mod dom;
pub mod hover;
pub mod menu;
pub mod messaging;
pub mod scaling;
pub mod switcher;

pub use hover::TooltipPresenter;
pub use menu::NavLinks;
pub use messaging::MessageSubscription;
pub use scaling::ZoomController;
pub use switcher::ModeSwitcher;
