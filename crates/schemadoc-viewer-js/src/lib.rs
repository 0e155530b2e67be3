//! WASM bindings for the schemadoc viewer.
//!
//! The documentation generator emits static pages that load this bundle
//! instead of per-page scripts. Each page kind calls its init export once
//! from a module script; the inline handlers baked into the generated
//! markup call the other exports.

mod pages;

pub use pages::*;

use wasm_bindgen::prelude::*;

/// Initialize the panic hook and console logging. Runs once when the
/// bundle is instantiated.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        use tracing::Level;
        use tracing::subscriber::set_global_default;
        use tracing_subscriber::Registry;
        use tracing_subscriber::layer::SubscriberExt;

        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        let wasm_layer = tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(console_level)
                .build(),
        );

        let reg = Registry::default().with(wasm_layer);

        let _ = set_global_default(reg);
    }
}
