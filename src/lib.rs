//! Dynamic Adapt WASM Module
//!
//! Responsive DOM relocation for web pages: elements annotated with a
//! `data-da` attribute are moved to a target container when the viewport
//! crosses their breakpoint and restored to their original position when
//! the condition no longer holds.

pub mod api;
pub mod dom;
pub mod engine;
pub mod models;
pub mod parse;

// Re-export commonly used types
pub use api::{relocation_report, use_dynamic_adapt, AdaptError};
pub use engine::{AdaptEngine, RelocationSnapshot};
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Dynamic adapt WASM module initialized");
}
