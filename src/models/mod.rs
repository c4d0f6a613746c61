//! Data model for the responsive relocation engine
//!
//! This module contains the typed building blocks shared by the parser,
//! the engine, and the WASM API: directive values, media conditions, and
//! the per-element relocation descriptors.

pub mod descriptor;
pub mod media;
pub mod order;

// Re-export commonly used types
pub use descriptor::*;
pub use media::*;
pub use order::*;

/// Attribute carrying a relocation directive, e.g.
/// `data-da=".sidebar, 992, first"`.
pub const DIRECTIVE_ATTR: &str = "data-da";

/// Marker class present on an element while it resides at its target
/// rather than its source parent.
pub const RELOCATED_CLASS: &str = "_dynamic_adapt_";
