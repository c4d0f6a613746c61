//! JavaScript-facing WASM API
//!
//! The page calls [`use_dynamic_adapt`] once after load; everything else
//! is driven by media-query change events. [`relocation_report`] exposes
//! a read-only state snapshot for devtools.
//!
//! # Module Structure
//!
//! - `core`: the entry point, singleton storage, and listener wiring
//! - `error`: the binding layer's error type
//! - `helpers`: console logging and serialization utilities

pub mod core;
pub mod error;
pub mod helpers;

pub use core::{relocation_report, use_dynamic_adapt};
pub use error::AdaptError;
