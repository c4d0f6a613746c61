//! Directive parsing
//!
//! Pure text-level parsing of `data-da` attribute values, isolated from
//! the DOM so it can be unit-tested directly.

pub mod directive;

pub use directive::parse_directive;
