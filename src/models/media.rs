//! Media conditions
//!
//! One `MediaQuery` exists per distinct breakpoint. In the browser it is
//! rendered to a CSS media query string and handed to `matchMedia`; in
//! native tests it is evaluated directly against a simulated viewport
//! width.

use serde::{Deserialize, Serialize};

/// Default breakpoint applied when a directive omits one.
pub const DEFAULT_BREAKPOINT: u32 = 767;

/// Comparison direction for breakpoint conditions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaMode {
    /// `(min-width: ..)` — condition holds at or above the breakpoint.
    Min,
    /// `(max-width: ..)` — condition holds at or below the breakpoint.
    Max,
}

impl Default for MediaMode {
    fn default() -> Self {
        MediaMode::Max
    }
}

impl MediaMode {
    /// Lenient parse of the entry-point mode parameter: `"min"` selects
    /// min-width comparisons, anything else the `max` default.
    pub fn parse(value: &str) -> Self {
        if value == "min" {
            MediaMode::Min
        } else {
            MediaMode::Max
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            MediaMode::Min => "min",
            MediaMode::Max => "max",
        }
    }
}

/// A subscribable viewport-width predicate for one breakpoint.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaQuery {
    pub mode: MediaMode,
    pub breakpoint: u32,
}

impl MediaQuery {
    pub fn new(mode: MediaMode, breakpoint: u32) -> Self {
        Self { mode, breakpoint }
    }

    /// CSS media query string, e.g. `(max-width: 767px)`.
    pub fn css(&self) -> String {
        format!("({}-width: {}px)", self.mode.keyword(), self.breakpoint)
    }

    /// Evaluate the condition against a viewport width in pixels.
    pub fn matches_width(&self, width: u32) -> bool {
        match self.mode {
            MediaMode::Min => width >= self.breakpoint,
            MediaMode::Max => width <= self.breakpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_string() {
        assert_eq!(MediaQuery::new(MediaMode::Max, 767).css(), "(max-width: 767px)");
        assert_eq!(MediaQuery::new(MediaMode::Min, 992).css(), "(min-width: 992px)");
    }

    #[test]
    fn test_matches_width_boundaries() {
        let max = MediaQuery::new(MediaMode::Max, 767);
        assert!(max.matches_width(500));
        assert!(max.matches_width(767)); // Inclusive, like CSS max-width
        assert!(!max.matches_width(768));

        let min = MediaQuery::new(MediaMode::Min, 767);
        assert!(!min.matches_width(766));
        assert!(min.matches_width(767));
        assert!(min.matches_width(1000));
    }

    #[test]
    fn test_mode_parse_is_lenient() {
        assert_eq!(MediaMode::parse("min"), MediaMode::Min);
        assert_eq!(MediaMode::parse("max"), MediaMode::Max);
        assert_eq!(MediaMode::parse("MIN"), MediaMode::Max);
        assert_eq!(MediaMode::parse("anything"), MediaMode::Max);
    }
}
