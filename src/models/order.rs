//! Insertion order tokens
//!
//! The third directive field controls where a relocated element lands
//! inside its target: first child, last child, or before the child at a
//! given index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where to insert an element inside its target container.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Insert as the target's first child.
    First,
    /// Append as the target's last child.
    Last,
    /// Insert before the target's child at this position. Indices at or
    /// past the current child count degrade to append.
    Index(usize),
}

impl Default for Order {
    fn default() -> Self {
        Order::Last
    }
}

impl Order {
    /// Parse an order token. `"first"` and `"last"` are literals,
    /// non-negative integer text becomes `Index`; anything else falls
    /// back to the `last` default.
    pub fn parse(token: &str) -> Self {
        match token {
            "first" => Order::First,
            "last" => Order::Last,
            other => other.parse::<usize>().map(Order::Index).unwrap_or(Order::Last),
        }
    }

    /// Rank used as the secondary sort key among descriptors sharing a
    /// breakpoint: `first` sorts before any other token, `last` after any
    /// other, and any two index tokens are equal-ranked (the sort is
    /// stable, so document order decides between them).
    pub fn sort_rank(self) -> u8 {
        match self {
            Order::First => 0,
            Order::Index(_) => 1,
            Order::Last => 2,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::First => write!(f, "first"),
            Order::Last => write!(f, "last"),
            Order::Index(i) => write!(f, "{}", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literals() {
        assert_eq!(Order::parse("first"), Order::First);
        assert_eq!(Order::parse("last"), Order::Last);
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(Order::parse("0"), Order::Index(0));
        assert_eq!(Order::parse("12"), Order::Index(12));
    }

    #[test]
    fn test_parse_garbage_defaults_to_last() {
        assert_eq!(Order::parse("-1"), Order::Last);
        assert_eq!(Order::parse("3.5"), Order::Last);
        assert_eq!(Order::parse("middle"), Order::Last);
        assert_eq!(Order::parse(""), Order::Last);
    }

    #[test]
    fn test_sort_rank_edges() {
        assert!(Order::First.sort_rank() < Order::Index(0).sort_rank());
        assert!(Order::Index(7).sort_rank() < Order::Last.sort_rank());
        assert_eq!(Order::Index(0).sort_rank(), Order::Index(9).sort_rank());
    }
}
