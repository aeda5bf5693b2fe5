//! Boundary classification
//!
//! ```text
//! scroll_top <= 0                              -> top
//! scroll_top + client_height >= scroll_height  -> bottom
//! scroll_height > client_height                -> has overflow
//! ```
//!
//! Sums and differences of the normalized metrics go through
//! [`precise_add`] so they carry no binary drift.
//! Content that fits its viewport is at the top and the bottom at once.

use serde::{Deserialize, Serialize};

use crate::sampler::{precise_add, ScrollMetrics};
use crate::Result;

/// A content edge of a scrollable surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
}

impl Edge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoundaryReport {
    pub is_top: bool,
    pub is_bottom: bool,
    /// Content is taller than its viewport
    pub has_scrollable_overflow: bool,
}

impl BoundaryReport {
    /// The edge the surface rests on, top taking precedence
    pub fn edge(&self) -> Option<Edge> {
        if self.is_top {
            Some(Edge::Top)
        } else if self.is_bottom {
            Some(Edge::Bottom)
        } else {
            None
        }
    }

    pub fn is_at_edge(&self) -> bool {
        self.is_top || self.is_bottom
    }
}

/// Classify a surface from its raw metrics
pub fn classify(metrics: &ScrollMetrics) -> Result<BoundaryReport> {
    let metrics = metrics.normalized()?;

    let height = metrics.scroll_height;
    let client = metrics.client_height;
    // A surface cannot rest past the end of its scroll range
    let max_top = precise_add(height, -client).max(0.0);
    let top = metrics.scroll_top.min(max_top);

    Ok(BoundaryReport {
        is_top: top <= 0.0,
        is_bottom: precise_add(top, client) >= height,
        has_scrollable_overflow: height > client,
    })
}
