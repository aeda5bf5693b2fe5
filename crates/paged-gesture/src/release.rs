//! Boundary release rule
//!
//! A drag hands the gesture to the paging container only when it pulls
//! further into the edge the content already rests on:
//!
//! | drag     | boundary | releases |
//! |----------|----------|----------|
//! | downward | top      | yes      |
//! | upward   | bottom   | yes      |
//! | downward | bottom   | no       |
//! | upward   | top      | no       |

use serde::{Deserialize, Serialize};

use crate::session::BoundaryDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragDirection {
    /// Finger moving down the screen (`dy > 0`)
    Downward,
    /// Finger moving up the screen (`dy < 0`)
    Upward,
}

impl DragDirection {
    /// Direction of a vertical displacement; `None` when there is none
    pub fn from_delta(dy: f64) -> Option<Self> {
        if dy > 0.0 {
            Some(DragDirection::Downward)
        } else if dy < 0.0 {
            Some(DragDirection::Upward)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DragDirection::Downward => "downward",
            DragDirection::Upward => "upward",
        }
    }
}

impl std::fmt::Display for DragDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether dragging in `direction` at `boundary` releases the gesture to paging
pub fn releases_boundary(direction: DragDirection, boundary: BoundaryDirection) -> bool {
    matches!(
        (direction, boundary),
        (DragDirection::Downward, BoundaryDirection::Top)
            | (DragDirection::Upward, BoundaryDirection::Bottom)
    )
}
