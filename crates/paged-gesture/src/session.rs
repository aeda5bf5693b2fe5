//! Touch session and page state records

use paged_geometry::Edge;
use serde::{Deserialize, Serialize};

/// A single tracked touch point, in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    pub fn is_finite(&self) -> bool {
        self.client_x.is_finite() && self.client_y.is_finite()
    }

    /// Displacement `(dx, dy)` from `origin` to this point
    pub fn delta_from(&self, origin: &TouchPoint) -> (f64, f64) {
        (self.client_x - origin.client_x, self.client_y - origin.client_y)
    }
}

/// The content edge a session is currently pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryDirection {
    #[default]
    None,
    Top,
    Bottom,
}

impl BoundaryDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryDirection::None => "none",
            BoundaryDirection::Top => "top",
            BoundaryDirection::Bottom => "bottom",
        }
    }
}

impl From<Option<Edge>> for BoundaryDirection {
    fn from(edge: Option<Edge>) -> Self {
        match edge {
            Some(Edge::Top) => BoundaryDirection::Top,
            Some(Edge::Bottom) => BoundaryDirection::Bottom,
            None => BoundaryDirection::None,
        }
    }
}

impl std::fmt::Display for BoundaryDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State of the gesture currently tracked on the visible panel
///
/// `is_at_boundary` is derived from the boundary direction, so a session can
/// never be "at a boundary" without naming which one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchSession {
    start: Option<TouchPoint>,
    is_ended: bool,
    boundary: BoundaryDirection,
    is_responder_captured: bool,
}

impl TouchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session for a panel that was just shown resting on `edge`
    pub fn at_edge(edge: Edge) -> Self {
        Self {
            boundary: BoundaryDirection::from(Some(edge)),
            ..Self::default()
        }
    }

    /// Point captured at the latest touch-start
    pub fn start(&self) -> Option<TouchPoint> {
        self.start
    }

    pub fn is_ended(&self) -> bool {
        self.is_ended
    }

    pub fn is_at_boundary(&self) -> bool {
        self.boundary != BoundaryDirection::None
    }

    pub fn boundary_direction(&self) -> BoundaryDirection {
        self.boundary
    }

    /// The paging container holds the gesture rather than the panel content
    pub fn is_responder_captured(&self) -> bool {
        self.is_responder_captured
    }

    /// Supersede the previous session's transient fields
    pub(crate) fn begin(self, origin: TouchPoint) -> Self {
        Self {
            start: Some(origin),
            is_ended: false,
            ..self
        }
    }

    pub(crate) fn with_boundary(self, boundary: BoundaryDirection) -> Self {
        Self { boundary, ..self }
    }

    pub(crate) fn with_captured(self, is_responder_captured: bool) -> Self {
        Self {
            is_responder_captured,
            ..self
        }
    }

    pub(crate) fn with_ended(self, is_ended: bool) -> Self {
        Self { is_ended, ..self }
    }
}

/// Longer-lived state that survives touch sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageState {
    pub current_page_index: usize,
}
