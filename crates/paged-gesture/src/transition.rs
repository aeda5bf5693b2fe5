//! Pure session transitions
//!
//! Each function maps the current [`TouchSession`] and one event to the next
//! session and the decision for that event. Nothing here mutates shared
//! state; [`crate::GestureArbiter`] applies the results.
//!
//! Degraded input never fails a transition. A missing touch point or
//! unreadable geometry leaves the session as it was (or treats the surface
//! as not scrollable) and lets the event propagate, with the cause recorded
//! in [`Transition::degraded`].

use paged_geometry::{classify, ScrollMetrics};

use crate::decision::PropagationDecision;
use crate::error::GestureError;
use crate::release::{releases_boundary, DragDirection};
use crate::session::{BoundaryDirection, PageState, TouchPoint, TouchSession};

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub session: TouchSession,
    pub decision: PropagationDecision,
    /// Why the event fell back to the default decision, if it did
    pub degraded: Option<GestureError>,
}

impl Transition {
    fn new(session: TouchSession, decision: PropagationDecision) -> Self {
        Self {
            session,
            decision,
            degraded: None,
        }
    }

    fn degraded(session: TouchSession, error: GestureError) -> Self {
        Self {
            session,
            decision: PropagationDecision::ALLOW,
            degraded: Some(error),
        }
    }
}

/// Record the origin of a new gesture
pub fn touch_start(session: TouchSession, touches: &[TouchPoint]) -> Transition {
    match first_touch(touches) {
        Ok(origin) => Transition::new(session.begin(origin), PropagationDecision::ALLOW),
        Err(e) => Transition::degraded(session, e),
    }
}

/// Arbitrate a move between the paging container and the panel content
pub fn touch_move(
    session: TouchSession,
    touches: &[TouchPoint],
    target: &ScrollMetrics,
) -> Transition {
    let point = match first_touch(touches) {
        Ok(point) => point,
        Err(e) => return Transition::degraded(session, e),
    };
    let Some(origin) = session.start() else {
        return Transition::degraded(session, GestureError::MissingTouchPoint);
    };

    let (dx, dy) = point.delta_from(&origin);
    if dy.abs() <= dx.abs() {
        return Transition::new(session, PropagationDecision::ALLOW);
    }

    let (has_overflow, degraded) = match classify(target) {
        Ok(report) => (report.has_scrollable_overflow, None),
        Err(e) => (false, Some(GestureError::from(e))),
    };

    if !has_overflow {
        return Transition {
            session: session.with_captured(true),
            decision: PropagationDecision::ALLOW,
            degraded,
        };
    }

    // Something other than this surface may have flagged the boundary
    let session = if session.is_at_boundary() {
        check_boundary(session, target)
    } else {
        session
    };

    if !session.is_at_boundary() {
        return Transition::new(session.with_captured(false), PropagationDecision::SUPPRESS);
    }

    let releases = DragDirection::from_delta(dy)
        .is_some_and(|direction| releases_boundary(direction, session.boundary_direction()));

    if releases {
        Transition::new(session.with_captured(true), PropagationDecision::ALLOW)
    } else {
        // Dragging back into content that is already at its edge
        let session = session
            .with_boundary(BoundaryDirection::None)
            .with_captured(false);
        Transition::new(session, PropagationDecision::SUPPRESS)
    }
}

/// Finish a gesture; content-owned gestures get their boundary committed
pub fn touch_end(session: TouchSession, target: Option<&ScrollMetrics>) -> Transition {
    if session.is_responder_captured() {
        return Transition::new(session, PropagationDecision::ALLOW);
    }

    let session = session.with_ended(true);
    match target {
        Some(target) => {
            let settled = scroll(session, target);
            Transition {
                decision: PropagationDecision::STOP,
                ..settled
            }
        }
        None => Transition::new(session, PropagationDecision::STOP),
    }
}

/// Commit a boundary once momentum scrolling after touch-end reaches it
pub fn scroll(session: TouchSession, target: &ScrollMetrics) -> Transition {
    if !session.is_ended() || session.is_at_boundary() {
        return Transition::new(session, PropagationDecision::ALLOW);
    }

    match classify(target) {
        Ok(report) => {
            let session = session.with_boundary(BoundaryDirection::from(report.edge()));
            let session = if session.is_at_boundary() {
                session.with_ended(false)
            } else {
                session
            };
            Transition::new(session, PropagationDecision::ALLOW)
        }
        Err(e) => Transition::degraded(session, e.into()),
    }
}

/// A newly shown panel rests on the edge it was entered from
pub fn page_change(
    session: TouchSession,
    page: PageState,
    new_index: usize,
    old_index: usize,
) -> (TouchSession, PageState) {
    let boundary = if old_index > new_index {
        BoundaryDirection::Bottom
    } else {
        BoundaryDirection::Top
    };

    (
        session.with_boundary(boundary).with_captured(false),
        PageState {
            current_page_index: new_index,
        },
    )
}

/// Re-derive the boundary from live geometry, keeping the session on failure
fn check_boundary(session: TouchSession, target: &ScrollMetrics) -> TouchSession {
    match classify(target) {
        Ok(report) => session.with_boundary(BoundaryDirection::from(report.edge())),
        Err(_) => session,
    }
}

fn first_touch(touches: &[TouchPoint]) -> Result<TouchPoint, GestureError> {
    touches
        .first()
        .copied()
        .filter(TouchPoint::is_finite)
        .ok_or(GestureError::MissingTouchPoint)
}
