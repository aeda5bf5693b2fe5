//! Gesture arbiter
//!
//! Holds the live [`TouchSession`] and [`PageState`] for one vertical tab
//! view and applies the pure transitions to them, one event at a time.

use paged_geometry::{Edge, ScrollMetrics};

use crate::decision::PropagationDecision;
use crate::session::{PageState, TouchPoint, TouchSession};
use crate::transition::{self, Transition};

#[derive(Debug, Clone)]
pub struct GestureArbiter {
    session: TouchSession,
    page: PageState,
}

impl GestureArbiter {
    /// An arbiter for a view showing its first panel, resting on the top edge
    pub fn new() -> Self {
        Self {
            session: TouchSession::at_edge(Edge::Top),
            page: PageState::default(),
        }
    }

    /// Start from an explicit session, e.g. when restoring a view
    pub fn with_session(session: TouchSession, page: PageState) -> Self {
        Self { session, page }
    }

    pub fn session(&self) -> TouchSession {
        self.session
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page_index
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint]) -> PropagationDecision {
        self.apply("touch_start", transition::touch_start(self.session, touches))
    }

    pub fn touch_move(
        &mut self,
        touches: &[TouchPoint],
        target: &ScrollMetrics,
    ) -> PropagationDecision {
        self.apply(
            "touch_move",
            transition::touch_move(self.session, touches, target),
        )
    }

    pub fn touch_end(&mut self, target: Option<&ScrollMetrics>) -> PropagationDecision {
        self.apply("touch_end", transition::touch_end(self.session, target))
    }

    pub fn scroll(&mut self, target: &ScrollMetrics) -> PropagationDecision {
        self.apply("scroll", transition::scroll(self.session, target))
    }

    /// Reset per-panel state after the paging container settles on `new_index`
    pub fn page_changed(&mut self, new_index: usize, old_index: usize) {
        let (session, page) =
            transition::page_change(self.session, self.page, new_index, old_index);
        self.session = session;
        self.page = page;

        tracing::debug!(
            new_index,
            old_index,
            boundary = %session.boundary_direction(),
            "Page changed"
        );
    }

    fn apply(&mut self, event: &'static str, transition: Transition) -> PropagationDecision {
        if let Some(error) = &transition.degraded {
            tracing::warn!(event, error = %error, "Degraded gesture input, allowing propagation");
        }

        let before = self.session;
        self.session = transition.session;

        if before != self.session {
            tracing::debug!(
                event,
                boundary = %self.session.boundary_direction(),
                captured = self.session.is_responder_captured(),
                ended = self.session.is_ended(),
                decision = %transition.decision,
                "Touch session transition"
            );
        } else {
            tracing::trace!(event, decision = %transition.decision, "Touch session unchanged");
        }

        transition.decision
    }
}

impl Default for GestureArbiter {
    fn default() -> Self {
        Self::new()
    }
}
