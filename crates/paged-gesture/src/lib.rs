//! ScrollPaged Gesture Arbitration
//!
//! Decides, per touch event, whether a vertical drag pages the stacked
//! panels or scrolls the content inside the visible panel.
//!
//! ```text
//! Idle
//!   ↓ touch-start
//! Tracking
//!   ↓ vertical touch-move
//! CapturedByContent | AtBoundary
//!   ↓ touch-end (+ momentum scroll)
//! Idle
//! ```
//!
//! Every handler in [`transition`] takes the current [`TouchSession`] and
//! returns the next one with a [`PropagationDecision`]. [`GestureArbiter`]
//! holds the live session between events.

mod arbiter;
mod decision;
mod error;
mod release;
mod session;
pub mod transition;

pub use arbiter::GestureArbiter;
pub use decision::PropagationDecision;
pub use error::GestureError;
pub use release::{releases_boundary, DragDirection};
pub use session::{BoundaryDirection, PageState, TouchPoint, TouchSession};
pub use transition::Transition;

pub type Result<T> = std::result::Result<T, GestureError>;
