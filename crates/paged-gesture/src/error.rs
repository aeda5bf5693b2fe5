//! Gesture error types
//!
//! None of these reach the shell: handlers log them and allow propagation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GestureError {
    #[error("No active touch point")]
    MissingTouchPoint,

    #[error("Geometry error: {0}")]
    Geometry(#[from] paged_geometry::GeometryError),
}
