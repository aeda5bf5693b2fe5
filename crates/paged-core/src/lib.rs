//! ScrollPaged Core
//!
//! Coordination layer for a vertical tab view whose panels scroll.
//! The shell forwards raw touch and scroll events here and applies the
//! returned propagation decisions; the arbiter state lives on this side.

mod config;
mod error;
mod event;
mod merge;
mod monitor;
mod notifier;
mod view;

pub use config::ViewConfig;
pub use error::CoreError;
pub use event::ShellEvent;
pub use merge::{merge_props, EventHandler, PropValue, Props};
pub use monitor::{ScrollViewMonitor, ON_SCROLL, ON_TOUCH_END, ON_TOUCH_MOVE, ON_TOUCH_START};
pub use notifier::{PageChangeCallback, PageChangeNotifier};
pub use view::ScrollPagedView;

// Re-export the arbitration layer
pub use paged_geometry::{BoundaryReport, Edge, GeometryError, ScrollMetrics};
pub use paged_gesture::{
    BoundaryDirection, GestureArbiter, GestureError, PageState, PropagationDecision, TouchPoint,
    TouchSession,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
