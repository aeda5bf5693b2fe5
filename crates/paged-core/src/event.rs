//! Events forwarded by the presentation shell
//!
//! The shell serializes native events as tagged JSON:
//!
//! ```json
//! {"type": "touch_move", "touches": [{"clientX": 10, "clientY": 42}],
//!  "target": {"scrollTop": 0, "scrollHeight": 1000, "clientHeight": 500}}
//! ```

use serde::{Deserialize, Serialize};

use paged_geometry::ScrollMetrics;
use paged_gesture::TouchPoint;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShellEvent {
    TouchStart {
        #[serde(default)]
        touches: Vec<TouchPoint>,
    },
    TouchMove {
        #[serde(default)]
        touches: Vec<TouchPoint>,
        target: ScrollMetrics,
    },
    TouchEnd {
        #[serde(default)]
        target: Option<ScrollMetrics>,
    },
    Scroll {
        target: ScrollMetrics,
    },
    PageChange {
        new_index: usize,
        old_index: usize,
    },
}

impl ShellEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            ShellEvent::TouchStart { .. } => "touch_start",
            ShellEvent::TouchMove { .. } => "touch_move",
            ShellEvent::TouchEnd { .. } => "touch_end",
            ShellEvent::Scroll { .. } => "scroll",
            ShellEvent::PageChange { .. } => "page_change",
        }
    }

    pub fn from_json(payload: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}
