//! Propagation decisions handed back to the shell

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropagationDecision {
    /// Keep the event away from the paging container
    pub stop_propagation: bool,
    /// Block the platform's default scroll handling
    pub prevent_default: bool,
}

impl PropagationDecision {
    /// Let the paging container see the event
    pub const ALLOW: Self = Self {
        stop_propagation: false,
        prevent_default: false,
    };

    /// Content keeps the gesture
    pub const SUPPRESS: Self = Self {
        stop_propagation: true,
        prevent_default: true,
    };

    /// Stop the event from reaching ancestors, default untouched
    pub const STOP: Self = Self {
        stop_propagation: true,
        prevent_default: false,
    };

    pub fn allows_propagation(&self) -> bool {
        !self.stop_propagation
    }

    /// Combine two handlers' decisions; either one can stop or prevent
    pub fn combine(self, other: Self) -> Self {
        Self {
            stop_propagation: self.stop_propagation || other.stop_propagation,
            prevent_default: self.prevent_default || other.prevent_default,
        }
    }
}

impl std::fmt::Display for PropagationDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.stop_propagation, self.prevent_default) {
            (false, false) => write!(f, "allow"),
            (true, true) => write!(f, "suppress"),
            (true, false) => write!(f, "stop"),
            (false, true) => write!(f, "prevent"),
        }
    }
}
