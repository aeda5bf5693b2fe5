//! View configuration
//!
//! Height and width only size the outer container; they never reach the
//! gesture arbiter.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// CSS height of the container
    #[serde(default = "full_extent")]
    pub height: String,
    /// CSS width of the container
    #[serde(default = "full_extent")]
    pub width: String,
}

fn full_extent() -> String {
    "100%".to_string()
}

impl ViewConfig {
    pub fn new(height: impl Into<String>, width: impl Into<String>) -> Self {
        Self {
            height: height.into(),
            width: width.into(),
        }
    }

    pub fn from_json(payload: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(payload)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.height.trim().is_empty() {
            return Err(CoreError::Config("height cannot be empty".to_string()));
        }
        if self.width.trim().is_empty() {
            return Err(CoreError::Config("width cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Style of the flex container wrapping the paging view
    pub fn container_style(&self) -> Map<String, Value> {
        let mut style = Map::new();
        style.insert("display".to_string(), json!("flex"));
        style.insert("flex".to_string(), json!(1));
        style.insert("height".to_string(), json!(self.height));
        style.insert("width".to_string(), json!(self.width));
        style
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new(full_extent(), full_extent())
    }
}
