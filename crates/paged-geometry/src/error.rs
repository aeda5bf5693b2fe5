//! Geometry error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Invalid geometry: {field} = {value}")]
    InvalidGeometry { field: &'static str, value: f64 },
}
