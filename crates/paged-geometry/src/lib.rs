//! ScrollPaged Geometry
//!
//! Reads the metrics of a scrollable panel surface and decides whether its
//! content sits at the top or bottom edge.
//!
//! - `sampler` rounds raw host metrics to two decimal places
//! - `boundary` classifies normalized metrics as top, bottom, both or neither

mod boundary;
mod error;
mod sampler;

pub use boundary::{classify, BoundaryReport, Edge};
pub use error::GeometryError;
pub use sampler::{normalize, precise_add, round_to_precision, ScrollMetrics, PRECISION};

pub type Result<T> = std::result::Result<T, GeometryError>;
