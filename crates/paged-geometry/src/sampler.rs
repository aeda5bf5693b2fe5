//! Scroll surface metrics
//!
//! Hosts report `scrollTop` and friends with sub-pixel jitter
//! (`499.99999999` where `500` was meant). Every metric is rounded to
//! [`PRECISION`] decimal places before it takes part in a comparison.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::Result;

/// Decimal places kept after normalization
pub const PRECISION: i32 = 2;

const SCALE: f64 = 100.0;

/// Raw or normalized metrics of a scrollable surface
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    /// Distance scrolled from the top of the content
    pub scroll_top: f64,
    /// Full height of the content
    pub scroll_height: f64,
    /// Height of the visible viewport
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Round every metric, rejecting values that are not finite
    pub fn normalized(&self) -> Result<Self> {
        normalize(self)
    }
}

/// Round `value` to [`PRECISION`] decimal places
pub fn round_to_precision(value: f64) -> f64 {
    (value * SCALE).round() / SCALE
}

/// Add two metrics in whole hundredths so the sum carries no binary drift
pub fn precise_add(a: f64, b: f64) -> f64 {
    (to_hundredths(a) + to_hundredths(b)) / SCALE
}

fn to_hundredths(value: f64) -> f64 {
    (value * SCALE).round()
}

/// Normalize a metrics triple
pub fn normalize(metrics: &ScrollMetrics) -> Result<ScrollMetrics> {
    Ok(ScrollMetrics {
        scroll_top: checked("scroll_top", metrics.scroll_top)?,
        scroll_height: checked_extent("scroll_height", metrics.scroll_height)?,
        client_height: checked_extent("client_height", metrics.client_height)?,
    })
}

/// Heights cannot be negative; only `scroll_top` may overscroll below zero
fn checked_extent(field: &'static str, value: f64) -> Result<f64> {
    let rounded = checked(field, value)?;
    if rounded < 0.0 {
        return Err(GeometryError::InvalidGeometry { field, value });
    }
    Ok(rounded)
}

fn checked(field: &'static str, value: f64) -> Result<f64> {
    let rounded = round_to_precision(value);
    // Huge finite inputs overflow once scaled
    if !value.is_finite() || !rounded.is_finite() {
        return Err(GeometryError::InvalidGeometry { field, value });
    }
    Ok(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_subpixel_noise() {
        let metrics = ScrollMetrics::new(0.004, 999.999999, 500.0049);
        let normalized = normalize(&metrics).unwrap();

        assert_eq!(normalized.scroll_top, 0.0);
        assert_eq!(normalized.scroll_height, 1000.0);
        assert_eq!(normalized.client_height, 500.0);
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = normalize(&ScrollMetrics::new(f64::NAN, 10.0, 10.0)).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::InvalidGeometry {
                field: "scroll_top",
                ..
            }
        ));

        assert!(normalize(&ScrollMetrics::new(0.0, f64::INFINITY, 10.0)).is_err());
        assert!(normalize(&ScrollMetrics::new(0.0, 10.0, f64::NEG_INFINITY)).is_err());
        assert!(normalize(&ScrollMetrics::new(0.0, f64::MAX, 10.0)).is_err());
    }

    #[test]
    fn test_rejects_negative_heights() {
        let err = normalize(&ScrollMetrics::new(0.0, -10.0, 500.0)).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::InvalidGeometry {
                field: "scroll_height",
                ..
            }
        ));

        let err = ScrollMetrics::new(0.0, 1000.0, -20.0).normalized().unwrap_err();
        assert!(matches!(
            err,
            GeometryError::InvalidGeometry {
                field: "client_height",
                ..
            }
        ));

        // Rounds to zero, so it is still a valid extent
        assert!(normalize(&ScrollMetrics::new(0.0, -0.001, 0.0)).is_ok());
    }

    #[test]
    fn test_allows_overscrolled_top() {
        let normalized = normalize(&ScrollMetrics::new(-35.5, 1000.0, 500.0)).unwrap();
        assert_eq!(normalized.scroll_top, -35.5);
    }

    #[test]
    fn test_precise_add() {
        // 0.1 + 0.2 != 0.3 in plain floating point
        assert_eq!(precise_add(0.1, 0.2), 0.3);
        assert_eq!(precise_add(499.5, 500.5), 1000.0);
    }

    #[test]
    fn test_deserialize_host_metrics() {
        let metrics: ScrollMetrics = serde_json::from_str(
            r#"{"scrollTop": 12.5, "scrollHeight": 1000, "clientHeight": 500}"#,
        )
        .unwrap();
        assert_eq!(metrics, ScrollMetrics::new(12.5, 1000.0, 500.0));
    }
}
