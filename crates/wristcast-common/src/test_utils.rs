//! Test utilities and shared test helpers for Wristcast.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Test fixture for creating a mock timestamp.
pub fn mock_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> chrono::DateTime<chrono::Utc> {
    use chrono::TimeZone;

    chrono::Utc
        .with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Create a temporary file for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_file() -> tempfile::NamedTempFile {
    tempfile::NamedTempFile::new().expect("Failed to create temporary file")
}

/// Generate test data for graph mapping and rendering tests.
pub mod graph_fixtures {
    /// Generate a sample temperature series with the given length.
    ///
    /// Values ramp upward with a sine wobble so min and max are distinct
    /// for any length greater than one.
    pub fn generate_temperature_series(count: usize) -> Vec<f64> {
        (0..count)
            .map(|i| 10.0 + (i as f64 * 1.5) + (i as f64).sin() * 2.0)
            .collect()
    }

    /// A short-term series with a known minimum and maximum.
    pub fn known_extremes_series() -> Vec<f64> {
        vec![12.0, 18.0, 9.0, 21.0, 15.0]
    }

    /// A series where every sample is the same value.
    pub fn constant_series(value: f64, count: usize) -> Vec<f64> {
        vec![value; count]
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for generating finite temperature samples in a plausible range.
    pub fn temperature_strategy() -> impl Strategy<Value = f64> {
        -60.0f64..60.0f64
    }

    /// Strategy for generating non-empty finite sample series.
    pub fn sample_series_strategy(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(temperature_strategy(), 1..=max_len)
    }

    /// Strategy for generating positive canvas dimensions.
    pub fn canvas_dimension_strategy() -> impl Strategy<Value = f64> {
        1.0f64..2048.0f64
    }
}
