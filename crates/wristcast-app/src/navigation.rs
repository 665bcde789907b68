//! Typed navigation context for the detail screen.

use std::sync::Arc;
use wristcast_common::RecordIndex;
use wristcast_data::WeatherProvider;

/// Context handed across the navigation boundary when a long-term row
/// is selected.
///
/// The provider travels by shared reference so the detail screen binds
/// against the same dataset the row was built from, even if the app
/// rebuilds its provider in the meantime.
#[derive(Clone)]
pub struct DetailContext {
    /// Data source the detail screen reads from.
    pub provider: Arc<dyn WeatherProvider>,
    /// Index of the selected long-term record.
    pub record_index: RecordIndex,
}

impl DetailContext {
    /// Creates a context for the given provider and record index.
    pub fn new(provider: Arc<dyn WeatherProvider>, record_index: impl Into<RecordIndex>) -> Self {
        Self {
            provider,
            record_index: record_index.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wristcast_common::MeasurementSystem;
    use wristcast_data::WeatherDataSource;

    #[test]
    fn test_context_carries_index() {
        let provider = Arc::new(WeatherDataSource::new(MeasurementSystem::Metric));
        let context = DetailContext::new(provider, 2);
        assert_eq!(context.record_index, RecordIndex(2));
    }

    #[test]
    fn test_clone_shares_provider() {
        let provider: Arc<dyn WeatherProvider> =
            Arc::new(WeatherDataSource::new(MeasurementSystem::Metric));
        let context = DetailContext::new(Arc::clone(&provider), 0);
        let cloned = context.clone();

        assert!(Arc::ptr_eq(&context.provider, &cloned.provider));
        assert_eq!(cloned.record_index, RecordIndex(0));
    }
}
