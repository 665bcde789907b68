//! Application state: provider ownership, unit toggles, screen builders.

use crate::navigation::DetailContext;
use crate::screens::{DetailScreen, ForecastScreen};
use std::sync::Arc;
use tracing::info;
use wristcast_common::{MeasurementSystem, RecordIndex, Result};
use wristcast_config::{AppConfig, PreferenceStore};
use wristcast_data::{WeatherDataSource, WeatherProvider};
use wristcast_graphs::{CanvasSize, GraphStyle, SparklineRenderer};

/// The application root.
///
/// Owns the canned weather provider, the preference store, and the
/// sparkline renderer. Switching measurement systems rebuilds the
/// provider and persists the selection; screens are rebound from the
/// fresh provider afterwards.
pub struct WristcastApp {
    config: AppConfig,
    preferences: Arc<dyn PreferenceStore>,
    provider: Arc<dyn WeatherProvider>,
    renderer: SparklineRenderer,
}

impl WristcastApp {
    /// Loads the persisted unit selection and builds the initial
    /// provider from it.
    ///
    /// # Errors
    ///
    /// Propagates preference store load failures.
    pub async fn new(config: AppConfig, preferences: Arc<dyn PreferenceStore>) -> Result<Self> {
        let system = preferences.load_measurement_system().await?;
        let provider: Arc<dyn WeatherProvider> = Arc::new(WeatherDataSource::new(system));

        info!(%system, "initialized application");
        Ok(Self {
            config,
            preferences,
            provider,
            renderer: SparklineRenderer::new(),
        })
    }

    /// The system the current provider formats for.
    #[must_use]
    pub fn measurement_system(&self) -> MeasurementSystem {
        self.provider.measurement_system()
    }

    /// A shared handle to the current provider.
    #[must_use]
    pub fn provider(&self) -> Arc<dyn WeatherProvider> {
        Arc::clone(&self.provider)
    }

    /// Switches to metric units.
    ///
    /// # Errors
    ///
    /// Propagates preference store save failures.
    pub async fn switch_to_metric(&mut self) -> Result<()> {
        self.switch_system(MeasurementSystem::Metric).await
    }

    /// Switches to US customary units.
    ///
    /// # Errors
    ///
    /// Propagates preference store save failures.
    pub async fn switch_to_us_customary(&mut self) -> Result<()> {
        self.switch_system(MeasurementSystem::UsCustomary).await
    }

    async fn switch_system(&mut self, system: MeasurementSystem) -> Result<()> {
        self.provider = Arc::new(WeatherDataSource::new(system));
        self.preferences.save_measurement_system(system).await?;
        info!(%system, "switched measurement system");
        Ok(())
    }

    /// Binds the forecast screen from the current provider and config.
    ///
    /// # Errors
    ///
    /// Propagates mapper and renderer failures.
    pub async fn forecast_screen(&self) -> Result<ForecastScreen> {
        let canvas = CanvasSize::new(self.config.canvas.width, self.config.canvas.height);
        let style = GraphStyle {
            line_color: self.config.graph.line_color.clone(),
            background_color: self.config.graph.background_color.clone(),
            line_width: self.config.graph.line_width,
        };

        ForecastScreen::bind(self.provider.as_ref(), &self.renderer, canvas, &style).await
    }

    /// The navigation context for a selected long-term record.
    pub fn detail_context(&self, record_index: impl Into<RecordIndex>) -> DetailContext {
        DetailContext::new(self.provider(), record_index)
    }

    /// Binds the detail screen for a selected long-term record.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range index.
    pub fn detail_screen(&self, record_index: impl Into<RecordIndex>) -> Result<DetailScreen> {
        DetailScreen::bind(&self.detail_context(record_index))
    }
}
