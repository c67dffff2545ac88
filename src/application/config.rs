use crate::domain::{
    development_data::{DEFAULT_FOCUS_COUNTRIES, DEFAULT_RACE_LIMIT, RaceMetric},
    errors::{TimelineError, TimelineResult},
    timeline::ChartKind,
};
use serde::{Deserialize, Serialize};

/// Reference tick of the year animation
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1500;

/// Per chart instance settings, deserialisable from the JSON the page passes in.
///
/// Missing fields fall back to [`TimelineConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineConfig {
    pub chart_id: String,
    pub chart: ChartKind,
    pub tick_interval_ms: u32,
    pub race_metric: RaceMetric,
    pub race_limit: usize,
    /// Year shown before any input; snapped to the closest snapshot year.
    pub initial_year: Option<u32>,
    /// Countries drawn by the trajectory and radar charts, in legend order.
    pub countries: Vec<String>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            chart_id: "timeline-viz".to_string(),
            chart: ChartKind::Timeline,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            race_metric: RaceMetric::Gdp,
            race_limit: DEFAULT_RACE_LIMIT,
            initial_year: None,
            countries: DEFAULT_FOCUS_COUNTRIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TimelineConfig {
    pub fn for_chart(chart_id: &str, chart: ChartKind) -> Self {
        Self {
            chart_id: chart_id.to_string(),
            chart,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TimelineError::Configuration(format!("invalid timeline config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(TimelineError::Configuration(
                "tick interval must be positive".to_string(),
            ));
        }
        if self.race_limit == 0 {
            return Err(TimelineError::Configuration(
                "race limit must be positive".to_string(),
            ));
        }
        if self.chart_id.is_empty() {
            return Err(TimelineError::Configuration("chart id cannot be empty".to_string()));
        }
        let needs_countries = matches!(self.chart, ChartKind::Trajectory | ChartKind::Radar);
        if needs_countries && self.countries.is_empty() {
            return Err(TimelineError::Configuration(format!(
                "{} chart needs at least one country",
                self.chart
            )));
        }
        Ok(())
    }
}
