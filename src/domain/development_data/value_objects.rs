use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - snapshot year
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Display, Constructor,
    Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Year(u32);

impl Year {
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Absolute distance in years, used when snapping slider values.
    pub fn distance(&self, other: Year) -> u32 {
        self.0.abs_diff(other.0)
    }
}

/// Value Object - coarse geographic/economic grouping
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, StrumDisplay, EnumIter, EnumString,
    AsRefStr, Serialize, Deserialize,
)]
pub enum Region {
    #[strum(serialize = "North America")]
    #[serde(rename = "North America")]
    NorthAmerica,

    #[strum(serialize = "Europe")]
    #[serde(rename = "Europe")]
    Europe,

    #[strum(serialize = "East Asia")]
    #[serde(rename = "East Asia")]
    EastAsia,

    #[strum(serialize = "South Asia")]
    #[serde(rename = "South Asia")]
    SouthAsia,

    #[strum(serialize = "Africa")]
    #[serde(rename = "Africa")]
    Africa,

    #[strum(serialize = "Latin America")]
    #[serde(rename = "Latin America")]
    LatinAmerica,
}

impl Region {
    pub fn label(&self) -> &str {
        self.as_ref()
    }

    /// Palette shared by every chart that colours by region.
    pub fn color(&self) -> &'static str {
        match self {
            Self::NorthAmerica => "#4e79a7",
            Self::Europe => "#f28e2c",
            Self::EastAsia => "#e15759",
            Self::SouthAsia => "#76b7b2",
            Self::Africa => "#59a14f",
            Self::LatinAmerica => "#edc949",
        }
    }

    pub fn is_western(&self) -> bool {
        matches!(self, Self::NorthAmerica | Self::Europe)
    }
}

/// Predicate over regions used by the weighted aggregates.
pub trait RegionFilter {
    fn matches(&self, region: Region) -> bool;

    /// Human readable name, only used in error messages and logs.
    fn describe(&self) -> String {
        "custom filter".to_string()
    }
}

impl<F> RegionFilter for F
where
    F: Fn(Region) -> bool,
{
    fn matches(&self, region: Region) -> bool {
        self(region)
    }
}

/// Named region filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionGroup {
    #[display(fmt = "West")]
    West,
    #[display(fmt = "Rest")]
    Rest,
    #[display(fmt = "All")]
    All,
    #[display(fmt = "{}", _0)]
    Only(Region),
}

impl RegionFilter for RegionGroup {
    fn matches(&self, region: Region) -> bool {
        match self {
            Self::West => region.is_western(),
            Self::Rest => !region.is_western(),
            Self::All => true,
            Self::Only(only) => *only == region,
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

/// Per-country metric that can be population weighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, AsRefStr)]
pub enum RecordMetric {
    #[strum(serialize = "gdp_per_capita")]
    GdpPerCapita,
    #[strum(serialize = "life_expectancy")]
    LifeExpectancy,
}

/// Metric used to rank countries in the racing bar chart
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum RaceMetric {
    /// Total GDP (per capita times population)
    #[default]
    #[strum(serialize = "gdp")]
    #[serde(rename = "gdp")]
    Gdp,

    #[strum(serialize = "population")]
    #[serde(rename = "population")]
    Population,

    #[strum(serialize = "life_expectancy")]
    #[serde(rename = "life_expectancy")]
    LifeExpectancy,
}

impl RaceMetric {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gdp => "Total GDP",
            Self::Population => "Population",
            Self::LifeExpectancy => "Life Expectancy",
        }
    }

    /// Format a metric value the way the bar labels show it.
    pub fn format_value(&self, value: f64) -> String {
        match self {
            Self::Gdp => format!("${:.2}T", value / 1e12),
            Self::Population => format!("{:.1}M", value / 1e6),
            Self::LifeExpectancy => format!("{:.1} yrs", value),
        }
    }
}

/// Axis of the country profile radar chart
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RadarIndicator {
    GdpPerCapita,
    LifeExpectancy,
    Population,
}

impl RadarIndicator {
    pub fn label(&self) -> &'static str {
        match self {
            Self::GdpPerCapita => "GDP per Capita",
            Self::LifeExpectancy => "Life Expectancy (55–85)",
            Self::Population => "Population (M)",
        }
    }

    /// Fixed `(min, max)` of the axis, in the unit of [`RadarIndicator::unit_value`].
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Self::GdpPerCapita => (0.0, 70_000.0),
            Self::LifeExpectancy => (55.0, 85.0),
            Self::Population => (0.0, 1_500.0),
        }
    }

    /// Raw record value in axis units (population in millions).
    pub fn unit_value(&self, gdp_per_capita: f64, life_expectancy: f64, population: u64) -> f64 {
        match self {
            Self::GdpPerCapita => gdp_per_capita,
            Self::LifeExpectancy => life_expectancy,
            Self::Population => population as f64 / 1e6,
        }
    }

    /// Position on the axis, clamped to `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        let (min, max) = self.bounds();
        let span = if max > min { max - min } else { 1.0 };
        ((value - min) / span).clamp(0.0, 1.0)
    }
}
