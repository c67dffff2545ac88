use super::value_objects::{RaceMetric, RadarIndicator, RecordMetric, Region, Year};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Domain entity - one country's indicators for a snapshot year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub country: String,
    pub region: Region,
    pub gdp_per_capita: f64,
    pub life_expectancy: f64,
    pub population: u64,
}

impl YearRecord {
    pub fn new(
        country: &str,
        region: Region,
        gdp_per_capita: f64,
        life_expectancy: f64,
        population: u64,
    ) -> Self {
        Self {
            country: country.to_string(),
            region,
            gdp_per_capita,
            life_expectancy,
            population,
        }
    }

    pub fn total_gdp(&self) -> f64 {
        self.gdp_per_capita * self.population as f64
    }

    pub fn metric(&self, metric: RecordMetric) -> f64 {
        match metric {
            RecordMetric::GdpPerCapita => self.gdp_per_capita,
            RecordMetric::LifeExpectancy => self.life_expectancy,
        }
    }

    pub fn race_value(&self, metric: RaceMetric) -> f64 {
        match metric {
            RaceMetric::Gdp => self.total_gdp(),
            RaceMetric::Population => self.population as f64,
            RaceMetric::LifeExpectancy => self.life_expectancy,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.gdp_per_capita.is_finite()
            && self.gdp_per_capita >= 0.0
            && self.life_expectancy > 0.0
            && self.life_expectancy < 120.0
    }
}

/// Domain entity - regional aggregate backing the GDP-per-capita trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalRecord {
    pub region: Region,
    pub gdp_trillions: f64,
    pub population_millions: f64,
    pub color: String,
}

impl RegionalRecord {
    pub fn new(region: Region, gdp_trillions: f64, population_millions: f64) -> Self {
        Self {
            region,
            gdp_trillions,
            population_millions,
            color: region.color().to_string(),
        }
    }

    /// GDP per capita in USD, `None` when the population is missing.
    pub fn gdp_per_capita_usd(&self) -> Option<f64> {
        if self.population_millions > 0.0 {
            Some((self.gdp_trillions / self.population_millions) * 1e6)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.gdp_trillions.is_finite()
            && self.gdp_trillions >= 0.0
            && self.population_millions.is_finite()
            && self.population_millions >= 0.0
    }
}

/// One line vertex of the regional wealth chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalGdpPoint {
    pub year: Year,
    pub region: Region,
    pub gdp_trillions: f64,
    pub gdp_per_capita_usd: f64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: Year,
    pub value: f64,
}

/// Derived series, built fresh for every query
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateSeries {
    pub region: Option<Region>,
    pub points: Vec<SeriesPoint>,
}

impl AggregateSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn value_at(&self, year: Year) -> Option<f64> {
        self.points.iter().find(|p| p.year == year).map(|p| p.value)
    }

    pub fn years(&self) -> Vec<Year> {
        self.points.iter().map(|p| p.year).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupGains {
    pub gdp_gain: f64,
    pub life_gain: f64,
}

/// West-vs-Rest development gains between two snapshot years
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GainsSummary {
    pub start_year: Year,
    pub end_year: Year,
    pub west: GroupGains,
    pub rest: GroupGains,
}

/// One bar of the racing bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceEntry {
    pub rank: usize,
    pub country: String,
    pub region: Region,
    pub value: f64,
    pub label: String,
}

/// One vertex of a country's wealth/health path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub year: Year,
    pub gdp: f64,
    pub life: f64,
}

/// A country's (GDP per capita, life expectancy) path over the snapshot years
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryTrajectory {
    pub country: String,
    pub values: Vec<TrajectoryPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarValue {
    pub indicator: RadarIndicator,
    pub raw: f64,
    pub normalized: f64,
}

/// One country's polygon on the radar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarProfile {
    pub country: String,
    pub region: Region,
    pub values: Vec<RadarValue>,
}

impl RadarProfile {
    pub fn from_record(record: &YearRecord) -> Self {
        let values = RadarIndicator::iter()
            .map(|indicator| {
                let raw = indicator.unit_value(
                    record.gdp_per_capita,
                    record.life_expectancy,
                    record.population,
                );
                RadarValue {
                    indicator,
                    raw,
                    normalized: indicator.normalize(raw),
                }
            })
            .collect();

        Self {
            country: record.country.clone(),
            region: record.region,
            values,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalGdp {
    pub region: Region,
    pub gdp_trillions: f64,
}

/// One stacked column of the regional GDP stream graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamRow {
    pub year: Year,
    pub layers: Vec<RegionalGdp>,
}

impl StreamRow {
    pub fn total(&self) -> f64 {
        self.layers.iter().map(|layer| layer.gdp_trillions).sum()
    }
}
