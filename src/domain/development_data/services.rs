use super::entities::{
    AggregateSeries, CountryTrajectory, GainsSummary, GroupGains, RaceEntry, RadarProfile,
    RegionalGdp, RegionalGdpPoint, SeriesPoint, StreamRow, TrajectoryPoint, YearRecord,
};
use super::store::DataStore;
use super::value_objects::{RaceMetric, RecordMetric, Region, RegionFilter, RegionGroup, Year};
use crate::domain::errors::{DataError, DataResult};
use crate::domain::timeline::TimelineFrame;
use strum::IntoEnumIterator;

/// Default number of bars in the racing bar chart
pub const DEFAULT_RACE_LIMIT: usize = 10;

/// Countries followed by the trajectory and radar charts unless configured otherwise
pub const DEFAULT_FOCUS_COUNTRIES: [&str; 6] =
    ["United States", "Germany", "Brazil", "Nigeria", "India", "China"];

/// Domain service deriving chart series from the data store.
///
/// Every method is a pure function of the store contents and its arguments,
/// so results can be cached by their inputs.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    store: &'a DataStore,
}

impl<'a> Aggregator<'a> {
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a DataStore {
        self.store
    }

    /// Regional GDP per capita for every regional year up to `cutoff`.
    ///
    /// Points are grouped by region (enum order), then ascending by year.
    /// Pairs without a record or with zero population are skipped.
    pub fn regional_trend(&self, cutoff: Year) -> Vec<RegionalGdpPoint> {
        let years: Vec<Year> = self
            .store
            .regional_years()
            .iter()
            .copied()
            .filter(|year| *year <= cutoff)
            .collect();

        let mut points = Vec::new();
        for region in Region::iter() {
            for &year in &years {
                let Ok(records) = self.store.regional_for_year(year) else {
                    continue;
                };
                let Some(record) = records.iter().find(|r| r.region == region) else {
                    continue;
                };
                if let Some(gdp_per_capita_usd) = record.gdp_per_capita_usd() {
                    points.push(RegionalGdpPoint {
                        year,
                        region,
                        gdp_trillions: record.gdp_trillions,
                        gdp_per_capita_usd,
                        color: record.color.clone(),
                    });
                }
            }
        }
        points
    }

    /// Population-weighted mean of `metric` over the records matching `filter`.
    pub fn weighted_mean<F>(
        &self,
        year: Year,
        filter: &F,
        metric: RecordMetric,
    ) -> DataResult<f64>
    where
        F: RegionFilter + ?Sized,
    {
        let records = self.store.records_for_year(year)?;
        weighted_mean_of(records, filter, metric).ok_or_else(|| DataError::InsufficientData {
            year,
            group: filter.describe(),
        })
    }

    /// Population-weighted life expectancy per year.
    ///
    /// Years whose filtered population sums to zero are left out of the
    /// series; a year missing from the store fails with `NotFound`.
    pub fn weighted_life_expectancy<F>(
        &self,
        years: &[Year],
        filter: &F,
    ) -> DataResult<AggregateSeries>
    where
        F: RegionFilter + ?Sized,
    {
        let mut points = Vec::with_capacity(years.len());
        for &year in years {
            match self.weighted_mean(year, filter, RecordMetric::LifeExpectancy) {
                Ok(value) => points.push(SeriesPoint { year, value }),
                Err(DataError::InsufficientData { .. }) => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(AggregateSeries { region: None, points })
    }

    /// Life expectancy series for one named group, carrying the region when the
    /// group is a single region.
    pub fn group_life_expectancy(
        &self,
        years: &[Year],
        group: RegionGroup,
    ) -> DataResult<AggregateSeries> {
        let mut series = self.weighted_life_expectancy(years, &group)?;
        if let RegionGroup::Only(region) = group {
            series.region = Some(region);
        }
        Ok(series)
    }

    /// West-vs-Rest gains in GDP per capita and life expectancy.
    pub fn gains_between(&self, start: Year, end: Year) -> DataResult<GainsSummary> {
        Ok(GainsSummary {
            start_year: start,
            end_year: end,
            west: self.group_gains(start, end, &RegionGroup::West)?,
            rest: self.group_gains(start, end, &RegionGroup::Rest)?,
        })
    }

    fn group_gains(&self, start: Year, end: Year, group: &RegionGroup) -> DataResult<GroupGains> {
        let gdp_start = self.weighted_mean(start, group, RecordMetric::GdpPerCapita)?;
        let gdp_end = self.weighted_mean(end, group, RecordMetric::GdpPerCapita)?;
        let life_start = self.weighted_mean(start, group, RecordMetric::LifeExpectancy)?;
        let life_end = self.weighted_mean(end, group, RecordMetric::LifeExpectancy)?;

        Ok(GroupGains {
            gdp_gain: gdp_end - gdp_start,
            life_gain: life_end - life_start,
        })
    }

    /// Countries of a year ranked by `metric`, largest first, at most `limit` entries.
    pub fn race_ranking(
        &self,
        year: Year,
        metric: RaceMetric,
        limit: usize,
    ) -> DataResult<Vec<RaceEntry>> {
        let mut ranked: Vec<&YearRecord> = self.store.records_for_year(year)?.iter().collect();
        // stable sort keeps load order for ties
        ranked.sort_by(|a, b| b.race_value(metric).total_cmp(&a.race_value(metric)));

        Ok(ranked
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(idx, record)| {
                let value = record.race_value(metric);
                RaceEntry {
                    rank: idx + 1,
                    country: record.country.clone(),
                    region: record.region,
                    value,
                    label: metric.format_value(value),
                }
            })
            .collect())
    }

    /// Everything the timeline chart draws for `year`: the wealth lines and the
    /// West/Rest life expectancy lines over all snapshot years up to it.
    pub fn timeline_frame(&self, year: Year) -> DataResult<TimelineFrame> {
        let years = self.years_up_to(year);
        Ok(TimelineFrame {
            year,
            regional_trend: self.regional_trend(year),
            life_west: self.group_life_expectancy(&years, RegionGroup::West)?,
            life_rest: self.group_life_expectancy(&years, RegionGroup::Rest)?,
        })
    }

    /// Wealth/health path of each requested country over the years up to `cutoff`.
    ///
    /// Countries keep the requested order; years where a country has no record
    /// are skipped, so a country absent from the store gets an empty path.
    pub fn country_trajectories<S: AsRef<str>>(
        &self,
        countries: &[S],
        cutoff: Year,
    ) -> Vec<CountryTrajectory> {
        let years = self.years_up_to(cutoff);
        countries
            .iter()
            .map(|country| {
                let country = country.as_ref();
                let values = years
                    .iter()
                    .filter_map(|&year| {
                        let records = self.store.records_for_year(year).ok()?;
                        let record = records.iter().find(|r| r.country == country)?;
                        Some(TrajectoryPoint {
                            year,
                            gdp: record.gdp_per_capita,
                            life: record.life_expectancy,
                        })
                    })
                    .collect();
                CountryTrajectory {
                    country: country.to_string(),
                    values,
                }
            })
            .collect()
    }

    /// Normalized radar profiles of the requested countries present in `year`.
    pub fn radar_profiles<S: AsRef<str>>(
        &self,
        year: Year,
        countries: &[S],
    ) -> DataResult<Vec<RadarProfile>> {
        let records = self.store.records_for_year(year)?;
        Ok(countries
            .iter()
            .filter_map(|country| records.iter().find(|r| r.country == country.as_ref()))
            .map(RadarProfile::from_record)
            .collect())
    }

    /// Regional GDP per regional year up to `cutoff`, one layer per region in enum order.
    pub fn stream_rows(&self, cutoff: Year) -> Vec<StreamRow> {
        self.store
            .regional_years()
            .iter()
            .copied()
            .filter(|year| *year <= cutoff)
            .filter_map(|year| {
                let records = self.store.regional_for_year(year).ok()?;
                let layers = Region::iter()
                    .filter_map(|region| {
                        records.iter().find(|r| r.region == region).map(|r| RegionalGdp {
                            region,
                            gdp_trillions: r.gdp_trillions,
                        })
                    })
                    .collect();
                Some(StreamRow { year, layers })
            })
            .collect()
    }

    /// Available years up to and including `cutoff`.
    pub fn years_up_to(&self, cutoff: Year) -> Vec<Year> {
        self.store
            .available_years()
            .iter()
            .copied()
            .take_while(|year| *year <= cutoff)
            .collect()
    }
}

/// `None` when the filtered population is zero.
fn weighted_mean_of<F>(records: &[YearRecord], filter: &F, metric: RecordMetric) -> Option<f64>
where
    F: RegionFilter + ?Sized,
{
    let (weighted, population) = records
        .iter()
        .filter(|r| filter.matches(r.region) && r.population > 0)
        .fold((0.0_f64, 0.0_f64), |(weighted, population), r| {
            let pop = r.population as f64;
            (weighted + r.metric(metric) * pop, population + pop)
        });

    (population > 0.0).then(|| weighted / population)
}
