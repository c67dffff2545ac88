use super::entities::{RegionalRecord, YearRecord};
use super::sample_data::SAMPLE_STORE;
use super::value_objects::Year;
use crate::domain::errors::{DataError, DataResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Immutable store of country records and regional aggregates keyed by snapshot year.
///
/// Built once at startup; every query borrows from it, so one instance can be
/// shared by any number of chart controllers through an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    records: BTreeMap<Year, Vec<YearRecord>>,
    regional: BTreeMap<Year, Vec<RegionalRecord>>,
    years: Vec<Year>,
    regional_years: Vec<Year>,
}

impl DataStore {
    pub fn builder() -> DataStoreBuilder {
        DataStoreBuilder::default()
    }

    /// Bundled sample dataset (1960..2020).
    pub fn sample() -> Arc<DataStore> {
        Arc::clone(&SAMPLE_STORE)
    }

    /// Records of a snapshot year in load order.
    ///
    /// Callers are expected to snap to a member of [`available_years`](Self::available_years)
    /// first; an absent year is reported as [`DataError::NotFound`].
    pub fn records_for_year(&self, year: Year) -> DataResult<&[YearRecord]> {
        self.records
            .get(&year)
            .map(Vec::as_slice)
            .ok_or(DataError::NotFound { year })
    }

    pub fn regional_for_year(&self, year: Year) -> DataResult<&[RegionalRecord]> {
        self.regional
            .get(&year)
            .map(Vec::as_slice)
            .ok_or(DataError::NotFound { year })
    }

    /// Ascending snapshot years with country records.
    pub fn available_years(&self) -> &[Year] {
        &self.years
    }

    /// Ascending snapshot years with regional aggregates.
    pub fn regional_years(&self) -> &[Year] {
        &self.regional_years
    }

    pub fn contains_year(&self, year: Year) -> bool {
        self.records.contains_key(&year)
    }

    pub fn first_year(&self) -> Option<Year> {
        self.years.first().copied()
    }

    pub fn last_year(&self) -> Option<Year> {
        self.years.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }
}

/// Assembles a [`DataStore`], rejecting malformed seed data.
#[derive(Debug, Default)]
pub struct DataStoreBuilder {
    records: BTreeMap<Year, Vec<YearRecord>>,
    regional: BTreeMap<Year, Vec<RegionalRecord>>,
}

impl DataStoreBuilder {
    /// Add country records for a year. Repeated years are appended in load order.
    ///
    /// # Panics
    /// On a record with negative or non-finite GDP or a life expectancy outside (0, 120).
    pub fn with_year(mut self, year: Year, records: Vec<YearRecord>) -> Self {
        for record in &records {
            assert!(
                record.is_valid(),
                "invalid record for {} in {}: {:?}",
                record.country,
                year,
                record
            );
        }
        self.records.entry(year).or_default().extend(records);
        self
    }

    /// Add regional aggregates for a year.
    ///
    /// # Panics
    /// On negative values or when a region appears twice in the same year.
    pub fn with_regional_year(mut self, year: Year, records: Vec<RegionalRecord>) -> Self {
        let entry = self.regional.entry(year).or_default();
        for record in records {
            assert!(record.is_valid(), "invalid regional record in {}: {:?}", year, record);
            assert!(
                !entry.iter().any(|r| r.region == record.region),
                "duplicate regional record for {} in {}",
                record.region,
                year
            );
            entry.push(record);
        }
        self
    }

    pub fn build(self) -> DataStore {
        let years: Vec<Year> = self.records.keys().copied().collect();
        let regional_years: Vec<Year> = self.regional.keys().copied().collect();

        let store = DataStore {
            records: self.records,
            regional: self.regional,
            years,
            regional_years,
        };

        log_debug!(
            LogComponent::Domain("DataStore"),
            "built store: {} years, {} records, {} regional years",
            store.years.len(),
            store.record_count(),
            store.regional_years.len()
        );

        store
    }
}
