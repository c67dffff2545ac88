use crate::domain::development_data::Year;
use derive_more::Display;

/// Query failures of the data store and the aggregator
#[derive(Debug, Clone, PartialEq, Display)]
pub enum DataError {
    #[display(fmt = "no records for year {}", year)]
    NotFound { year: Year },
    #[display(fmt = "population of {} in {} sums to zero", group, year)]
    InsufficientData { year: Year, group: String },
}

impl std::error::Error for DataError {}

/// Errors surfaced by the timeline controller and the WASM surface
#[derive(Debug, Clone, PartialEq, Display)]
pub enum TimelineError {
    #[display(fmt = "Data Error: {}", _0)]
    Data(DataError),
    #[display(fmt = "Configuration Error: {}", _0)]
    Configuration(String),
    #[display(fmt = "Render Error: {}", _0)]
    Render(String),
}

impl std::error::Error for TimelineError {}

impl From<DataError> for TimelineError {
    fn from(error: DataError) -> Self {
        TimelineError::Data(error)
    }
}

pub type DataResult<T> = Result<T, DataError>;
pub type TimelineResult<T> = Result<T, TimelineError>;
