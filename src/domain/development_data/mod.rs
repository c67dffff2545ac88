//! Development indicators aggregate: records, the store holding them and the
//! aggregation service deriving chart series.

pub mod entities;
mod sample_data;
pub mod services;
pub mod store;
pub mod value_objects;

pub use entities::*;
pub use services::{Aggregator, DEFAULT_FOCUS_COUNTRIES, DEFAULT_RACE_LIMIT};
pub use store::{DataStore, DataStoreBuilder};
pub use value_objects::*;
