pub mod aggregate;
pub mod demographic;
pub mod error;
pub mod record;

pub use aggregate::{Aggregate, IndicatorReport};
pub use demographic::{AgeBand, BaseCell, DemographicGroup};
pub use error::{EngineError, Result};
pub use record::{INDICATOR_FIELD, IndicatorRecord, PERCENTAGE_FIELD};
