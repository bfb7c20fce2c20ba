pub mod catalog;
pub mod classify;
pub mod codes;
pub mod config;

pub use catalog::{CATALOG, find};
pub use classify::{Classification, classify, leading_code};
pub use codes::{detail_query_key, key_for_code};
pub use config::{ChartType, DataType, FieldRule, IndicatorConfig};
