//! Library surface of the indicator reporting CLI (logging setup).

pub mod logging;
