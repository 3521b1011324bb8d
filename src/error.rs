use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a whole number of milliseconds, got {value:?}: {source}")]
    InvalidNumber {
        key: &'static str,
        value: String,
        source: ParseIntError,
    },
    #[error("{key} must be greater than zero")]
    ZeroInterval { key: &'static str },
}
