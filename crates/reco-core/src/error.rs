use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecoError {
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Quote fetch error: {0}")]
    QuoteFetch(String),
}
