use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid region: {0:?}")]
    InvalidRegion(String),

    #[error("invalid sampling parameter {name}: {value}")]
    InvalidSampling { name: &'static str, value: String },
}
