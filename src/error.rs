use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid display density: {density}")]
    InvalidDisplayDensity { density: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
