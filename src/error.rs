use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid canvas: width={width}, height={height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("series is empty")]
    EmptySeries,
}
