use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Scale domain that cannot be mapped (for example a zero business-day span).
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    #[error("series must contain at least one data point")]
    EmptySeries,
}
