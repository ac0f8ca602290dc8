use thiserror::Error;

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Error)]
pub enum CoordError {
    #[error("invalid bounds: width={width}, height={height}")]
    InvalidBounds { width: i32, height: i32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("axis transform is not invertible")]
    NonInvertibleTransform,
}
