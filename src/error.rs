use thiserror::Error;

pub type ParcoordResult<T> = Result<T, ParcoordError>;

#[derive(Debug, Error)]
pub enum ParcoordError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown dimension `{0}`")]
    UnknownDimension(String),
}
