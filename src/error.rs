use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to parse data document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to parse date: {0}")]
    Date(#[from] chrono::ParseError),

    #[error("event server startup failed")]
    Server(#[source] Box<dyn std::error::Error + Send + Sync>),
}
