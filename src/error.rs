use thiserror::Error;

pub type Result<T> = std::result::Result<T, LangrankError>;

#[derive(Error, Debug)]
pub enum LangrankError {
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("GitHub API error: {0}")]
    Api(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Render error: {0}")]
    Render(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Plotters surfaces backend-generic error kinds; flatten them to a message.
impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for LangrankError
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        LangrankError::Render(err.to_string())
    }
}
