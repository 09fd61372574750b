use thiserror::Error;

/// The one message shown to the user when an analysis attempt fails,
/// regardless of whether the cause was transport, status, or a bad body.
pub const ANALYZE_FAILED_MESSAGE: &str = "Failed to analyze outfit. Please try again.";

#[derive(Error, Debug)]
pub enum LensError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Analysis service returned HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed analysis response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, LensError>;
