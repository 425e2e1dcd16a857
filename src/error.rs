use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarmupError {
    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("JavaScript evaluation failed: {0}")]
    Evaluation(String),

    #[error("Element interaction failed: {0}")]
    ElementInteraction(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Page is closed")]
    PageClosed,

    #[error("Invalid site list: {0}")]
    InvalidSites(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Warming cancelled")]
    Cancelled,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WarmupError>;
