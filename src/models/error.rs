#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("{0}")]
    Validation(String),

    #[error("Series length mismatch: {generation} generation points vs {price} price points")]
    Alignment { generation: usize, price: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether a manual retry of the same request can be expected to help
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
