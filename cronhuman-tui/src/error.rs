//! Error types for cronhuman-tui

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Engine error (validation, description, projection)
    #[error("Engine error: {0}")]
    Engine(#[from] libcronhuman::CronhumanError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
