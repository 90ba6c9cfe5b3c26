//! cronhuman-tui library
//!
//! Exports the session state machine and rendering so tests can drive the
//! reducer without a terminal.

pub mod app;
pub mod error;
pub mod preview;
pub mod services;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{reduce, Action, AppState, Focus};
pub use error::{Result, TuiError};
pub use preview::{preview, preview_for, Preview};
