//! Cronhuman - cron expressions for humans
//!
//! This library is the engine behind the `cronhuman` CLI and TUI: it
//! validates cron expressions, renders them as plain English, and projects
//! upcoming run times in a given time zone.

pub mod describe;
pub mod engine;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use engine::{next_runs, validate, ValidateOptions, MAX_EXPRESSION_LEN};
pub use describe::explain;
pub use error::{CronhumanError, Result};
