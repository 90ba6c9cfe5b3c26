//! Error types for cronhuman

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CronhumanError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CronhumanError {
    #[error("Error: Cron expression too long (max {0} chars).")]
    ExpressionTooLong(usize),

    #[error("Error: Invalid control characters in expression.")]
    ControlCharacters,

    #[error("Error: Invalid cron expression (newlines not allowed).")]
    Newlines,

    #[error("Error: 6-field cron detected. Use --seconds for seconds support.")]
    SecondsNotEnabled,

    #[error("Error: cron must have 5 fields (or 6 with --seconds).")]
    FieldCount,

    #[error("Invalid cron expression: {0}")]
    Parse(String),

    #[error("Invalid timezone \"{0}\". Use IANA like \"Europe/London\".")]
    Timezone(String),

    #[error("Invalid count: must be between 0 and 1000.")]
    Count,

    #[error("Error: Could not generate description. {0}")]
    Describe(String),
}

impl CronhumanError {
    /// Returns the appropriate exit code for this error
    ///
    /// Argument problems the operator can fix without touching the
    /// expression (bad zone, bad count) exit 2; everything about the
    /// expression itself exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CronhumanError::Timezone(_) | CronhumanError::Count => 2,
            _ => 1,
        }
    }
}
