//! Live preview pipeline
//!
//! Pure, synchronous validate -> explain -> project. Every failure mode
//! degrades to an error preview; nothing escapes to the caller, so this can
//! run on every keystroke.

use libcronhuman::{explain, next_runs, validate, CronhumanError, ValidateOptions};

use crate::app::AppState;

/// How many upcoming runs the preview shows.
pub const PREVIEW_RUNS: usize = 3;

/// Render-ready preview of the current expression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preview {
    pub text: String,
    pub is_error: bool,
    pub next_runs: Vec<String>,
}

/// Compute the preview for an expression under the given options.
pub fn preview(expression: &str, timezone: Option<&str>, allow_seconds: bool) -> Preview {
    let options = ValidateOptions {
        timezone: timezone.map(str::to_string),
        allow_seconds,
    };

    if let Err(e) = validate(expression, &options) {
        return error_preview(e);
    }

    let text = match explain(expression) {
        Ok(text) => text,
        Err(e) => return error_preview(e),
    };

    match next_runs(expression, PREVIEW_RUNS, timezone) {
        Ok(runs) => Preview {
            text,
            is_error: false,
            next_runs: runs,
        },
        Err(e) => error_preview(e),
    }
}

/// Preview derived from the session state.
pub fn preview_for(state: &AppState) -> Preview {
    preview(
        &state.expression,
        state.timezone.as_deref(),
        state.allow_seconds,
    )
}

fn error_preview(e: CronhumanError) -> Preview {
    Preview {
        text: e.to_string(),
        is_error: true,
        next_runs: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_expression() {
        let p = preview("*/5 * * * *", None, false);
        assert!(!p.is_error);
        assert!(p.text.contains("Every 5 minutes"), "{}", p.text);
        assert_eq!(p.next_runs.len(), PREVIEW_RUNS);
    }

    #[test]
    fn test_invalid_expression_degrades() {
        let p = preview("invalid cron string", None, false);
        assert!(p.is_error);
        assert!(!p.text.is_empty());
        assert!(p.next_runs.is_empty());
    }

    #[test]
    fn test_seconds_toggle_flips_six_field_result() {
        let p = preview("* * * * * *", None, false);
        assert!(p.is_error);
        assert!(p.text.contains("6-field"));

        let p = preview("* * * * * *", None, true);
        assert!(!p.is_error);
        assert_eq!(p.next_runs.len(), PREVIEW_RUNS);
    }

    #[test]
    fn test_empty_expression_is_an_error_preview() {
        let p = preview("", None, false);
        assert!(p.is_error);
        assert!(!p.text.is_empty());
    }

    #[test]
    fn test_weekend_spanning_day_of_week() {
        // Day-of-week spans that reach 7 (Sunday) must describe and project
        let p = preview("0 0 * * 5-7", None, false);
        assert!(!p.is_error, "{}", p.text);
        assert_eq!(p.next_runs.len(), PREVIEW_RUNS);

        let p = preview("0 0 * * 5/2", None, false);
        assert!(!p.is_error, "{}", p.text);
        assert!(p.text.contains("Friday"), "{}", p.text);
    }

    #[test]
    fn test_bad_timezone_degrades() {
        let p = preview("*/5 * * * *", Some("Nowhere/Nothing"), false);
        assert!(p.is_error);
        assert!(p.text.contains("Nowhere/Nothing"));
    }

    #[test]
    fn test_preview_for_reads_state() {
        let mut state = AppState::new();
        state.expression = "0 13 * * *".to_string();
        state.timezone = Some("UTC".to_string());

        let p = preview_for(&state);
        assert!(!p.is_error);
        assert!(p.text.contains("13:00"));
    }
}
