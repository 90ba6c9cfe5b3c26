//! Expression validation and next-run projection
//!
//! Input hardening (length, control characters, newlines) happens here,
//! before anything reaches the schedule parser. Macros expand to their
//! canonical 6-field form; plain expressions are normalized to 6 fields by
//! prepending a zero seconds column.

use std::str::FromStr;

use chrono::Local;
use chrono_tz::Tz;
use cron::Schedule;

use crate::error::{CronhumanError, Result};

/// Hard cap on raw expression length, applied before parsing.
pub const MAX_EXPRESSION_LEN: usize = 1000;

/// Upper bound for `next_runs` counts.
pub const MAX_NEXT_RUNS: usize = 1000;

const OCCURRENCE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Macro shorthands, expanded to 6-field expressions (seconds first,
/// Sunday = 0 in the day-of-week column).
const MACROS: &[(&str, &str)] = &[
    ("@yearly", "0 0 0 1 1 *"),
    ("@annually", "0 0 0 1 1 *"),
    ("@monthly", "0 0 0 1 * *"),
    ("@weekly", "0 0 0 * * 0"),
    ("@daily", "0 0 0 * * *"),
    ("@hourly", "0 0 * * * *"),
    ("@minutely", "0 * * * * *"),
    ("@secondly", "* * * * * *"),
    ("@weekdays", "0 0 0 * * 1-5"),
    ("@weekends", "0 0 0 * * 0,6"),
];

/// Options for [`validate`].
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// IANA zone the caller intends to project runs in.
    pub timezone: Option<String>,
    /// Accept 6-field expressions with a seconds column.
    pub allow_seconds: bool,
}

/// Check that an expression is well formed and parseable.
pub fn validate(expression: &str, options: &ValidateOptions) -> Result<()> {
    guard_raw(expression)?;

    if let Some(tz) = &options.timezone {
        resolve_timezone(tz)?;
    }

    let fields = normalize(expression, Some(options.allow_seconds))?;
    schedule_for(&fields)?;

    tracing::debug!(expression, "expression validated");
    Ok(())
}

/// Project the next `count` run times as formatted local timestamps.
///
/// `count` may be 0 (yields an empty list) up to [`MAX_NEXT_RUNS`]. With no
/// timezone the system's local zone is used.
pub fn next_runs(expression: &str, count: usize, timezone: Option<&str>) -> Result<Vec<String>> {
    if count > MAX_NEXT_RUNS {
        return Err(CronhumanError::Count);
    }

    let fields = normalize(expression, None)?;
    let schedule = schedule_for(&fields)?;

    let runs = match timezone {
        Some(tz) => {
            let tz = resolve_timezone(tz)?;
            schedule
                .upcoming(tz)
                .take(count)
                .map(|dt| dt.format(OCCURRENCE_FORMAT).to_string())
                .collect()
        }
        None => schedule
            .upcoming(Local)
            .take(count)
            .map(|dt| dt.format(OCCURRENCE_FORMAT).to_string())
            .collect(),
    };

    Ok(runs)
}

/// Reject raw input the parser should never see.
pub(crate) fn guard_raw(expression: &str) -> Result<()> {
    if expression.len() > MAX_EXPRESSION_LEN {
        return Err(CronhumanError::ExpressionTooLong(MAX_EXPRESSION_LEN));
    }

    // Tab is a legal field separator; every other control character is not.
    if expression
        .chars()
        .any(|c| matches!(c, '\x00'..='\x08' | '\x0E'..='\x1F' | '\x7F'))
    {
        return Err(CronhumanError::ControlCharacters);
    }

    if expression.contains(['\n', '\r']) {
        return Err(CronhumanError::Newlines);
    }

    Ok(())
}

/// Expand macros and split into the canonical 6 fields (seconds first).
///
/// `seconds_flag` carries the validate-time `allow_seconds` policy; `None`
/// (used by `explain` and `next_runs`) accepts 5 or 6 fields unconditionally.
/// Macros bypass the field-count rules entirely.
pub(crate) fn normalize(expression: &str, seconds_flag: Option<bool>) -> Result<Vec<String>> {
    let trimmed = expression.trim();

    if trimmed.starts_with('@') {
        let key = trimmed.to_ascii_lowercase();
        return match MACROS.iter().find(|(name, _)| *name == key) {
            Some((_, expanded)) => Ok(expanded.split_whitespace().map(str::to_string).collect()),
            None => Err(CronhumanError::Parse(format!(
                "unknown macro \"{trimmed}\""
            ))),
        };
    }

    let fields: Vec<&str> = trimmed.split_whitespace().collect();

    if seconds_flag == Some(false) && fields.len() == 6 {
        return Err(CronhumanError::SecondsNotEnabled);
    }

    match fields.len() {
        5 => Ok(std::iter::once("0")
            .chain(fields)
            .map(str::to_string)
            .collect()),
        6 => Ok(fields.into_iter().map(str::to_string).collect()),
        _ => Err(CronhumanError::FieldCount),
    }
}

/// Build a schedule from normalized fields.
///
/// The day-of-week column is remapped from the unix convention (0 and 7 are
/// Sunday) to the `cron` crate's 1-7 ordinals before parsing.
fn schedule_for(fields: &[String]) -> Result<Schedule> {
    debug_assert_eq!(fields.len(), 6);

    let mut fields = fields.to_vec();
    fields[5] = remap_dow(&fields[5]);

    let joined = fields.join(" ");
    Schedule::from_str(&joined).map_err(|e| CronhumanError::Parse(e.to_string()))
}

/// Remap numeric day-of-week tokens; names and step divisors pass through.
///
/// Both 0 and 7 mean Sunday. A span that ends on 7 (`5-7`, `5/2`) wraps
/// around under the crate's 1-7 ordinals, so those parts are enumerated
/// into plain value lists instead of remapped as ranges.
fn remap_dow(field: &str) -> String {
    field
        .split(',')
        .map(remap_dow_part)
        .collect::<Vec<_>>()
        .join(",")
}

fn remap_dow_part(part: &str) -> String {
    let map_token = |tok: &str| -> String {
        match tok.parse::<u32>() {
            Ok(n) if n <= 7 => ((n % 7) + 1).to_string(),
            _ => tok.to_string(),
        }
    };

    let (range, step) = match part.split_once('/') {
        Some((r, s)) => (r, Some(s)),
        None => (part, None),
    };

    let bounds = match range.split_once('-') {
        Some((lo, hi)) => lo.parse::<u32>().ok().zip(hi.parse::<u32>().ok()),
        // A bare value with a step runs to the end of the week
        None => range
            .parse::<u32>()
            .ok()
            .filter(|_| step.is_some())
            .map(|lo| (lo, 7)),
    };
    let step_by = match step {
        None => Some(1),
        Some(s) => s.parse::<u32>().ok().filter(|&n| n > 0),
    };

    if let (Some((lo, 7)), Some(step_by)) = (bounds, step_by) {
        if lo <= 7 {
            return (lo..=7)
                .step_by(step_by as usize)
                .map(|n| ((n % 7) + 1).to_string())
                .collect::<Vec<_>>()
                .join(",");
        }
    }

    let mapped = range
        .split('-')
        .map(|tok| map_token(tok))
        .collect::<Vec<_>>()
        .join("-");
    match step {
        Some(s) => format!("{mapped}/{s}"),
        None => mapped,
    }
}

/// Resolve an IANA zone name.
pub fn resolve_timezone(tz: &str) -> Result<Tz> {
    tz.parse::<Tz>()
        .map_err(|_| CronhumanError::Timezone(tz.to_string()))
}
