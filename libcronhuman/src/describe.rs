//! Plain-English descriptions of cron expressions
//!
//! Produces 24-hour-clock phrases like "Every 5 minutes" or
//! "At 12:00, Monday through Friday". The descriptor accepts 5- or 6-field
//! expressions and expanded macros; whitespace-trimmed input describes
//! identically to untrimmed.

use crate::engine::{guard_raw, normalize};
use crate::error::{CronhumanError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Any,
    Step(u32),
    Value(u32),
    Range(u32, u32),
    RangeStep(u32, u32, u32),
}

#[derive(Debug, Clone)]
struct Field {
    parts: Vec<Part>,
}

impl Field {
    fn is_any(&self) -> bool {
        matches!(self.parts.as_slice(), [Part::Any])
    }

    fn as_value(&self) -> Option<u32> {
        match self.parts.as_slice() {
            [Part::Value(v)] => Some(*v),
            _ => None,
        }
    }

    fn as_step(&self) -> Option<u32> {
        match self.parts.as_slice() {
            [Part::Step(n)] => Some(*n),
            _ => None,
        }
    }

    fn as_range(&self) -> Option<(u32, u32)> {
        match self.parts.as_slice() {
            [Part::Range(a, b)] => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Value domain and naming for one cron column.
struct Kind {
    label: &'static str,
    min: u32,
    max: u32,
    names: Option<&'static [&'static str]>,
}

const SECONDS: Kind = Kind { label: "second", min: 0, max: 59, names: None };
const MINUTES: Kind = Kind { label: "minute", min: 0, max: 59, names: None };
const HOURS: Kind = Kind { label: "hour", min: 0, max: 23, names: None };
const DAYS_OF_MONTH: Kind = Kind { label: "day-of-month", min: 1, max: 31, names: None };

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August",
    "September", "October", "November", "December",
];
const MONTHS: Kind = Kind { label: "month", min: 1, max: 12, names: Some(&MONTH_NAMES) };

const DAY_NAMES: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];
const DAYS_OF_WEEK: Kind = Kind { label: "day-of-week", min: 0, max: 7, names: Some(&DAY_NAMES) };

/// Render an expression as plain English.
pub fn explain(expression: &str) -> Result<String> {
    guard_raw(expression)?;
    let fields = normalize(expression, None)?;

    let sec = parse_field(&fields[0], &SECONDS)?;
    let min = parse_field(&fields[1], &MINUTES)?;
    let hour = parse_field(&fields[2], &HOURS)?;
    let dom = parse_field(&fields[3], &DAYS_OF_MONTH)?;
    let month = parse_field(&fields[4], &MONTHS)?;
    let dow = parse_field(&fields[5], &DAYS_OF_WEEK)?;

    let mut out = time_phrase(&sec, &min, &hour);
    for extra in [dom_phrase(&dom), month_phrase(&month), dow_phrase(&dow)]
        .into_iter()
        .flatten()
    {
        out.push_str(", ");
        out.push_str(&extra);
    }
    Ok(out)
}

fn parse_field(text: &str, kind: &Kind) -> Result<Field> {
    let bad = || CronhumanError::Parse(format!("invalid {} field \"{}\"", kind.label, text));

    let mut parts = Vec::new();
    for raw in text.split(',') {
        if raw.is_empty() {
            return Err(bad());
        }
        parts.push(parse_part(raw, kind).ok_or_else(bad)?);
    }
    if parts.is_empty() {
        return Err(bad());
    }
    Ok(Field { parts })
}

fn parse_part(raw: &str, kind: &Kind) -> Option<Part> {
    if raw == "*" || raw == "?" {
        return Some(Part::Any);
    }

    let (base, step) = match raw.split_once('/') {
        Some((b, s)) => {
            let step: u32 = s.parse().ok()?;
            if step == 0 {
                return None;
            }
            (b, Some(step))
        }
        None => (raw, None),
    };

    if base == "*" {
        return step.map(Part::Step);
    }

    if let Some((lo, hi)) = base.split_once('-') {
        let lo = parse_value(lo, kind)?;
        let hi = parse_value(hi, kind)?;
        if lo > hi {
            return None;
        }
        return Some(match step {
            Some(n) => Part::RangeStep(lo, hi, n),
            None => Part::Range(lo, hi),
        });
    }

    let value = parse_value(base, kind)?;
    match step {
        // "5/2" means "every 2nd starting at 5"; treat as a range to max
        Some(n) => Some(Part::RangeStep(value, kind.max, n)),
        None => Some(Part::Value(value)),
    }
}

fn parse_value(token: &str, kind: &Kind) -> Option<u32> {
    if let Ok(n) = token.parse::<u32>() {
        if n < kind.min || n > kind.max {
            return None;
        }
        return Some(n);
    }

    // Names match by 3-letter prefix: "Mon" and "Monday" both resolve.
    let names = kind.names?;
    if token.len() < 3 || !token.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let prefix = token[..3].to_ascii_lowercase();
    names
        .iter()
        .position(|name| name[..3].to_ascii_lowercase() == prefix)
        .map(|idx| idx as u32 + kind.min)
}

fn time_phrase(sec: &Field, min: &Field, hour: &Field) -> String {
    if sec.is_any() && min.is_any() && hour.is_any() {
        return "Every second".to_string();
    }

    if let Some(n) = sec.as_step() {
        return with_hour_window(format!("Every {n} seconds"), hour);
    }
    if sec.is_any() {
        return with_hour_window("Every second".to_string(), hour);
    }

    // A fixed seconds column of 0 is the "no seconds" normal form.
    let sec_val = sec.as_value().unwrap_or(0);

    if min.is_any() {
        return with_hour_window("Every minute".to_string(), hour);
    }

    if let Some(n) = min.as_step() {
        let base = if n == 1 {
            "Every minute".to_string()
        } else {
            format!("Every {n} minutes")
        };
        return with_hour_window(base, hour);
    }

    if let Some(m) = min.as_value() {
        if let Some(h) = hour.as_value() {
            return if sec_val > 0 {
                format!("At {h:02}:{m:02}:{sec_val:02}")
            } else {
                format!("At {h:02}:{m:02}")
            };
        }
        if hour.is_any() {
            return if m == 0 {
                "Every hour".to_string()
            } else {
                format!("At {m} minutes past the hour")
            };
        }
        return with_hour_window(format!("At {m} minutes past the hour"), hour);
    }

    with_hour_window(format!("At minute {}", list_phrase(min, &MINUTES)), hour)
}

fn with_hour_window(base: String, hour: &Field) -> String {
    if hour.is_any() {
        return base;
    }
    if let Some(h) = hour.as_value() {
        return format!("{base}, between {h:02}:00 and {h:02}:59");
    }
    if let Some((a, b)) = hour.as_range() {
        return format!("{base}, between {a:02}:00 and {b:02}:59");
    }
    if let Some(n) = hour.as_step() {
        return format!("{base}, every {n} hours");
    }
    format!("{base}, at hour {}", list_phrase(hour, &HOURS))
}

fn dom_phrase(dom: &Field) -> Option<String> {
    if dom.is_any() {
        return None;
    }
    Some(if let Some(d) = dom.as_value() {
        format!("on day {d} of the month")
    } else if let Some((a, b)) = dom.as_range() {
        format!("on days {a} through {b} of the month")
    } else if let Some(n) = dom.as_step() {
        format!("on every {} day of the month", ordinal(n))
    } else {
        format!("on day {} of the month", list_phrase(dom, &DAYS_OF_MONTH))
    })
}

fn month_phrase(month: &Field) -> Option<String> {
    if month.is_any() {
        return None;
    }
    Some(if let Some(m) = month.as_value() {
        format!("only in {}", MONTH_NAMES[m as usize - 1])
    } else if let Some((a, b)) = month.as_range() {
        format!(
            "{} through {}",
            MONTH_NAMES[a as usize - 1],
            MONTH_NAMES[b as usize - 1]
        )
    } else if let Some(n) = month.as_step() {
        format!("every {} month", ordinal(n))
    } else {
        format!("in {}", list_phrase(month, &MONTHS))
    })
}

/// Unix convention: both 0 and 7 are Sunday.
fn day_name(d: u32) -> &'static str {
    DAY_NAMES[(d % 7) as usize]
}

fn dow_phrase(dow: &Field) -> Option<String> {
    if dow.is_any() {
        return None;
    }
    Some(if let Some(d) = dow.as_value() {
        format!("only on {}", day_name(d))
    } else if let Some((a, b)) = dow.as_range() {
        format!("{} through {}", day_name(a), day_name(b))
    } else if let Some(n) = dow.as_step() {
        format!("every {} day of the week", ordinal(n))
    } else {
        format!("on {}", list_phrase(dow, &DAYS_OF_WEEK))
    })
}

fn list_phrase(field: &Field, kind: &Kind) -> String {
    let display = |v: u32| -> String {
        match kind.names {
            // Wraps so a day-of-week 7 reads as Sunday
            Some(names) => names[(v - kind.min) as usize % names.len()].to_string(),
            None => v.to_string(),
        }
    };

    let rendered: Vec<String> = field
        .parts
        .iter()
        .map(|part| match part {
            Part::Any => "every".to_string(),
            Part::Value(v) => display(*v),
            Part::Range(a, b) => format!("{} through {}", display(*a), display(*b)),
            Part::Step(n) => format!("every {}", ordinal(*n)),
            Part::RangeStep(a, b, n) => {
                format!("every {} from {} through {}", ordinal(*n), display(*a), display(*b))
            }
        })
        .collect();

    match rendered.len() {
        1 => rendered.into_iter().next().unwrap_or_default(),
        2 => rendered.join(" and "),
        _ => {
            let (last, rest) = rendered.split_last().expect("non-empty list");
            format!("{}, and {}", rest.join(", "), last)
        }
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throws_on_invalid_input() {
        assert!(explain("not a cron").is_err());
        assert!(explain("* * bogus * *").is_err());
    }

    #[test]
    fn test_throws_on_unknown_macro() {
        let err = explain("@sometimes").unwrap_err().to_string();
        assert!(err.contains("@sometimes"));
    }

    #[test]
    fn test_24_hour_formatting() {
        let desc = explain("0 13 * * *").unwrap();
        assert!(desc.contains("13:00"), "{desc}");
        assert!(!desc.contains("PM"));
    }

    #[test]
    fn test_macro_descriptions() {
        assert!(explain("@hourly").unwrap().len() > 5);
        assert!(explain("@daily").unwrap().contains("00:00"));
        assert_eq!(explain("@secondly").unwrap(), "Every second");
        assert_eq!(explain("@weekly").unwrap(), "At 00:00, only on Sunday");
    }

    #[test]
    fn test_trimming_is_transparent() {
        assert_eq!(
            explain("*/5 * * * *").unwrap(),
            explain(" */5 * * * * ").unwrap()
        );
    }

    #[test]
    fn test_common_shapes() {
        assert_eq!(explain("*/5 * * * *").unwrap(), "Every 5 minutes");
        assert_eq!(explain("* * * * *").unwrap(), "Every minute");
        assert_eq!(explain("0 * * * *").unwrap(), "Every hour");
        assert_eq!(explain("30 * * * *").unwrap(), "At 30 minutes past the hour");
        assert_eq!(explain("0 12 * * *").unwrap(), "At 12:00");
        assert_eq!(
            explain("0 12 * * 1-5").unwrap(),
            "At 12:00, Monday through Friday"
        );
        assert_eq!(
            explain("0 0 * * 0,6").unwrap(),
            "At 00:00, on Sunday and Saturday"
        );
    }

    #[test]
    fn test_hour_windows() {
        assert_eq!(
            explain("*/15 9-17 * * *").unwrap(),
            "Every 15 minutes, between 09:00 and 17:59"
        );
        assert_eq!(
            explain("0 9-17 * * 1-5").unwrap(),
            "At 0 minutes past the hour, between 09:00 and 17:59, Monday through Friday"
        );
    }

    #[test]
    fn test_day_month_phrases() {
        assert_eq!(
            explain("0 0 1 * *").unwrap(),
            "At 00:00, on day 1 of the month"
        );
        assert_eq!(
            explain("0 0 1 1 *").unwrap(),
            "At 00:00, on day 1 of the month, only in January"
        );
        assert_eq!(
            explain("0 0 1 */2 *").unwrap(),
            "At 00:00, on day 1 of the month, every 2nd month"
        );
        assert_eq!(
            explain("0 0 1 6-8 *").unwrap(),
            "At 00:00, on day 1 of the month, June through August"
        );
    }

    #[test]
    fn test_seconds_column() {
        assert_eq!(explain("*/10 * * * * *").unwrap(), "Every 10 seconds");
        assert_eq!(explain("30 15 9 * * *").unwrap(), "At 09:15:30");
    }

    #[test]
    fn test_named_tokens() {
        assert_eq!(
            explain("0 12 * * Mon-Fri").unwrap(),
            "At 12:00, Monday through Friday"
        );
        assert_eq!(
            explain("0 0 1 Jan *").unwrap(),
            "At 00:00, on day 1 of the month, only in January"
        );
    }

    #[test]
    fn test_dow_seven_is_sunday() {
        assert_eq!(explain("0 0 * * 7").unwrap(), "At 00:00, only on Sunday");
    }

    #[test]
    fn test_dow_range_ending_on_sunday() {
        assert_eq!(
            explain("0 0 * * 5-7").unwrap(),
            "At 00:00, Friday through Sunday"
        );
    }

    #[test]
    fn test_dow_value_with_step() {
        assert_eq!(
            explain("0 0 * * 5/2").unwrap(),
            "At 00:00, on every 2nd from Friday through Sunday"
        );
        assert_eq!(
            explain("0 0 * * Fri/2").unwrap(),
            "At 00:00, on every 2nd from Friday through Sunday"
        );
    }

    #[test]
    fn test_minute_lists() {
        assert_eq!(
            explain("5,15,30 * * * *").unwrap(),
            "At minute 5, 15, and 30"
        );
    }

    #[test]
    fn test_newlines_rejected() {
        assert!(explain("* * * * *\n").is_err());
    }
}
