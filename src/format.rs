//! Display formatting for counts, record age, and descriptions.
//!
//! Pure string helpers consumed by the presentation layer. Anything
//! time-dependent takes an explicit `now` so callers and tests control the
//! clock; the `Utc::now()` convenience wrappers live next to them.

use chrono::{DateTime, Utc};

/// Abbreviate a count with K/M/B suffixes above each thousand threshold.
///
/// `None` (a hidden count) renders as a dash, below 1,000 the exact integer.
pub fn format_count(n: Option<u64>) -> String {
    let n = match n {
        Some(n) => n,
        None => return "–".to_string(),
    };

    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Relative age of `published_at` measured against an explicit `now`.
///
/// Buckets, coarsest first: years, months, weeks, days, hours, minutes,
/// then "Just now". A timestamp in the future also renders as "Just now".
pub fn format_age_at(published_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(published_at);
    let days = delta.num_days();

    if days > 365 {
        ago(days / 365, "year")
    } else if days > 30 {
        ago(days / 30, "month")
    } else if days > 7 {
        ago(days / 7, "week")
    } else if days > 0 {
        ago(days, "day")
    } else if delta.num_hours() > 0 {
        ago(delta.num_hours(), "hour")
    } else if delta.num_minutes() > 0 {
        ago(delta.num_minutes(), "minute")
    } else {
        "Just now".to_string()
    }
}

/// Relative age against the current wall clock.
pub fn format_age(published_at: DateTime<Utc>) -> String {
    format_age_at(published_at, Utc::now())
}

fn ago(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Truncate a description to at most `max_chars` characters, cutting at the
/// last word boundary and appending an ellipsis.
pub fn truncate_description(desc: &str, max_chars: usize) -> String {
    if desc.chars().count() <= max_chars {
        return desc.to_string();
    }

    let cut: String = desc.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(' ') {
        Some(idx) => &cut[..idx],
        None => cut.as_str(),
    };
    format!("{}…", trimmed)
}
