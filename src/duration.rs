//! ISO-8601 duration parsing and display formatting.
//!
//! YouTube reports video lengths as ISO-8601 duration strings. Two shapes
//! appear in practice: `PT#H#M#S` and the day-bearing `P#DT#H#M#S`. The
//! parser accepts the superset; anything that fails the grammar is treated
//! as an unknown duration of zero so a bad string never aborts ingestion.

use regex::Regex;

/// Total seconds from an ISO-8601 duration string like `PT3M12S`.
///
/// `None`, empty, and malformed input all yield 0.
pub fn parse_iso8601_duration(s: Option<&str>) -> u64 {
    let s = match s {
        Some(s) if !s.is_empty() => s,
        _ => return 0,
    };

    let re = Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$").unwrap();
    let caps = match re.captures(s) {
        Some(c) => c,
        None => return 0,
    };

    let num = |i: usize| -> u64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    num(1) * 86_400 + num(2) * 3_600 + num(3) * 60 + num(4)
}

/// Render seconds as `H:MM:SS` (or `M:SS` under an hour).
///
/// Zero seconds means the duration is unknown and renders as a dash.
pub fn format_duration(sec: u64) -> String {
    if sec == 0 {
        return "–".to_string();
    }

    let h = sec / 3600;
    let m = (sec % 3600) / 60;
    let s = sec % 60;

    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}
