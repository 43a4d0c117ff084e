use chrono::{DateTime, Utc};

/// Millisecond difference between two RFC 3339 timestamps.
///
/// Returns `None` when either side is absent or does not parse as a valid
/// instant. Negative raw differences (clock skew between runners,
/// out-of-order records) clamp to zero rather than surfacing as negative
/// durations.
pub fn delta(start: Option<&str>, end: Option<&str>) -> Option<i64> {
    let start = parse_instant(start?)?;
    let end = parse_instant(end?)?;
    Some((end - start).num_milliseconds().max(0))
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}

/// Render a millisecond duration as `"3m 42s"`, or `"42s"` under a minute.
///
/// An unknown duration renders as an em dash.
pub fn format_duration(ms: Option<i64>) -> String {
    let Some(ms) = ms else {
        return "—".to_owned();
    };

    // round half up to whole seconds
    let total_secs = (ms + 500) / 1000;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;

    if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
