use chrono::{DateTime, FixedOffset, Utc};

/// The transport API emits offsets without a colon (`+0200`), which is
/// not valid RFC 3339, so try both.
fn parse(timestamp: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(timestamp)
        .or_else(|_| DateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
}

/// Hour:minute in the timestamp's own offset. Unparseable input is
/// passed through unchanged so a bad field still shows something.
pub fn format_absolute(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return String::new();
    }

    match parse(timestamp) {
        Some(time) => time.format("%H:%M").to_string(),
        None => timestamp.to_string(),
    }
}

/// "now" / "in N min" for departures inside the next hour, absolute
/// time beyond that. `now` must be the instant of formatting, not of
/// data arrival, so labels drift correctly between renders.
pub fn format_relative(timestamp: &str, now: DateTime<Utc>) -> String {
    if timestamp.is_empty() {
        return String::new();
    }

    let Some(time) = parse(timestamp) else {
        return timestamp.to_string();
    };

    let diff_minutes =
        ((time.with_timezone(&Utc) - now).num_seconds() as f64 / 60.0).round() as i64;

    if diff_minutes <= 0 {
        "now".to_string()
    } else if diff_minutes < 60 {
        format!("in {diff_minutes} min")
    } else {
        format_absolute(timestamp)
    }
}
