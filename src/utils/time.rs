//! Time utilities: parsing HH:MM and formatting class durations.

use chrono::NaiveTime;

/// Parse a clock time as typed in forms (`HH:MM`); `HH:MM:SS` is accepted too.
pub fn parse_hhmm(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// 90 → "1h 30m", 45 → "45m"
pub fn format_duration(mins: u32) -> String {
    let hours = mins / 60;
    let minutes = mins % 60;
    match (hours, minutes) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m:02}m"),
    }
}
