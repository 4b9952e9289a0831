use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Milliseconds since the Unix epoch, used as creation-order identifiers.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
