use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Layout used for timestamps in logs and notification bodies.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Start of the lookback window: `now` seen from `tz`, minus `interval_minutes`,
/// as the naive wall-clock value GLPI stores in its `DATETIME` columns.
pub fn lookback_threshold(now: DateTime<Utc>, tz: Tz, interval_minutes: i64) -> NaiveDateTime {
    (now.with_timezone(&tz) - Duration::minutes(interval_minutes)).naive_local()
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Like [`format_timestamp`], rendering a missing value as empty text.
pub fn format_optional(ts: Option<NaiveDateTime>) -> String {
    ts.map(format_timestamp).unwrap_or_default()
}
