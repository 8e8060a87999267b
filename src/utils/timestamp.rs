use chrono::{SecondsFormat, Utc};

/// Current UTC time as `2024-05-01T10:00:00.000Z`: RFC 3339, millisecond
/// precision, `Z` suffix.
pub fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
