//! Request and response payloads for the REST API.

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod health;
pub mod score;
pub mod session;
pub mod validation;

/// Render an epoch-seconds timestamp as RFC 3339 for API responses.
fn format_unix_timestamp(seconds: i64) -> String {
    OffsetDateTime::from_unix_timestamp(seconds)
        .ok()
        .and_then(|time| time.format(&Rfc3339).ok())
        .unwrap_or_else(|| "invalid-timestamp".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_seconds_render_as_rfc3339() {
        assert_eq!(format_unix_timestamp(0), "1970-01-01T00:00:00Z");
        assert_eq!(format_unix_timestamp(1_700_000_000), "2023-11-14T22:13:20Z");
    }
}
