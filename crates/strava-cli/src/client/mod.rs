//! HTTP client for the Strava activity API

mod api;
mod tokens;

pub use api::StravaClient;
pub use tokens::AccessToken;

use chrono::{NaiveDate, NaiveTime};

use crate::error::{Result, StravaError};

/// Inclusive-exclusive epoch-second window bounding an ingest run.
/// Absent bounds mean unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    pub after: Option<i64>,
    pub before: Option<i64>,
}

impl TimeWindow {
    /// Build a window from optional textual bounds, each `YYYY-MM-DD`
    /// (midnight) or raw epoch seconds.
    pub fn from_bounds(after: Option<&str>, before: Option<&str>) -> Result<Self> {
        Ok(Self {
            after: after.map(parse_time_bound).transpose()?,
            before: before.map(parse_time_bound).transpose()?,
        })
    }
}

fn parse_time_bound(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    if let Ok(epoch) = raw.parse::<i64>() {
        return Ok(epoch);
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        StravaError::parse(format!(
            "invalid time bound: {raw}. Expected YYYY-MM-DD or epoch seconds"
        ))
    })?;
    Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_bound_passes_through() {
        let window = TimeWindow::from_bounds(Some("1704067200"), None).unwrap();
        assert_eq!(window.after, Some(1704067200));
        assert_eq!(window.before, None);
    }

    #[test]
    fn test_date_bound_maps_to_midnight() {
        let window = TimeWindow::from_bounds(None, Some("2024-01-01")).unwrap();
        assert_eq!(window.before, Some(1704067200));
    }

    #[test]
    fn test_invalid_bound_is_a_parse_error() {
        let err = TimeWindow::from_bounds(Some("yesterday"), None).unwrap_err();
        assert!(matches!(err, StravaError::Parse(_)));
    }

    #[test]
    fn test_unbounded_window() {
        assert_eq!(
            TimeWindow::from_bounds(None, None).unwrap(),
            TimeWindow::default()
        );
    }
}
