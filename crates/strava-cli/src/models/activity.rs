//! Activity data models for the Strava activity API
//!
//! `ActivityRecord` is the raw row shape returned by the activity list
//! endpoint; `NormalizedActivity` adds the derived columns the aggregation
//! layer works on.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Sport category used when a record carries neither `sport_type` nor `type`
pub const DEFAULT_SPORT_TYPE: &str = "Workout";

/// Raw activity row returned from the activity list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Unique activity identifier, used only as a count key
    #[serde(default)]
    pub id: Option<i64>,

    /// User-provided or auto-generated activity name
    #[serde(default)]
    pub name: Option<String>,

    /// Sport category (e.g. "Ride", "Run")
    #[serde(default)]
    pub sport_type: Option<String>,

    /// Legacy category field, superseded by `sport_type`
    #[serde(rename = "type", default)]
    pub activity_type: Option<String>,

    /// Start time in the athlete's local timezone
    #[serde(default)]
    pub start_date_local: Option<String>,

    /// Distance in meters
    #[serde(default)]
    pub distance: Option<f64>,

    /// Moving time in seconds
    #[serde(default)]
    pub moving_time: Option<f64>,

    /// Total elevation gain in meters
    #[serde(default)]
    pub total_elevation_gain: Option<f64>,

    /// Identifier of the equipment used
    #[serde(default)]
    pub gear_id: Option<String>,
}

impl ActivityRecord {
    /// Resolved sport category: `sport_type`, else legacy `type`, else
    /// [`DEFAULT_SPORT_TYPE`].
    pub fn sport(&self) -> String {
        self.sport_type
            .clone()
            .or_else(|| self.activity_type.clone())
            .unwrap_or_else(|| DEFAULT_SPORT_TYPE.to_string())
    }

    /// Get distance in kilometers
    pub fn distance_km(&self) -> Option<f64> {
        self.distance.map(|d| d / 1000.0)
    }

    /// Get moving time in hours
    pub fn moving_hours(&self) -> Option<f64> {
        self.moving_time.map(|s| s / 3600.0)
    }

    /// Get moving time formatted as H:MM:SS
    pub fn moving_time_formatted(&self) -> String {
        match self.moving_time {
            Some(secs) => {
                let total_secs = secs as u64;
                let hours = total_secs / 3600;
                let minutes = (total_secs % 3600) / 60;
                let seconds = total_secs % 60;
                if hours > 0 {
                    format!("{}:{:02}:{:02}", hours, minutes, seconds)
                } else {
                    format!("{}:{:02}", minutes, seconds)
                }
            }
            None => "-".to_string(),
        }
    }

    /// Get a display-friendly name for the activity
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| "Unnamed Activity".to_string())
    }
}

/// Activity record augmented with derived, unit-converted and
/// calendar-decomposed fields.
///
/// The raw record is embedded untouched so that re-running normalization
/// recomputes exactly the same derived values.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedActivity {
    /// The raw record the derived fields were computed from
    pub record: ActivityRecord,

    /// Resolved sport category, always present after normalization
    pub sport_type: String,

    /// Parsed local start time
    pub start_time: NaiveDateTime,

    /// Distance in kilometers, absent when the source field is absent
    pub distance_km: Option<f64>,

    /// Moving time in hours, absent when the source field is absent
    pub moving_hours: Option<f64>,

    /// Calendar date of the local start time
    pub date: NaiveDate,

    /// ISO week-year of the local start time
    pub year: i32,

    /// ISO week number of the local start time
    pub week: u32,
}

impl NormalizedActivity {
    /// Distance column for display, "-" when unknown
    pub fn distance_display(&self) -> String {
        self.distance_km
            .map(|d| format!("{:.2} km", d))
            .unwrap_or_else(|| "-".to_string())
    }

    /// Elevation gain column for display, "-" when unknown
    pub fn elevation_display(&self) -> String {
        self.record
            .total_elevation_gain
            .map(|e| format!("{:.0} m", e))
            .unwrap_or_else(|| "-".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sport_resolution_order() {
        let record = ActivityRecord {
            sport_type: Some("GravelRide".to_string()),
            activity_type: Some("Ride".to_string()),
            ..Default::default()
        };
        assert_eq!(record.sport(), "GravelRide");

        let record = ActivityRecord {
            activity_type: Some("Ride".to_string()),
            ..Default::default()
        };
        assert_eq!(record.sport(), "Ride");

        let record = ActivityRecord::default();
        assert_eq!(record.sport(), "Workout");
    }

    #[test]
    fn test_distance_km() {
        let record = ActivityRecord {
            distance: Some(10500.0),
            ..Default::default()
        };
        assert_eq!(record.distance_km(), Some(10.5));
        assert_eq!(ActivityRecord::default().distance_km(), None);
    }

    #[test]
    fn test_moving_time_formatted() {
        let mut record = ActivityRecord {
            moving_time: Some(3661.0), // 1h 1m 1s
            ..Default::default()
        };
        assert_eq!(record.moving_time_formatted(), "1:01:01");

        record.moving_time = Some(125.0); // 2m 5s
        assert_eq!(record.moving_time_formatted(), "2:05");

        record.moving_time = None;
        assert_eq!(record.moving_time_formatted(), "-");
    }

    #[test]
    fn test_legacy_type_field_deserialization() {
        let record: ActivityRecord =
            serde_json::from_str(r#"{"id": 1, "type": "Run"}"#).unwrap();
        assert_eq!(record.activity_type.as_deref(), Some("Run"));
        assert_eq!(record.sport_type, None);
        assert_eq!(record.sport(), "Run");
    }
}
