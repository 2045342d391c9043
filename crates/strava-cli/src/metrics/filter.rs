//! User-facing dataset filters
//!
//! The presentation layer narrows the dataset by year, sport, distance range
//! and name substring before aggregating; the filter itself stays a pure
//! transform so commands hold no view state.

use chrono::Datelike;

use crate::models::NormalizedActivity;

/// Criteria applied to a normalized dataset. Absent criteria match all rows.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    /// Calendar year of the activity date
    pub year: Option<i32>,
    /// Sport categories to keep (exact match on the resolved category)
    pub sports: Option<Vec<String>>,
    /// Inclusive distance range in kilometers
    pub distance_km: Option<(f64, f64)>,
    /// Case-insensitive name substring
    pub name_contains: Option<String>,
}

impl ActivityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_sports(mut self, sports: Vec<String>) -> Self {
        self.sports = Some(sports);
        self
    }

    pub fn with_distance_km(mut self, min: f64, max: f64) -> Self {
        self.distance_km = Some((min, max));
        self
    }

    pub fn with_name_contains(mut self, query: impl Into<String>) -> Self {
        self.name_contains = Some(query.into());
        self
    }

    /// Keep rows matching every present criterion, most recent first.
    ///
    /// Once a distance range is set, rows with unknown distance are
    /// excluded; likewise rows without a name once a name query is set.
    pub fn apply(&self, activities: &[NormalizedActivity]) -> Vec<NormalizedActivity> {
        let query = self.name_contains.as_ref().map(|q| q.to_lowercase());
        let mut rows: Vec<NormalizedActivity> = activities
            .iter()
            .filter(|a| self.matches(a, query.as_deref()))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        rows
    }

    fn matches(&self, activity: &NormalizedActivity, query: Option<&str>) -> bool {
        if let Some(year) = self.year {
            if activity.date.year() != year {
                return false;
            }
        }
        if let Some(sports) = &self.sports {
            if !sports.iter().any(|s| s == &activity.sport_type) {
                return false;
            }
        }
        if let Some((min, max)) = self.distance_km {
            match activity.distance_km {
                Some(km) if km >= min && km <= max => {}
                _ => return false,
            }
        }
        if let Some(query) = query {
            match activity.record.name.as_deref() {
                Some(name) if name.to_lowercase().contains(query) => {}
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::normalize;
    use crate::models::ActivityRecord;

    fn dataset() -> Vec<NormalizedActivity> {
        let records = vec![
            ActivityRecord {
                id: Some(1),
                name: Some("Morning Ride".to_string()),
                sport_type: Some("Ride".to_string()),
                start_date_local: Some("2024-06-10T08:00:00".to_string()),
                distance: Some(40000.0),
                ..Default::default()
            },
            ActivityRecord {
                id: Some(2),
                name: Some("Lunch Run".to_string()),
                sport_type: Some("Run".to_string()),
                start_date_local: Some("2025-01-05T12:00:00".to_string()),
                distance: Some(10000.0),
                ..Default::default()
            },
            ActivityRecord {
                id: Some(3),
                name: None,
                sport_type: Some("Run".to_string()),
                start_date_local: Some("2025-02-01T09:00:00".to_string()),
                distance: None,
                ..Default::default()
            },
        ];
        normalize(&records).unwrap()
    }

    #[test]
    fn test_empty_filter_keeps_everything_most_recent_first() {
        let rows = ActivityFilter::new().apply(&dataset());
        let ids: Vec<Option<i64>> = rows.iter().map(|a| a.record.id).collect();
        assert_eq!(ids, vec![Some(3), Some(2), Some(1)]);
    }

    #[test]
    fn test_year_filter_uses_calendar_year() {
        let rows = ActivityFilter::new().with_year(2025).apply(&dataset());
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|a| a.date.year() == 2025));
    }

    #[test]
    fn test_sport_filter() {
        let rows = ActivityFilter::new()
            .with_sports(vec!["Ride".to_string()])
            .apply(&dataset());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.id, Some(1));
    }

    #[test]
    fn test_distance_range_excludes_unknown_distance() {
        let rows = ActivityFilter::new()
            .with_distance_km(5.0, 50.0)
            .apply(&dataset());
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|a| a.distance_km.is_some()));
    }

    #[test]
    fn test_name_filter_is_case_insensitive_and_excludes_unnamed() {
        let rows = ActivityFilter::new()
            .with_name_contains("ride")
            .apply(&dataset());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.id, Some(1));
    }

    #[test]
    fn test_filter_on_empty_dataset() {
        assert!(ActivityFilter::new().with_year(2025).apply(&[]).is_empty());
    }
}
