//! Grouped summaries and whole-dataset totals

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::models::NormalizedActivity;

/// Per-day aggregate row
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub distance_km: f64,
    pub moving_hours: f64,
    pub activity_count: usize,
}

/// Per-ISO-week aggregate row
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummary {
    pub year: i32,
    pub week: u32,
    pub distance_km: f64,
    pub moving_hours: f64,
    pub activity_count: usize,
}

impl WeeklySummary {
    /// ISO week label, e.g. "2025-W01"
    pub fn label(&self) -> String {
        format!("{}-W{:02}", self.year, self.week)
    }
}

/// Per-gear aggregate row
#[derive(Debug, Clone, PartialEq)]
pub struct GearSummary {
    pub gear_id: String,
    pub distance_km: f64,
}

/// Whole-dataset totals for the summary panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub distance_km: f64,
    pub moving_hours: f64,
    pub activity_count: usize,
    /// Absent when no row carries an elevation gain
    pub elevation_gain_m: Option<f64>,
    /// Number of distinct calendar dates with at least one activity
    pub active_days: usize,
}

/// Group activities by calendar date, ascending.
///
/// Sums skip rows whose derived value is absent; the count counts every row
/// in the group, with no deduplication by id.
pub fn daily_summary(activities: &[NormalizedActivity]) -> Vec<DailySummary> {
    let mut groups: BTreeMap<NaiveDate, DailySummary> = BTreeMap::new();

    for activity in activities {
        let entry = groups.entry(activity.date).or_insert_with(|| DailySummary {
            date: activity.date,
            distance_km: 0.0,
            moving_hours: 0.0,
            activity_count: 0,
        });
        if let Some(km) = activity.distance_km {
            entry.distance_km += km;
        }
        if let Some(hours) = activity.moving_hours {
            entry.moving_hours += hours;
        }
        entry.activity_count += 1;
    }

    groups.into_values().collect()
}

/// Group activities by ISO `(year, week)`, ascending by year then week.
pub fn weekly_summary(activities: &[NormalizedActivity]) -> Vec<WeeklySummary> {
    let mut groups: BTreeMap<(i32, u32), WeeklySummary> = BTreeMap::new();

    for activity in activities {
        let entry = groups
            .entry((activity.year, activity.week))
            .or_insert_with(|| WeeklySummary {
                year: activity.year,
                week: activity.week,
                distance_km: 0.0,
                moving_hours: 0.0,
                activity_count: 0,
            });
        if let Some(km) = activity.distance_km {
            entry.distance_km += km;
        }
        if let Some(hours) = activity.moving_hours {
            entry.moving_hours += hours;
        }
        entry.activity_count += 1;
    }

    groups.into_values().collect()
}

/// Sum distance per gear, descending by distance.
///
/// Rows without a `gear_id` are excluded (there is no null bucket). Ties
/// keep first-encountered gear order: the sort is stable and groups are
/// seeded in row order.
pub fn gear_distance(activities: &[NormalizedActivity]) -> Vec<GearSummary> {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, f64> = HashMap::new();

    for activity in activities {
        let Some(gear) = activity.record.gear_id.as_deref() else {
            continue;
        };
        if !sums.contains_key(gear) {
            order.push(gear.to_string());
            sums.insert(gear.to_string(), 0.0);
        }
        if let Some(km) = activity.distance_km {
            if let Some(total) = sums.get_mut(gear) {
                *total += km;
            }
        }
    }

    let mut rows: Vec<GearSummary> = order
        .into_iter()
        .map(|gear_id| {
            let distance_km = sums.remove(&gear_id).unwrap_or(0.0);
            GearSummary {
                gear_id,
                distance_km,
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.distance_km
            .partial_cmp(&a.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

/// Whole-dataset totals over an arbitrary (usually filtered) dataset.
pub fn totals(activities: &[NormalizedActivity]) -> Totals {
    let mut result = Totals::default();
    let mut days: BTreeSet<NaiveDate> = BTreeSet::new();

    for activity in activities {
        if let Some(km) = activity.distance_km {
            result.distance_km += km;
        }
        if let Some(hours) = activity.moving_hours {
            result.moving_hours += hours;
        }
        if let Some(gain) = activity.record.total_elevation_gain {
            *result.elevation_gain_m.get_or_insert(0.0) += gain;
        }
        result.activity_count += 1;
        days.insert(activity.date);
    }

    result.active_days = days.len();
    result
}
