//! Activity listing over the local dataset

use std::path::PathBuf;

use crate::error::Result;
use crate::metrics::ActivityFilter;

use super::{load_filtered, truncate};

/// List filtered activities, most recent first
pub fn list(filter: ActivityFilter, limit: usize, data_dir: Option<PathBuf>) -> Result<()> {
    let Some(activities) = load_filtered(data_dir, &filter)? else {
        return Ok(());
    };

    if activities.is_empty() {
        println!("No activities match the filters.");
        return Ok(());
    }

    // Print header
    println!(
        "{:<12} {:<28} {:<14} {:>10} {:>10} {:>8}  {:<10}",
        "Date", "Name", "Sport", "Distance", "Time", "D+", "Gear"
    );
    println!("{}", "-".repeat(99));

    // Print each activity
    for activity in activities.iter().take(limit) {
        println!(
            "{:<12} {:<28} {:<14} {:>10} {:>10} {:>8}  {:<10}",
            activity.date.format("%Y-%m-%d"),
            truncate(&activity.record.display_name(), 28),
            truncate(&activity.sport_type, 14),
            activity.distance_display(),
            activity.record.moving_time_formatted(),
            activity.elevation_display(),
            activity.record.gear_id.as_deref().unwrap_or("-"),
        );
    }

    println!(
        "\nShowing {} of {} activities",
        activities.len().min(limit),
        activities.len()
    );

    Ok(())
}
