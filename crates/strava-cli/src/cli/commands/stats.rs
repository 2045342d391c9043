//! Statistics commands over the local dataset

use std::path::PathBuf;

use crate::error::Result;
use crate::metrics::{
    daily_summary, eddington_number, gear_distance, totals, weekly_summary, ActivityFilter,
};

use super::load_filtered;

const NO_MATCH_MESSAGE: &str = "No activities match the filters.";

/// Totals panel for the filtered dataset
pub fn summary(filter: ActivityFilter, data_dir: Option<PathBuf>) -> Result<()> {
    let Some(activities) = load_filtered(data_dir, &filter)? else {
        return Ok(());
    };
    if activities.is_empty() {
        println!("{}", NO_MATCH_MESSAGE);
        return Ok(());
    }

    let t = totals(&activities);
    println!("{:<16} {:>12}", "Total distance", format!("{:.0} km", t.distance_km));
    println!("{:<16} {:>12}", "Moving time", format!("{:.1} h", t.moving_hours));
    println!("{:<16} {:>12}", "Activities", t.activity_count);
    if let Some(gain) = t.elevation_gain_m {
        println!("{:<16} {:>12}", "Elevation gain", format!("{:.0} m", gain));
    }
    println!("{:<16} {:>12}", "Active days", t.active_days);

    Ok(())
}

/// Distance, time and outing count per day
pub fn daily(filter: ActivityFilter, data_dir: Option<PathBuf>) -> Result<()> {
    let Some(activities) = load_filtered(data_dir, &filter)? else {
        return Ok(());
    };
    if activities.is_empty() {
        println!("{}", NO_MATCH_MESSAGE);
        return Ok(());
    }

    println!(
        "{:<12} {:>12} {:>10} {:>12}",
        "Date", "Distance", "Time", "Activities"
    );
    println!("{}", "-".repeat(49));
    for day in daily_summary(&activities) {
        println!(
            "{:<12} {:>12} {:>10} {:>12}",
            day.date.format("%Y-%m-%d"),
            format!("{:.2} km", day.distance_km),
            format!("{:.1} h", day.moving_hours),
            day.activity_count
        );
    }

    Ok(())
}

/// Distance, time and outing count per ISO week
pub fn weekly(filter: ActivityFilter, data_dir: Option<PathBuf>) -> Result<()> {
    let Some(activities) = load_filtered(data_dir, &filter)? else {
        return Ok(());
    };
    if activities.is_empty() {
        println!("{}", NO_MATCH_MESSAGE);
        return Ok(());
    }

    println!(
        "{:<10} {:>12} {:>10} {:>12}",
        "Week", "Distance", "Time", "Activities"
    );
    println!("{}", "-".repeat(47));
    for week in weekly_summary(&activities) {
        println!(
            "{:<10} {:>12} {:>10} {:>12}",
            week.label(),
            format!("{:.2} km", week.distance_km),
            format!("{:.1} h", week.moving_hours),
            week.activity_count
        );
    }

    Ok(())
}

/// Distance per gear, descending
pub fn gear(filter: ActivityFilter, data_dir: Option<PathBuf>) -> Result<()> {
    let Some(activities) = load_filtered(data_dir, &filter)? else {
        return Ok(());
    };
    if activities.is_empty() {
        println!("{}", NO_MATCH_MESSAGE);
        return Ok(());
    }

    let rows = gear_distance(&activities);
    if rows.is_empty() {
        println!("No gear recorded on any activity.");
        return Ok(());
    }

    println!("{:<14} {:>12}", "Gear", "Distance");
    println!("{}", "-".repeat(27));
    for row in rows {
        println!(
            "{:<14} {:>12}",
            row.gear_id,
            format!("{:.2} km", row.distance_km)
        );
    }

    Ok(())
}

/// Eddington number over per-day distances
pub fn eddington(filter: ActivityFilter, data_dir: Option<PathBuf>) -> Result<()> {
    let Some(activities) = load_filtered(data_dir, &filter)? else {
        return Ok(());
    };
    if activities.is_empty() {
        println!("{}", NO_MATCH_MESSAGE);
        return Ok(());
    }

    let days = daily_summary(&activities);
    let distances: Vec<f64> = days.iter().map(|d| d.distance_km).collect();
    let e = eddington_number(&distances);
    println!(
        "Eddington number: {} ({} distinct active days)",
        e,
        days.len()
    );

    Ok(())
}
