pub mod activities;
pub mod ingest;
pub mod stats;

pub use activities::list as list_activities;
pub use ingest::run as ingest;
pub use stats::{daily, eddington, gear, summary, weekly};

use std::path::PathBuf;

use crate::config;
use crate::error::Result;
use crate::metrics::ActivityFilter;
use crate::models::NormalizedActivity;
use crate::storage::ActivityStore;

/// Shown when the fallback chain found no dataset at all
pub(crate) const NO_DATA_MESSAGE: &str =
    "No activity data found. Run 'strava ingest' or place a sample dataset in the data directory.";

/// Load the dataset and apply the user's filters.
///
/// Returns `None` (after printing the no-data notice) when no data source
/// exists; an empty dataset is a defined state, not an error.
pub(crate) fn load_filtered(
    data_dir: Option<PathBuf>,
    filter: &ActivityFilter,
) -> Result<Option<Vec<NormalizedActivity>>> {
    let store = ActivityStore::open(config::resolve_data_dir(data_dir))?;
    let activities = store.load()?;

    if activities.is_empty() {
        println!("{}", NO_DATA_MESSAGE);
        return Ok(None);
    }

    Ok(Some(filter.apply(&activities)))
}

/// Truncate a string for fixed-width table columns
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Ride", 10), "Ride");
        assert_eq!(truncate("VirtualRide", 8), "Virtual…");
    }
}
