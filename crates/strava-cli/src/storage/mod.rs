//! Storage layer for the activity dataset
//!
//! One Parquet file holds the whole normalized dataset; each ingest run
//! rewrites it wholesale. Readers fall back to a bundled sample when no
//! ingested data exists yet.
//!
//! ## Storage Layout
//!
//! ```text
//! data/
//! ├── activities.parquet          # Ingested dataset (overwritten per run)
//! ├── sample_activities.parquet   # Optional sample, same schema
//! └── sample_activities.csv       # Bundled sample, raw rows
//! ```
//!
//! ## Concurrent Access
//!
//! The Parquet file is written atomically (temp file + rename), so readers
//! always see a consistent dataset. Ingest runs are serialized by the
//! caller; this layer assumes a single writer.

mod parquet;
mod sample;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, StravaError};
use crate::metrics::normalize;
use crate::models::NormalizedActivity;

/// Ingested dataset file name
pub const ACTIVITIES_FILE: &str = "activities.parquet";
/// Sample dataset in the columnar format
pub const SAMPLE_PARQUET_FILE: &str = "sample_activities.parquet";
/// Sample dataset in the row-oriented text format
pub const SAMPLE_CSV_FILE: &str = "sample_activities.csv";

/// Parquet-backed store for the normalized activity dataset
pub struct ActivityStore {
    base_dir: PathBuf,
}

impl ActivityStore {
    /// Open a store rooted at the given directory, creating it if needed
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(|e| {
            StravaError::storage(format!(
                "Failed to create data directory {:?}: {}",
                base_dir, e
            ))
        })?;
        Ok(Self { base_dir })
    }

    /// Path of the ingested dataset file
    pub fn activities_path(&self) -> PathBuf {
        self.base_dir.join(ACTIVITIES_FILE)
    }

    /// Replace the dataset wholesale with the given activities
    pub fn save(&self, activities: &[NormalizedActivity]) -> Result<()> {
        let path = self.activities_path();
        parquet::write_activities(&path, activities)?;
        info!(path = %path.display(), rows = activities.len(), "wrote activity dataset");
        Ok(())
    }

    /// Load the dataset, falling back through the sample sources.
    ///
    /// Order: ingested Parquet, sample Parquet, sample CSV (raw rows,
    /// normalized on load), else an empty dataset. Never an error just
    /// because nothing has been ingested yet.
    pub fn load(&self) -> Result<Vec<NormalizedActivity>> {
        let primary = self.activities_path();
        if primary.exists() {
            debug!(path = %primary.display(), "loading ingested dataset");
            return parquet::read_activities(&primary);
        }

        let sample_parquet = self.base_dir.join(SAMPLE_PARQUET_FILE);
        if sample_parquet.exists() {
            debug!(path = %sample_parquet.display(), "loading sample dataset");
            return parquet::read_activities(&sample_parquet);
        }

        let sample_csv = self.base_dir.join(SAMPLE_CSV_FILE);
        if sample_csv.exists() {
            debug!(path = %sample_csv.display(), "loading sample dataset");
            let records = sample::read_records(&sample_csv)?;
            return normalize(&records);
        }

        Ok(Vec::new())
    }

    /// Get the base path for external readers
    pub fn base_path(&self) -> &Path {
        &self.base_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityRecord;
    use tempfile::TempDir;

    fn sample_records() -> Vec<ActivityRecord> {
        vec![
            ActivityRecord {
                id: Some(101),
                name: Some("Morning Ride".to_string()),
                sport_type: Some("Ride".to_string()),
                start_date_local: Some("2025-01-05T08:15:00".to_string()),
                distance: Some(42500.0),
                moving_time: Some(6120.0),
                total_elevation_gain: Some(380.0),
                gear_id: Some("b1001".to_string()),
                ..Default::default()
            },
            ActivityRecord {
                id: Some(102),
                name: Some("Gym Session".to_string()),
                sport_type: Some("Workout".to_string()),
                start_date_local: Some("2025-01-06T18:00:00".to_string()),
                moving_time: Some(3600.0),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = ActivityStore::open(temp.path()).unwrap();

        let activities = normalize(&sample_records()).unwrap();
        store.save(&activities).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, activities);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let temp = TempDir::new().unwrap();
        let store = ActivityStore::open(temp.path()).unwrap();

        let activities = normalize(&sample_records()).unwrap();
        store.save(&activities).unwrap();
        store.save(&activities[..1]).unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_dataset_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = ActivityStore::open(temp.path()).unwrap();

        store.save(&[]).unwrap();
        assert!(store.activities_path().exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_without_any_source_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = ActivityStore::open(temp.path()).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_falls_back_to_sample_csv() {
        let temp = TempDir::new().unwrap();
        let store = ActivityStore::open(temp.path()).unwrap();

        let csv = "id,name,sport_type,start_date_local,distance,moving_time,total_elevation_gain,gear_id\n\
                   1,Morning Ride,Ride,2025-01-05T08:15:00,42500,6120,380,b1001\n\
                   2,Gym Session,Workout,2025-01-06T18:00:00,,3600,,\n";
        fs::write(temp.path().join(SAMPLE_CSV_FILE), csv).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].distance_km, Some(42.5));
        assert_eq!(loaded[1].distance_km, None);
        assert_eq!(loaded[1].sport_type, "Workout");
    }

    #[test]
    fn test_ingested_dataset_wins_over_sample() {
        let temp = TempDir::new().unwrap();
        let store = ActivityStore::open(temp.path()).unwrap();

        let csv = "id,name,sport_type,start_date_local,distance,moving_time,total_elevation_gain,gear_id\n\
                   1,Sample Row,Ride,2025-01-05T08:15:00,1000,600,,\n";
        fs::write(temp.path().join(SAMPLE_CSV_FILE), csv).unwrap();

        let activities = normalize(&sample_records()).unwrap();
        store.save(&activities).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].record.name.as_deref(), Some("Morning Ride"));
    }
}
