mod credentials;

pub use credentials::StravaCredentials;

use std::path::PathBuf;

/// Default data directory relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// Resolve the data directory: explicit flag (or `STRAVA_DATA_DIR`, wired
/// through the flag's env fallback), else [`DEFAULT_DATA_DIR`].
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}
