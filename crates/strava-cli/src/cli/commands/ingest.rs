//! Ingest command: fetch, normalize, persist

use std::path::PathBuf;

use tracing::info;

use crate::client::{StravaClient, TimeWindow};
use crate::config::{self, StravaCredentials};
use crate::error::Result;
use crate::metrics::normalize;
use crate::storage::ActivityStore;

/// Fetch activities in the window and replace the local dataset
pub async fn run(
    after: Option<String>,
    before: Option<String>,
    data_dir: Option<PathBuf>,
) -> Result<()> {
    let credentials = StravaCredentials::from_env()?;
    let window = TimeWindow::from_bounds(after.as_deref(), before.as_deref())?;

    let client = StravaClient::new();
    let token = client.refresh_access_token(&credentials).await?;
    let records = client.list_activities(&token, &window).await?;
    info!(count = records.len(), "fetched activities");

    if records.is_empty() {
        println!("No activities returned.");
        return Ok(());
    }

    let activities = normalize(&records)?;
    let store = ActivityStore::open(config::resolve_data_dir(data_dir))?;
    store.save(&activities)?;

    println!(
        "Saved {} activities to {}",
        activities.len(),
        store.activities_path().display()
    );

    Ok(())
}
