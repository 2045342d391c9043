//! End-to-end pipeline: fetch → normalize → persist → load → aggregate

use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use strava_cli::client::{AccessToken, StravaClient, TimeWindow};
use strava_cli::metrics::{
    daily_summary, eddington_number, gear_distance, normalize, weekly_summary,
};
use strava_cli::storage::ActivityStore;

fn test_token() -> AccessToken {
    AccessToken {
        token_type: "Bearer".to_string(),
        access_token: "test-access-token".to_string(),
        refresh_token: "test-refresh-token".to_string(),
        expires_at: chrono::Utc::now().timestamp() + 3600,
        expires_in: 21600,
    }
}

fn listing() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "Boundary Ride",
            "sport_type": "Ride",
            "start_date_local": "2024-12-30T08:00:00",
            "distance": 30000.0,
            "moving_time": 4500.0,
            "total_elevation_gain": 250.0,
            "gear_id": "b1001"
        }),
        json!({
            "id": 2,
            "name": "New Year Run",
            "sport_type": "Run",
            "start_date_local": "2025-01-01T09:30:00",
            "distance": 10000.0,
            "moving_time": 3600.0,
            "gear_id": "g2001"
        }),
        json!({
            "id": 3,
            "name": "Second Run",
            "sport_type": "Run",
            "start_date_local": "2025-01-01T18:00:00",
            "distance": 5000.0,
            "moving_time": 1800.0,
            "gear_id": "g2001"
        }),
    ]
}

#[tokio::test]
async fn test_fetch_persist_and_aggregate() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing()))
        .mount(&mock_server)
        .await;

    let client = StravaClient::with_base_url(&mock_server.uri());
    let records = client
        .list_activities(&test_token(), &TimeWindow::default())
        .await
        .expect("Failed to fetch activities");
    assert_eq!(records.len(), 3);

    let activities = normalize(&records).expect("Failed to normalize batch");

    let temp = TempDir::new().unwrap();
    let store = ActivityStore::open(temp.path()).unwrap();
    store.save(&activities).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, activities);

    // Both December 30 and January 1 land in ISO week 1 of 2025.
    let weeks = weekly_summary(&loaded);
    assert_eq!(weeks.len(), 1);
    assert_eq!((weeks[0].year, weeks[0].week), (2025, 1));
    assert_eq!(weeks[0].activity_count, 3);
    assert_eq!(weeks[0].distance_km, 45.0);

    let days = daily_summary(&loaded);
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].distance_km, 30.0);
    assert_eq!(days[1].distance_km, 15.0);

    let gear = gear_distance(&loaded);
    let ids: Vec<&str> = gear.iter().map(|g| g.gear_id.as_str()).collect();
    assert_eq!(ids, vec!["b1001", "g2001"]);

    // Day distances [30, 15]: two days with at least 2 km each.
    let distances: Vec<f64> = days.iter().map(|d| d.distance_km).collect();
    assert_eq!(eddington_number(&distances), 2);
}
