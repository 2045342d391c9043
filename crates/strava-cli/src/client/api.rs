//! Strava API client for authenticated requests
//!
//! Exchanges the long-lived refresh token for a bearer token, then pages
//! through the athlete's activity list. Fetch failures surface as ingest
//! errors; the metrics layer never sees the network.

use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::client::{AccessToken, TimeWindow};
use crate::config::StravaCredentials;
use crate::error::{Result, StravaError};
use crate::models::ActivityRecord;

/// User agent for API requests
const API_USER_AGENT: &str = "strava-cli/0.1";

/// Strava API client
pub struct StravaClient {
    client: Client,
    base_url: String,
}

impl StravaClient {
    /// Page size for the activity list endpoint (the API maximum)
    pub const PER_PAGE: usize = 200;

    /// Create a new API client against the production host
    pub fn new() -> Self {
        Self::with_base_url("https://www.strava.com")
    }

    /// Create a new API client with a custom base URL (for testing)
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the full URL for a given path
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange the refresh token for a short-lived access token
    pub async fn refresh_access_token(
        &self,
        credentials: &StravaCredentials,
    ) -> Result<AccessToken> {
        let params = [
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
        ];

        let response = self
            .client
            .post(self.build_url("/oauth/token"))
            .header(USER_AGENT, API_USER_AGENT)
            .form(&params)
            .send()
            .await
            .map_err(StravaError::Http)?;

        let response = self.handle_response_status(response).await?;
        response.json().await.map_err(|e| {
            StravaError::ingest(format!("Failed to parse token response: {}", e))
        })
    }

    /// Fetch every activity in the window, paging until a short page.
    ///
    /// An empty result is not an error; the caller decides what an empty
    /// ingest run means.
    pub async fn list_activities(
        &self,
        token: &AccessToken,
        window: &TimeWindow,
    ) -> Result<Vec<ActivityRecord>> {
        let mut activities = Vec::new();
        let mut page = 1u32;

        loop {
            let mut query: Vec<(&str, String)> = vec![
                ("per_page", Self::PER_PAGE.to_string()),
                ("page", page.to_string()),
            ];
            if let Some(after) = window.after {
                query.push(("after", after.to_string()));
            }
            if let Some(before) = window.before {
                query.push(("before", before.to_string()));
            }

            let response = self
                .client
                .get(self.build_url("/api/v3/athlete/activities"))
                .header(USER_AGENT, API_USER_AGENT)
                .header(AUTHORIZATION, token.authorization_header())
                .query(&query)
                .send()
                .await
                .map_err(StravaError::Http)?;

            let response = self.handle_response_status(response).await?;
            let batch: Vec<ActivityRecord> = response.json().await.map_err(|e| {
                StravaError::ingest(format!("Failed to parse activity page {}: {}", page, e))
            })?;

            debug!(page, count = batch.len(), "fetched activity page");
            let fetched = batch.len();
            activities.extend(batch);

            if fetched < Self::PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(activities)
    }

    /// Handle response status codes and convert to errors
    async fn handle_response_status(&self, response: Response) -> Result<Response> {
        let status = response.status();

        match status {
            _ if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => Err(StravaError::NotAuthenticated),
            StatusCode::TOO_MANY_REQUESTS => Err(StravaError::RateLimited),
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(StravaError::ingest(format!(
                    "API error {}: {}",
                    status, body
                )))
            }
        }
    }
}

impl Default for StravaClient {
    fn default() -> Self {
        Self::new()
    }
}
