use super::ProgressStore;
use crate::configuration::StoreSettings;
use crate::connectors::errors::StoreError;
use crate::models::{NewTrack, Track};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use std::time::Duration;
use tracing::Instrument;

/// PostgREST client for the Supabase tracks table
pub struct SupabaseClient {
    base_url: String,
    table: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl SupabaseClient {
    pub fn new(settings: &StoreSettings) -> Result<Self, StoreError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|err| StoreError::Http(format!("Failed to create HTTP client: {}", err)))?;

        Ok(Self {
            base_url: settings.url.trim_end_matches('/').to_string(),
            table: settings.table.trim_matches('/').to_string(),
            api_key: settings.key.clone(),
            http_client,
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.base_url)
            .field("table", &self.table)
            .finish()
    }
}

#[async_trait]
impl ProgressStore for SupabaseClient {
    async fn insert_track(&self, track: &NewTrack) -> Result<Track, StoreError> {
        let span = tracing::info_span!(
            "supabase_insert_track",
            table = %self.table,
            user_id = %track.user_id
        );

        let response = self
            .http_client
            .post(self.table_url())
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header("Prefer", "return=representation")
            .json(track)
            .send()
            .instrument(span)
            .await
            .map_err(|err| {
                tracing::error!("Failed to reach the store: {:?}", err);
                StoreError::from(err)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(StoreError::from)?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), body = %text, "Store rejected the insert");
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        // PostgREST answers with the list of inserted rows
        let rows: Vec<Track> = serde_json::from_str(&text).map_err(|err| {
            tracing::error!("Failed to parse store response: {:?}", err);
            StoreError::InvalidResponse(text.clone())
        })?;

        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::InvalidResponse("store returned no rows".to_string()))
    }
}
