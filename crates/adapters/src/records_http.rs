//! HTTP adapter for the collaborator's record collections
//!
//! The wire surface is REST-over-collections: select by equality filter,
//! upsert by identifier via the `Prefer` header. No transactions, no joins.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;
use zerohunger_domain::{DonationRecord, Profile, RecordError, RecordStore, Subscription};

/// Record store speaking the collaborator's `/rest/v1` endpoints.
pub struct HttpRecordStore {
    client: Client,
    base_url: String,
    api_key: SecretString,
    /// User token attached as the bearer when present; the service key
    /// authenticates otherwise.
    access_token: Option<String>,
}

impl HttpRecordStore {
    pub fn new(base_url: String, api_key: SecretString) -> Self {
        Self::with_timeout(base_url, api_key, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: String, api_key: SecretString, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            access_token: None,
        }
    }

    /// Act on behalf of a signed-in user.
    pub fn with_access_token(mut self, access_token: String) -> Self {
        self.access_token = Some(access_token);
        self
    }

    fn collection(&self, name: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, name)
    }

    fn bearer(&self) -> &str {
        self.access_token
            .as_deref()
            .unwrap_or_else(|| self.api_key.expose_secret())
    }

    /// Select records by a single equality filter.
    async fn select_eq<T: DeserializeOwned>(
        &self,
        collection: &str,
        column: &str,
        value: Uuid,
    ) -> Result<Vec<T>, RecordError> {
        let response = self
            .client
            .get(self.collection(collection))
            .query(&[(column, format!("eq.{}", value)), ("select", "*".to_string())])
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.bearer())
            .send()
            .await
            .map_err(|e| RecordError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RecordError::Api(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| RecordError::Serialization(e.to_string()))
    }

    /// Insert rows, optionally merging on conflict (upsert-by-identifier).
    async fn insert<T: Serialize, U: DeserializeOwned>(
        &self,
        collection: &str,
        rows: &[T],
        merge_duplicates: bool,
    ) -> Result<Vec<U>, RecordError> {
        let prefer = if merge_duplicates {
            "resolution=merge-duplicates,return=representation"
        } else {
            "return=representation"
        };

        let response = self
            .client
            .post(self.collection(collection))
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.bearer())
            .header("Prefer", prefer)
            .json(rows)
            .send()
            .await
            .map_err(|e| RecordError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RecordError::Api(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| RecordError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn upsert_profile(&self, profile: &Profile) -> Result<Profile, RecordError> {
        let mut stored: Vec<Profile> = self
            .insert("profiles", std::slice::from_ref(profile), true)
            .await?;

        stored
            .pop()
            .ok_or_else(|| RecordError::Api("Upsert returned no representation".to_string()))
    }

    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<Profile>, RecordError> {
        let mut rows: Vec<Profile> = self.select_eq("profiles", "id", user_id).await?;
        Ok(rows.drain(..).next())
    }

    async fn fetch_subscription(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Subscription>, RecordError> {
        let mut rows: Vec<Subscription> =
            self.select_eq("subscriptions", "user_id", user_id).await?;
        Ok(rows.drain(..).next())
    }

    async fn insert_donation(&self, donation: &DonationRecord) -> Result<(), RecordError> {
        let _: Vec<serde_json::Value> = self
            .insert("donations", std::slice::from_ref(donation), false)
            .await?;

        tracing::info!(donation_id = %donation.id, "Stored donation record");
        Ok(())
    }
}
