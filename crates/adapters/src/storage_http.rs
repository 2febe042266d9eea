//! HTTP adapter for the collaborator's blob storage bucket

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use zerohunger_domain::{BlobError, BlobStore};

/// Objects larger than this are rejected before any bytes go on the wire.
const MAX_OBJECT_BYTES: usize = 5 * 1024 * 1024;

/// Blob store speaking the collaborator's `/storage/v1` endpoints.
pub struct HttpBlobStore {
    client: Client,
    base_url: String,
    api_key: SecretString,
    bucket: String,
}

impl HttpBlobStore {
    pub fn new(base_url: String, api_key: SecretString, bucket: String) -> Self {
        Self::with_timeout(base_url, api_key, bucket, Duration::from_secs(60))
    }

    pub fn with_timeout(
        base_url: String,
        api_key: SecretString,
        bucket: String,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            bucket,
        }
    }
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BlobError> {
        if bytes.len() > MAX_OBJECT_BYTES {
            return Err(BlobError::TooLarge {
                size: bytes.len(),
                max: MAX_OBJECT_BYTES,
            });
        }

        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, path
        );
        let size = bytes.len();

        let response = self
            .client
            .post(&url)
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
            .header("Content-Type", content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| BlobError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BlobError::Api(format!("API returned {}: {}", status, body)));
        }

        tracing::info!(path = %path, size, "Uploaded object");
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }
}
