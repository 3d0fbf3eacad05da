//! HTTP client for the storage/database service
//!
//! Documents go to the object storage endpoint, submission records to the
//! REST table endpoint. Both authenticate with the project's public API key.

use super::record::SubmissionRecord;
use super::traits::StorageBackend;
use crate::config::WizardConfig;
use crate::error::StoreError;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client, Response};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Client for the remote store
pub struct StoreClient {
    http: Client,
    base_url: Option<String>,
    api_key: String,
    bucket: String,
    table: String,
}

impl StoreClient {
    pub fn new(config: &WizardConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config
                .store_url
                .as_deref()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            api_key: config.api_key.clone().unwrap_or_default(),
            bucket: config.bucket().to_string(),
            table: config.table().to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    fn base_url(&self) -> Result<&str, StoreError> {
        self.base_url
            .as_deref()
            .ok_or(StoreError::NotConfigured("store_url"))
    }

    fn object_url(&self, path: &str) -> Result<String, StoreError> {
        Ok(format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url()?,
            self.bucket,
            path
        ))
    }

    fn table_url(&self) -> Result<String, StoreError> {
        Ok(format!("{}/rest/v1/{}", self.base_url()?, self.table))
    }

    /// Turn a non-2xx response into a status error carrying the body
    async fn check(response: Response) -> Result<(), StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl StorageBackend for StoreClient {
    async fn upload_object(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError> {
        let url = self.object_url(path)?;
        let content_type = if content_type.is_empty() {
            FALLBACK_CONTENT_TYPE
        } else {
            content_type
        };

        tracing::debug!(path, size = bytes.len(), "uploading document");
        let response = self
            .http
            .post(url)
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CACHE_CONTROL, "3600")
            .header("x-upsert", "false")
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;
        Self::check(response).await
    }

    async fn insert_submission(&self, record: &SubmissionRecord) -> Result<(), StoreError> {
        let url = self.table_url()?;

        tracing::debug!(table = %self.table, "inserting submission");
        let response = self
            .http
            .post(url)
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;
        Self::check(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> StoreClient {
        StoreClient::new(&WizardConfig {
            store_url: Some("https://project.example.co/".to_string()),
            api_key: Some("anon".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_object_url() {
        let client = configured();
        assert_eq!(
            client
                .object_url("submissions/guidelines/1-x-doc.pdf")
                .unwrap(),
            "https://project.example.co/storage/v1/object/onboarding-documents/submissions/guidelines/1-x-doc.pdf"
        );
    }

    #[test]
    fn test_table_url() {
        let client = configured();
        assert_eq!(
            client.table_url().unwrap(),
            "https://project.example.co/rest/v1/onboarding_submissions"
        );
    }

    #[test]
    fn test_unconfigured_client() {
        let client = StoreClient::new(&WizardConfig::default());
        assert!(!client.is_configured());
        assert!(matches!(
            client.table_url(),
            Err(StoreError::NotConfigured("store_url"))
        ));
    }

    #[tokio::test]
    async fn test_unconfigured_insert_fails_without_network() {
        let client = StoreClient::new(&WizardConfig::default());
        let result = client
            .insert_submission(&SubmissionRecord::default())
            .await;
        assert!(matches!(result, Err(StoreError::NotConfigured(_))));
    }
}
