//! Trait abstraction for the remote store to enable mocking in tests

use super::record::SubmissionRecord;
use crate::error::StoreError;
use async_trait::async_trait;

/// Operations the submission adapter needs from the remote store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Store a document under `path` in the configured bucket. Existing objects are never overwritten.
    async fn upload_object(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError>;

    /// Insert one row into the submissions table
    async fn insert_submission(&self, record: &SubmissionRecord) -> Result<(), StoreError>;
}
