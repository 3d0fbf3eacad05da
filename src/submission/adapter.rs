//! Upload-then-persist orchestration for a confirmed submission

use super::record::SubmissionRecord;
use super::storage_path::storage_path;
use super::traits::StorageBackend;
use crate::config::WizardConfig;
use crate::error::SubmitError;
use crate::state::{Attachment, AttachmentSlot, BookingFlow, FormData};
use chrono::Utc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

pub struct SubmissionAdapter<B> {
    backend: B,
    upload_timeout: Duration,
    persist_timeout: Duration,
}

impl<B: StorageBackend> SubmissionAdapter<B> {
    pub fn new(backend: B, upload_timeout: Duration, persist_timeout: Duration) -> Self {
        Self {
            backend,
            upload_timeout,
            persist_timeout,
        }
    }

    pub fn from_config(backend: B, config: &WizardConfig) -> Self {
        Self::new(backend, config.upload_timeout(), config.persist_timeout())
    }

    /// Upload one attachment under a fresh, collision-free path and return that path
    pub async fn upload_attachment(
        &self,
        attachment: &Attachment,
        slot: AttachmentSlot,
    ) -> Result<String, SubmitError> {
        let path = storage_path(
            slot.prefix(),
            attachment.file_name(),
            Utc::now().timestamp_millis(),
            Uuid::new_v4(),
        );

        let upload = self.backend.upload_object(
            &path,
            attachment.bytes().to_vec(),
            attachment.content_type(),
        );
        match tokio::time::timeout(self.upload_timeout, upload).await {
            Ok(Ok(())) => {
                tracing::info!(slot = slot.prefix(), %path, "document uploaded");
                Ok(path)
            }
            Ok(Err(source)) => Err(SubmitError::Upload {
                slot: slot.prefix(),
                source,
            }),
            Err(_) => Err(SubmitError::TimedOut {
                stage: format!("upload of {}", slot.prefix()),
                timeout: self.upload_timeout,
            }),
        }
    }

    async fn upload_slot(
        &self,
        booking: Option<&BookingFlow>,
        slot: AttachmentSlot,
    ) -> Result<Option<String>, SubmitError> {
        match booking.and_then(|b| b.attachment(slot)) {
            Some(attachment) => self.upload_attachment(attachment, slot).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn persist(&self, record: &SubmissionRecord) -> Result<(), SubmitError> {
        match tokio::time::timeout(self.persist_timeout, self.backend.insert_submission(record))
            .await
        {
            Ok(result) => result.map_err(SubmitError::Persist),
            Err(_) => Err(SubmitError::TimedOut {
                stage: "persist".to_string(),
                timeout: self.persist_timeout,
            }),
        }
    }

    /// Upload the live attachments concurrently, then persist the assembled record.
    ///
    /// The first failing upload drops the other one and nothing is persisted.
    /// Objects already uploaded are left in place.
    pub async fn submit(
        &self,
        data: &FormData,
        cancel: &CancellationToken,
    ) -> Result<SubmissionRecord, SubmitError> {
        let work = async {
            let booking = data.booking_flow();
            let (services_list, guidelines) = futures::try_join!(
                self.upload_slot(booking, AttachmentSlot::ServicesList),
                self.upload_slot(booking, AttachmentSlot::Guidelines),
            )?;

            let record = SubmissionRecord::assemble(data, services_list, guidelines);
            self.persist(&record).await?;
            Ok::<_, SubmitError>(record)
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(SubmitError::Cancelled),
            result = work => result,
        }
    }
}
