//! Submission to the remote store

mod adapter;
mod client;
mod record;
mod storage_path;
mod traits;

pub use adapter::SubmissionAdapter;
pub use client::StoreClient;
pub use traits::StorageBackend;

#[cfg(test)]
pub use record::SubmissionRecord;
#[cfg(test)]
pub use traits::MockStorageBackend;
