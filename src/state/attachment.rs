//! File attachments held by the booking-flow upload slots

use crate::error::AttachmentRejection;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Largest accepted attachment, in bytes (10 MiB)
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

const MAX_ATTACHMENT_MB: u64 = MAX_ATTACHMENT_BYTES / (1024 * 1024);

/// Named upload target; each slot holds at most one pending file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentSlot {
    ServicesList,
    Guidelines,
}

impl AttachmentSlot {
    /// Path segment used under `submissions/` in the store
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::ServicesList => "services-list",
            Self::Guidelines => "guidelines",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ServicesList => "Upload lista prestazioni del centro",
            Self::Guidelines => "Upload linee guida per la segreteria",
        }
    }

    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self {
            Self::ServicesList => &["pdf", "doc", "docx", "xls", "xlsx"],
            Self::Guidelines => &["pdf", "doc", "docx"],
        }
    }

    /// Hint shown under an empty slot, e.g. `PDF, DOC, DOCX (max 10MB)`
    pub fn accept_hint(&self) -> String {
        let extensions: Vec<String> = self
            .accepted_extensions()
            .iter()
            .map(|e| e.to_uppercase())
            .collect();
        format!("{} (max {}MB)", extensions.join(", "), MAX_ATTACHMENT_MB)
    }

    /// Check a candidate file by name and size before it is read or stored
    pub fn check_candidate(&self, file_name: &str, size: u64) -> Result<(), AttachmentRejection> {
        if size > MAX_ATTACHMENT_BYTES {
            return Err(AttachmentRejection::TooLarge {
                file_name: file_name.to_string(),
                size,
                max_mb: MAX_ATTACHMENT_MB,
            });
        }

        let accepted = extension_of(file_name)
            .map(|ext| {
                self.accepted_extensions()
                    .iter()
                    .any(|a| a.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false);
        if !accepted {
            return Err(AttachmentRejection::UnsupportedType {
                file_name: file_name.to_string(),
                accepted: self
                    .accepted_extensions()
                    .iter()
                    .map(|e| format!(".{e}"))
                    .collect::<Vec<_>>()
                    .join(","),
            });
        }

        Ok(())
    }

    pub fn check(&self, attachment: &Attachment) -> Result<(), AttachmentRejection> {
        self.check_candidate(&attachment.file_name, attachment.size())
    }
}

/// A named binary blob waiting to be uploaded
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    file_name: String,
    content_type: String,
    bytes: Arc<[u8]>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk for the given slot.
    ///
    /// Size and extension are checked from metadata first so an oversized
    /// file is never read into memory.
    pub fn load(path: &Path, slot: AttachmentSlot) -> Result<Self, AttachmentRejection> {
        let display = path.display().to_string();
        let unreadable = |source| AttachmentRejection::Unreadable {
            path: display.clone(),
            source,
        };

        let metadata = fs::metadata(path).map_err(unreadable)?;
        if !metadata.is_file() {
            return Err(unreadable(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| display.clone());
        slot.check_candidate(&file_name, metadata.len())?;

        let bytes = fs::read(path).map_err(unreadable)?;
        Ok(Self::new(file_name, bytes))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Size formatted the way the upload slot shows it, e.g. `12.5 KB`
    pub fn display_size(&self) -> String {
        format!("{:.1} KB", self.size() as f64 / 1024.0)
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.size())
            .finish()
    }
}

/// Text after the last dot of a file name, if any
pub fn extension_of(file_name: &str) -> Option<&str> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

fn content_type_for(file_name: &str) -> &'static str {
    match extension_of(file_name)
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("xls") => "application/vnd.ms-excel",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        _ => "application/octet-stream",
    }
}
