//! Error types for the onboarding wizard.

use std::time::Duration;

use crate::state::SectionKey;

/// Copy shown to the user whenever a submission attempt fails, whatever the cause.
pub const SUBMISSION_RETRY_MESSAGE: &str = "Non è stato possibile inviare i dati o caricare i documenti. Riprova oppure contatta info@ciaodott.com.";

/// A section failed its transition-time checks.
///
/// One variant per rule; the display text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Compila tutti i campi obbligatori")]
    MissingCenterInfo { fields: Vec<&'static str> },

    #[error("Seleziona almeno un'informazione da chiedere al paziente")]
    MissingPatientInfo,

    #[error("Seleziona un tipo di saluto per l'assistente")]
    MissingGreetingType,

    #[error("Inserisci un saluto personalizzato")]
    MissingCustomGreeting,

    #[error("Specifica le situazioni da NON gestire mai")]
    MissingDontHandle,

    #[error("Compila tutti i campi obbligatori della sezione telefonia")]
    MissingPhoneIntegration { fields: Vec<&'static str> },

    #[error("Il numero alternativo non può essere uguale al numero principale")]
    ForwardingLoop,

    #[error("Inserisci almeno un indirizzo email per le notifiche")]
    MissingNotificationEmails,
}

/// A wizard event was refused. State is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Completa le sezioni precedenti prima di procedere")]
    SectionLocked { target: usize, max_completed: usize },

    #[error("La sezione {0} non esiste")]
    UnknownSection(usize),

    #[error("Conferma le informazioni prima di procedere")]
    ConfirmationRequired,

    #[error("Dati non validi: attesa sezione {expected}, ricevuta {found}")]
    SliceMismatch {
        expected: SectionKey,
        found: SectionKey,
    },

    #[error("La raccolta informazioni è già stata inviata")]
    AlreadySubmitted,

    #[error("Invio in corso, attendere")]
    SubmissionInProgress,
}

/// A file picked for an upload slot was not accepted.
#[derive(Debug, thiserror::Error)]
pub enum AttachmentRejection {
    #[error("Il file {file_name} non deve superare {max_mb}MB")]
    TooLarge {
        file_name: String,
        size: u64,
        max_mb: u64,
    },

    #[error("Formato di {file_name} non supportato (accettati: {accepted})")]
    UnsupportedType { file_name: String, accepted: String },

    #[error("Impossibile leggere il file {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the remote store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("store is not configured: {0}")]
    NotConfigured(&'static str),
}

/// Errors raised while uploading attachments or persisting the submission record.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("upload of {slot} failed: {source}")]
    Upload {
        slot: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("persisting the submission failed: {0}")]
    Persist(#[source] StoreError),

    #[error("{stage} timed out after {timeout:?}")]
    TimedOut { stage: String, timeout: Duration },

    #[error("submission cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_transparent_in_wizard_error() {
        let err: WizardError = ValidationError::ForwardingLoop.into();
        assert_eq!(
            err.to_string(),
            "Il numero alternativo non può essere uguale al numero principale"
        );
    }

    #[test]
    fn test_section_locked_message() {
        let err = WizardError::SectionLocked {
            target: 4,
            max_completed: 2,
        };
        assert_eq!(
            err.to_string(),
            "Completa le sezioni precedenti prima di procedere"
        );
    }

    #[test]
    fn test_submit_error_keeps_store_source() {
        let err = SubmitError::Upload {
            slot: "guidelines",
            source: StoreError::Status {
                status: 413,
                body: "too large".to_string(),
            },
        };
        assert!(err.to_string().contains("guidelines"));
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("store returned 413: too large"));
    }
}
