//! Wizard controller
//!
//! Owns the wizard, applies transitions, runs their effects and records the
//! notices the UI should show.

use super::transition::{transition, Effect, Wizard, WizardEvent};
use crate::error::WizardError;
use crate::state::{FormData, SectionKey, SectionRecord, WizardState};
use crate::submission::{StorageBackend, SubmissionAdapter};
use chrono::Utc;
use std::collections::VecDeque;
use tokio_util::sync::CancellationToken;

pub const SAVED_NOTICE: &str = "Progresso salvato automaticamente";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// A message for the user, drained by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// What a call to [`WizardController::submit`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Failed,
    /// A submission was already in flight or done; nothing happened
    Ignored,
}

pub struct WizardController<B> {
    wizard: Wizard,
    adapter: SubmissionAdapter<B>,
    notices: VecDeque<Notice>,
    scroll_to_top: bool,
    cancel: CancellationToken,
}

impl<B: StorageBackend> WizardController<B> {
    pub fn new(adapter: SubmissionAdapter<B>) -> Self {
        Self {
            wizard: Wizard::default(),
            adapter,
            notices: VecDeque::new(),
            scroll_to_top: false,
            cancel: CancellationToken::new(),
        }
    }

    #[cfg(test)]
    pub fn with_wizard(adapter: SubmissionAdapter<B>, wizard: Wizard) -> Self {
        Self {
            wizard,
            ..Self::new(adapter)
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.wizard.state
    }

    pub fn form_data(&self) -> &FormData {
        &self.wizard.data
    }

    /// The slice for `key`, or an empty record when the section is untouched
    pub fn slice_or_empty(&self, key: SectionKey) -> SectionRecord {
        self.wizard.data.slice_or_empty(key)
    }

    pub fn update_slice(&mut self, key: SectionKey, slice: SectionRecord) -> Result<(), WizardError> {
        tracing::debug!(%key, "updating slice");
        self.dispatch(WizardEvent::UpdateSlice {
            key,
            slice,
            at: Utc::now(),
        })
        .map(|_| ())
    }

    pub fn go_next(&mut self) -> Result<(), WizardError> {
        self.dispatch(WizardEvent::Next { at: Utc::now() })
            .map(|_| ())
    }

    pub fn go_back(&mut self) -> Result<(), WizardError> {
        self.dispatch(WizardEvent::Back).map(|_| ())
    }

    pub fn jump_to(&mut self, target: usize) -> Result<(), WizardError> {
        self.dispatch(WizardEvent::JumpTo {
            target,
            at: Utc::now(),
        })
        .map(|_| ())
    }

    pub fn set_final_confirmation(&mut self, flag: bool) -> Result<(), WizardError> {
        self.dispatch(WizardEvent::SetConfirmation(flag))
            .map(|_| ())
    }

    /// Start over with an empty wizard
    pub fn reset(&mut self) -> Result<(), WizardError> {
        self.dispatch(WizardEvent::Reset)?;
        tracing::info!("wizard reset");
        Ok(())
    }

    /// Submit the collected data.
    ///
    /// Does nothing while a submission is in flight or after success. Store
    /// failures never surface as errors here: they are logged and turned into
    /// the retry message on the wizard state.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, WizardError> {
        let effects = self.dispatch(WizardEvent::SubmitRequested)?;
        if !effects.contains(&Effect::StartSubmission) {
            tracing::debug!("submission already handled, ignoring request");
            return Ok(SubmitOutcome::Ignored);
        }

        tracing::info!("submitting onboarding data");
        let result = self
            .adapter
            .submit(&self.wizard.data, &self.cancel)
            .await;

        match result {
            Ok(_) => {
                self.dispatch(WizardEvent::SubmitSucceeded)?;
                tracing::info!("onboarding submitted");
                Ok(SubmitOutcome::Submitted)
            }
            Err(err) => {
                tracing::error!(error = %err, "submission failed");
                self.dispatch(WizardEvent::SubmitFailed)?;
                if let Some(message) = self.wizard.state.submission_error.clone() {
                    self.notices.push_back(Notice::error(message));
                }
                Ok(SubmitOutcome::Failed)
            }
        }
    }

    /// Token observed by in-flight submissions; cancel it to abort them
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    /// True once after a transition asked for the view to scroll to the top
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }

    fn dispatch(&mut self, event: WizardEvent) -> Result<Vec<Effect>, WizardError> {
        match transition(&self.wizard, event) {
            Ok(next) => {
                for effect in &next.effects {
                    match effect {
                        Effect::Saved => self.notices.push_back(Notice::success(SAVED_NOTICE)),
                        Effect::ScrollToTop => self.scroll_to_top = true,
                        Effect::StartSubmission => {}
                    }
                }
                self.wizard = next.wizard;
                Ok(next.effects)
            }
            Err(err) => {
                tracing::warn!(error = %err, section = self.wizard.state.current_section, "event rejected");
                self.notices.push_back(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }
}
