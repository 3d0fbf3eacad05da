//! Navigation and submission state of the wizard

use super::sections::{section, Section, SECTIONS, SECTION_COUNT};
use chrono::{DateTime, Utc};

/// How a section tab is shown relative to the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    Current,
    Completed,
    Pending,
}

/// Wizard bookkeeping owned by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    /// 1-based index of the section being edited
    pub current_section: usize,
    /// Furthest section reached through a validated transition
    pub max_completed_section: usize,
    pub final_confirmation: bool,
    pub last_saved: Option<DateTime<Utc>>,
    pub is_submitting: bool,
    pub is_submitted: bool,
    pub submission_error: Option<String>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            current_section: 1,
            max_completed_section: 1,
            final_confirmation: false,
            last_saved: None,
            is_submitting: false,
            is_submitted: false,
            submission_error: None,
        }
    }

    pub fn current(&self) -> &'static Section {
        section(self.current_section).unwrap_or(&SECTIONS[0])
    }

    pub fn is_final_section(&self) -> bool {
        self.current_section == SECTION_COUNT
    }

    pub fn progress_percent(&self) -> u16 {
        ((self.current_section * 100) / SECTION_COUNT) as u16
    }

    pub fn section_status(&self, id: usize) -> SectionStatus {
        if id == self.current_section {
            SectionStatus::Current
        } else if id < self.current_section {
            SectionStatus::Completed
        } else {
            SectionStatus::Pending
        }
    }
}
