//! Section navigation, validation and submission orchestration

mod controller;
mod transition;
mod validation;

#[cfg(test)]
pub(crate) mod fixtures;

pub use controller::{Notice, NoticeLevel, SubmitOutcome, WizardController};

#[cfg(test)]
pub use controller::SAVED_NOTICE;
#[cfg(test)]
pub use transition::Wizard;
