//! Pure wizard transitions
//!
//! Every user-visible change of the wizard goes through [`transition`], which
//! takes the current wizard and an event and returns either the next wizard
//! plus the side effects to run, or the reason the event was refused. A
//! refused event never changes anything.

use super::validation::validate_section;
use crate::error::{WizardError, SUBMISSION_RETRY_MESSAGE};
use crate::state::{section, FormData, SectionKey, SectionRecord, WizardState, SECTION_COUNT};
use chrono::{DateTime, Utc};

/// Navigation state together with the data collected so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wizard {
    pub state: WizardState,
    pub data: FormData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    UpdateSlice {
        key: SectionKey,
        slice: SectionRecord,
        at: DateTime<Utc>,
    },
    Next {
        at: DateTime<Utc>,
    },
    Back,
    JumpTo {
        target: usize,
        at: DateTime<Utc>,
    },
    SetConfirmation(bool),
    SubmitRequested,
    SubmitSucceeded,
    SubmitFailed,
    Reset,
}

/// Side effects requested by a transition, run by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Progress was stored; tell the user
    Saved,
    ScrollToTop,
    /// Hand the collected data to the submission adapter
    StartSubmission,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub wizard: Wizard,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(wizard: Wizard, effects: Vec<Effect>) -> Self {
        Self { wizard, effects }
    }

    fn unchanged(wizard: &Wizard) -> Self {
        Self::to(wizard.clone(), Vec::new())
    }

    #[cfg(test)]
    pub fn has_effect(&self, effect: Effect) -> bool {
        self.effects.contains(&effect)
    }
}

pub fn transition(wizard: &Wizard, event: WizardEvent) -> Result<Transition, WizardError> {
    let state = &wizard.state;

    if state.is_submitted {
        return match event {
            WizardEvent::SubmitRequested => Ok(Transition::unchanged(wizard)),
            WizardEvent::Reset => Ok(reset()),
            _ => Err(WizardError::AlreadySubmitted),
        };
    }

    if state.is_submitting {
        return match event {
            WizardEvent::SubmitRequested => Ok(Transition::unchanged(wizard)),
            WizardEvent::SubmitSucceeded => Ok(submit_succeeded(wizard)),
            WizardEvent::SubmitFailed => Ok(submit_failed(wizard)),
            _ => Err(WizardError::SubmissionInProgress),
        };
    }

    match event {
        WizardEvent::UpdateSlice { key, slice, at } => update_slice(wizard, key, slice, at),
        WizardEvent::Next { at } => next(wizard, at),
        WizardEvent::Back => Ok(back(wizard)),
        WizardEvent::JumpTo { target, at } => jump_to(wizard, target, at),
        WizardEvent::SetConfirmation(flag) => {
            let mut next = wizard.clone();
            next.state.final_confirmation = flag;
            Ok(Transition::to(next, Vec::new()))
        }
        WizardEvent::SubmitRequested => submit_requested(wizard),
        // Outcomes only mean something while a submission is in flight
        WizardEvent::SubmitSucceeded | WizardEvent::SubmitFailed => {
            Ok(Transition::unchanged(wizard))
        }
        WizardEvent::Reset => Ok(reset()),
    }
}

fn update_slice(
    wizard: &Wizard,
    key: SectionKey,
    slice: SectionRecord,
    at: DateTime<Utc>,
) -> Result<Transition, WizardError> {
    if slice.key() != key {
        return Err(WizardError::SliceMismatch {
            expected: key,
            found: slice.key(),
        });
    }
    let mut next = wizard.clone();
    next.data.replace(slice);
    next.state.last_saved = Some(at);
    Ok(Transition::to(next, vec![Effect::Saved]))
}

fn next(wizard: &Wizard, at: DateTime<Utc>) -> Result<Transition, WizardError> {
    validate_section(wizard.state.current().key, &wizard.data)?;

    let mut next = wizard.clone();
    let target = (wizard.state.current_section + 1).min(SECTION_COUNT);
    next.state.current_section = target;
    next.state.max_completed_section = wizard.state.max_completed_section.max(target);
    next.state.last_saved = Some(at);
    Ok(Transition::to(next, vec![Effect::Saved, Effect::ScrollToTop]))
}

fn back(wizard: &Wizard) -> Transition {
    if wizard.state.current_section <= 1 {
        return Transition::unchanged(wizard);
    }
    let mut next = wizard.clone();
    next.state.current_section -= 1;
    Transition::to(next, vec![Effect::ScrollToTop])
}

fn jump_to(wizard: &Wizard, target: usize, at: DateTime<Utc>) -> Result<Transition, WizardError> {
    if section(target).is_none() {
        return Err(WizardError::UnknownSection(target));
    }

    let current = wizard.state.current_section;
    if target == current {
        return Ok(Transition::unchanged(wizard));
    }

    let mut next = wizard.clone();
    if target < current {
        next.state.current_section = target;
        return Ok(Transition::to(next, vec![Effect::ScrollToTop]));
    }

    let max_completed = wizard.state.max_completed_section;
    if target > max_completed + 1 {
        return Err(WizardError::SectionLocked {
            target,
            max_completed,
        });
    }

    validate_section(wizard.state.current().key, &wizard.data)?;
    next.state.current_section = target;
    next.state.max_completed_section = max_completed.max(target);
    next.state.last_saved = Some(at);
    Ok(Transition::to(next, vec![Effect::Saved, Effect::ScrollToTop]))
}

fn submit_requested(wizard: &Wizard) -> Result<Transition, WizardError> {
    if !wizard.state.final_confirmation {
        return Err(WizardError::ConfirmationRequired);
    }
    let mut next = wizard.clone();
    next.state.is_submitting = true;
    next.state.submission_error = None;
    Ok(Transition::to(next, vec![Effect::StartSubmission]))
}

fn submit_succeeded(wizard: &Wizard) -> Transition {
    let mut next = wizard.clone();
    next.state.is_submitting = false;
    next.state.is_submitted = true;
    Transition::to(next, vec![Effect::ScrollToTop])
}

fn submit_failed(wizard: &Wizard) -> Transition {
    let mut next = wizard.clone();
    next.state.is_submitting = false;
    next.state.submission_error = Some(SUBMISSION_RETRY_MESSAGE.to_string());
    Transition::to(next, Vec::new())
}

fn reset() -> Transition {
    Transition::to(Wizard::default(), vec![Effect::ScrollToTop])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::state::{BookingFlow, CenterInfo, GreetingType};
    use crate::wizard::fixtures::{complete_center_info, complete_form_data};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn apply(wizard: &Wizard, event: WizardEvent) -> Wizard {
        transition(wizard, event).unwrap().wizard
    }

    fn at_section(current: usize, max_completed: usize, data: FormData) -> Wizard {
        let mut wizard = Wizard {
            data,
            ..Default::default()
        };
        wizard.state.current_section = current;
        wizard.state.max_completed_section = max_completed;
        wizard
    }

    #[test]
    fn test_update_then_read_returns_slice() {
        let slice = SectionRecord::CenterInfo(complete_center_info());
        let at = now();
        let result = transition(
            &Wizard::default(),
            WizardEvent::UpdateSlice {
                key: SectionKey::CenterInfo,
                slice: slice.clone(),
                at,
            },
        )
        .unwrap();

        assert_eq!(result.wizard.data.get(SectionKey::CenterInfo), Some(&slice));
        assert_eq!(result.wizard.state.last_saved, Some(at));
        assert_eq!(result.effects, vec![Effect::Saved]);
    }

    #[test]
    fn test_update_rejects_mismatched_slice() {
        let wizard = Wizard::default();
        let err = transition(
            &wizard,
            WizardEvent::UpdateSlice {
                key: SectionKey::BookingFlow,
                slice: SectionRecord::CenterInfo(CenterInfo::default()),
                at: now(),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            WizardError::SliceMismatch {
                expected: SectionKey::BookingFlow,
                found: SectionKey::CenterInfo,
            }
        );
    }

    #[test]
    fn test_next_blocked_by_missing_fields() {
        let wizard = Wizard::default();
        let err = transition(&wizard, WizardEvent::Next { at: now() }).unwrap_err();
        assert!(matches!(
            err,
            WizardError::Validation(ValidationError::MissingCenterInfo { .. })
        ));
    }

    #[test]
    fn test_complete_center_info_advances_to_booking() {
        let mut data = FormData::default();
        data.replace(SectionRecord::CenterInfo(complete_center_info()));
        let wizard = at_section(1, 1, data);

        let result = transition(&wizard, WizardEvent::Next { at: now() }).unwrap();
        assert_eq!(result.wizard.state.current_section, 2);
        assert_eq!(result.wizard.state.max_completed_section, 2);
        assert!(result.wizard.state.last_saved.is_some());
        assert!(result.has_effect(Effect::Saved));
        assert!(result.has_effect(Effect::ScrollToTop));
    }

    #[test]
    fn test_empty_patient_info_blocks_booking() {
        let mut data = complete_form_data();
        data.replace(SectionRecord::BookingFlow(BookingFlow {
            patient_info: Vec::new(),
            greeting_type: Some(GreetingType::Default),
            dont_handle: "x".to_string(),
            ..Default::default()
        }));
        let wizard = at_section(2, 2, data);

        let err = transition(&wizard, WizardEvent::Next { at: now() }).unwrap_err();
        assert_eq!(
            err,
            WizardError::Validation(ValidationError::MissingPatientInfo)
        );
    }

    #[test]
    fn test_next_on_final_section_stays() {
        let wizard = at_section(5, 5, complete_form_data());
        let next = apply(&wizard, WizardEvent::Next { at: now() });
        assert_eq!(next.state.current_section, 5);
    }

    #[test]
    fn test_back_skips_validation_and_keeps_max() {
        let wizard = at_section(3, 3, FormData::default());
        let result = transition(&wizard, WizardEvent::Back).unwrap();
        assert_eq!(result.wizard.state.current_section, 2);
        assert_eq!(result.wizard.state.max_completed_section, 3);
        assert_eq!(result.effects, vec![Effect::ScrollToTop]);
    }

    #[test]
    fn test_back_on_first_section_is_noop() {
        let wizard = Wizard::default();
        let result = transition(&wizard, WizardEvent::Back).unwrap();
        assert_eq!(result.wizard, wizard);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_jump_to_current_is_noop() {
        let wizard = at_section(2, 3, FormData::default());
        let result = transition(&wizard, WizardEvent::JumpTo { target: 2, at: now() }).unwrap();
        assert_eq!(result.wizard, wizard);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_jump_back_is_unconditional() {
        let wizard = at_section(4, 4, FormData::default());
        let next = apply(&wizard, WizardEvent::JumpTo { target: 1, at: now() });
        assert_eq!(next.state.current_section, 1);
        assert_eq!(next.state.max_completed_section, 4);
    }

    #[test]
    fn test_jump_beyond_next_unlocked_is_locked() {
        let wizard = at_section(1, 2, complete_form_data());
        let err = transition(&wizard, WizardEvent::JumpTo { target: 4, at: now() }).unwrap_err();
        assert_eq!(
            err,
            WizardError::SectionLocked {
                target: 4,
                max_completed: 2,
            }
        );
        assert_eq!(err.to_string(), "Completa le sezioni precedenti prima di procedere");
    }

    #[test]
    fn test_jump_forward_validates_current_section() {
        let wizard = at_section(1, 2, FormData::default());
        let err = transition(&wizard, WizardEvent::JumpTo { target: 2, at: now() }).unwrap_err();
        assert!(matches!(err, WizardError::Validation(_)));
    }

    #[test]
    fn test_jump_forward_raises_max_completed() {
        let wizard = at_section(1, 2, complete_form_data());
        let result = transition(&wizard, WizardEvent::JumpTo { target: 3, at: now() }).unwrap();
        assert_eq!(result.wizard.state.current_section, 3);
        assert_eq!(result.wizard.state.max_completed_section, 3);
        assert!(result.has_effect(Effect::Saved));
    }

    #[test]
    fn test_jump_to_unknown_section() {
        let wizard = Wizard::default();
        for target in [0, 6] {
            assert_eq!(
                transition(&wizard, WizardEvent::JumpTo { target, at: now() }),
                Err(WizardError::UnknownSection(target))
            );
        }
    }

    #[test]
    fn test_submit_requires_confirmation() {
        let wizard = at_section(5, 5, complete_form_data());
        assert_eq!(
            transition(&wizard, WizardEvent::SubmitRequested),
            Err(WizardError::ConfirmationRequired)
        );
    }

    #[test]
    fn test_submit_starts_submission() {
        let mut wizard = at_section(5, 5, complete_form_data());
        wizard.state.final_confirmation = true;
        wizard.state.submission_error = Some("old".to_string());

        let result = transition(&wizard, WizardEvent::SubmitRequested).unwrap();
        assert!(result.wizard.state.is_submitting);
        assert!(result.wizard.state.submission_error.is_none());
        assert_eq!(result.effects, vec![Effect::StartSubmission]);
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let mut wizard = at_section(5, 5, complete_form_data());
        wizard.state.final_confirmation = true;
        wizard.state.is_submitting = true;

        let result = transition(&wizard, WizardEvent::SubmitRequested).unwrap();
        assert_eq!(result.wizard, wizard);
        assert!(!result.has_effect(Effect::StartSubmission));
    }

    #[test]
    fn test_navigation_refused_while_in_flight() {
        let mut wizard = at_section(5, 5, complete_form_data());
        wizard.state.is_submitting = true;
        assert_eq!(
            transition(&wizard, WizardEvent::Back),
            Err(WizardError::SubmissionInProgress)
        );
        assert_eq!(
            transition(&wizard, WizardEvent::Reset),
            Err(WizardError::SubmissionInProgress)
        );
    }

    #[test]
    fn test_submit_failure_keeps_data_and_section() {
        let mut wizard = at_section(5, 5, complete_form_data());
        wizard.state.final_confirmation = true;
        wizard.state.is_submitting = true;

        let next = apply(&wizard, WizardEvent::SubmitFailed);
        assert!(!next.state.is_submitting);
        assert!(!next.state.is_submitted);
        assert_eq!(
            next.state.submission_error.as_deref(),
            Some(SUBMISSION_RETRY_MESSAGE)
        );
        assert_eq!(next.state.current_section, 5);
        assert_eq!(next.data, wizard.data);
    }

    #[test]
    fn test_submitted_is_terminal() {
        let mut wizard = at_section(5, 5, complete_form_data());
        wizard.state.is_submitting = true;
        let done = apply(&wizard, WizardEvent::SubmitSucceeded);
        assert!(done.state.is_submitted);
        assert!(!done.state.is_submitting);

        assert_eq!(
            transition(&done, WizardEvent::Back),
            Err(WizardError::AlreadySubmitted)
        );
        assert_eq!(
            transition(&done, WizardEvent::SetConfirmation(false)),
            Err(WizardError::AlreadySubmitted)
        );
        let again = transition(&done, WizardEvent::SubmitRequested).unwrap();
        assert_eq!(again.wizard, done);
    }

    #[test]
    fn test_reset_returns_fresh_wizard() {
        let wizard = at_section(3, 3, complete_form_data());
        let next = apply(&wizard, WizardEvent::Reset);
        assert_eq!(next, Wizard::default());
        assert!(next.data.is_empty());
    }
}
