//! Form domain layer
//!
//! One editor per wizard section. Editors describe their visible fields and
//! turn user actions into replacement records.

mod booking_flow;
mod call_forwarding;
mod center_info;
mod field;
mod form_state;
mod notifications;
mod phone_integration;

pub use center_info::CenterField;
pub use field::{EditAction, EditOutcome, FieldValue, FormField};
pub use form_state::FieldFocus;
pub use notifications::NOTIFICATION_TYPES;
pub use phone_integration::PhoneField;

#[cfg(test)]
pub use notifications::DEFAULT_WHATSAPP_MESSAGE;
