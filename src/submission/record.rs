//! The flat record persisted for a completed onboarding

use crate::state::{
    is_blank, ForwardingRule, FormData, GreetingType, PatientNotification,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of the submissions table.
///
/// Attachments appear as the storage paths they were uploaded to. Blank
/// optional strings are sent as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub structure_name: String,
    pub address: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub main_phone: String,

    pub patient_info: Vec<String>,
    pub communications: Vec<String>,
    pub greeting_type: Option<GreetingType>,
    pub custom_greeting: Option<String>,
    pub other_instructions: Option<String>,
    pub additional_options: Vec<String>,
    pub services_list_file: Option<String>,
    pub guidelines_file: Option<String>,
    pub dont_handle: String,

    pub call_forwarding_settings: BTreeMap<String, ForwardingRule>,

    pub pbx_type: String,
    pub main_call_number: String,
    pub forwarding_number: String,
    pub tech_contact_name: String,
    pub tech_contact_email: String,
    pub tech_contact_phone: String,
    pub external_provider: Option<String>,

    pub notification_types: Vec<String>,
    pub notification_emails: String,
    pub patient_notification: PatientNotification,
    pub whatsapp_message: Option<String>,
}

fn optional(value: &str) -> Option<String> {
    if is_blank(value) {
        None
    } else {
        Some(value.to_string())
    }
}

impl SubmissionRecord {
    /// Flatten the form data, with the upload results standing in for the attachments
    pub fn assemble(
        data: &FormData,
        services_list_file: Option<String>,
        guidelines_file: Option<String>,
    ) -> Self {
        let mut record = Self {
            services_list_file,
            guidelines_file,
            ..Default::default()
        };

        if let Some(info) = data.center_info() {
            record.structure_name = info.structure_name.clone();
            record.address = info.address.clone();
            record.contact_name = info.contact_name.clone();
            record.contact_email = info.contact_email.clone();
            record.contact_phone = info.contact_phone.clone();
            record.main_phone = info.main_phone.clone();
        }

        if let Some(booking) = data.booking_flow() {
            record.patient_info = booking.patient_info.clone();
            record.communications = booking.communications.clone();
            record.greeting_type = booking.greeting_type;
            // The custom text is kept only while the custom greeting is selected
            record.custom_greeting = match booking.greeting_type {
                Some(GreetingType::Custom) => optional(&booking.custom_greeting),
                _ => None,
            };
            record.other_instructions = optional(&booking.other_instructions);
            record.additional_options = booking.additional_options.clone();
            record.dont_handle = booking.dont_handle.clone();
        }

        if let Some(forwarding) = data.call_forwarding() {
            record.call_forwarding_settings = forwarding.rules.clone();
        }

        if let Some(phone) = data.phone_integration() {
            record.pbx_type = phone.pbx_type.clone();
            record.main_call_number = phone.main_call_number.clone();
            record.forwarding_number = phone.forwarding_number.clone();
            record.tech_contact_name = phone.tech_contact_name.clone();
            record.tech_contact_email = phone.tech_contact_email.clone();
            record.tech_contact_phone = phone.tech_contact_phone.clone();
            record.external_provider = optional(&phone.external_provider);
        }

        if let Some(notifications) = data.notifications() {
            record.notification_types = notifications.notification_types.clone();
            record.notification_emails = notifications.notification_emails.clone();
            record.patient_notification = notifications.patient_notification;
            record.whatsapp_message = match notifications.patient_notification {
                PatientNotification::Yes => optional(notifications.effective_whatsapp_message()),
                PatientNotification::No => None,
            };
        }

        record
    }
}
