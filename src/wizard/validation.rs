//! Transition-time section checks

use crate::error::ValidationError;
use crate::state::{
    is_blank, BookingFlow, CenterField, CenterInfo, FormData, GreetingType, Notifications,
    PhoneField, PhoneIntegration, SectionKey, SectionRecord,
};

fn check_center_info(info: &CenterInfo) -> Result<(), ValidationError> {
    let fields: Vec<&'static str> = CenterField::ALL
        .iter()
        .filter(|f| is_blank(f.value(info)))
        .map(|f| f.name())
        .collect();
    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingCenterInfo { fields })
    }
}

fn check_booking_flow(booking: &BookingFlow) -> Result<(), ValidationError> {
    if booking.patient_info.is_empty() {
        return Err(ValidationError::MissingPatientInfo);
    }
    match booking.greeting_type {
        None => return Err(ValidationError::MissingGreetingType),
        Some(GreetingType::Custom) if is_blank(&booking.custom_greeting) => {
            return Err(ValidationError::MissingCustomGreeting)
        }
        Some(_) => {}
    }
    if is_blank(&booking.dont_handle) {
        return Err(ValidationError::MissingDontHandle);
    }
    Ok(())
}

fn check_phone_integration(phone: &PhoneIntegration) -> Result<(), ValidationError> {
    let fields: Vec<&'static str> = PhoneField::REQUIRED
        .iter()
        .filter(|f| is_blank(f.value(phone)))
        .map(|f| f.name())
        .collect();
    if !fields.is_empty() {
        return Err(ValidationError::MissingPhoneIntegration { fields });
    }
    if phone.main_call_number == phone.forwarding_number {
        return Err(ValidationError::ForwardingLoop);
    }
    Ok(())
}

fn check_notifications(notifications: &Notifications) -> Result<(), ValidationError> {
    if is_blank(&notifications.notification_emails) {
        return Err(ValidationError::MissingNotificationEmails);
    }
    Ok(())
}

/// Check the slice owned by `key`. A section never edited validates as an empty record.
pub fn validate_section(key: SectionKey, data: &FormData) -> Result<(), ValidationError> {
    match data.slice_or_empty(key) {
        SectionRecord::CenterInfo(info) => check_center_info(&info),
        SectionRecord::BookingFlow(booking) => check_booking_flow(&booking),
        SectionRecord::CallForwarding(_) => Ok(()),
        SectionRecord::PhoneIntegration(phone) => check_phone_integration(&phone),
        SectionRecord::Notifications(notifications) => check_notifications(&notifications),
    }
}
