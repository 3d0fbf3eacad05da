//! Complete section records shared by the wizard tests

use crate::state::{
    BookingFlow, CallForwarding, CenterInfo, FormData, GreetingType, Notifications,
    PhoneIntegration, SectionRecord,
};

pub fn complete_center_info() -> CenterInfo {
    CenterInfo {
        structure_name: "Centro Polidiagnostico".to_string(),
        address: "Via Roma 1, 20121 Milano".to_string(),
        contact_name: "Mario Rossi".to_string(),
        contact_email: "mario@example.com".to_string(),
        contact_phone: "+39 333 1234567".to_string(),
        main_phone: "+39 02 1234567".to_string(),
    }
}

pub fn complete_booking() -> BookingFlow {
    BookingFlow {
        patient_info: vec!["Nome e cognome".to_string()],
        greeting_type: Some(GreetingType::Default),
        dont_handle: "Urgenze mediche".to_string(),
        ..Default::default()
    }
}

pub fn complete_phone() -> PhoneIntegration {
    PhoneIntegration {
        pbx_type: "3CX".to_string(),
        main_call_number: "+39 02 1111111".to_string(),
        forwarding_number: "+39 02 2222222".to_string(),
        tech_contact_name: "Luigi Bianchi".to_string(),
        tech_contact_email: "luigi@example.com".to_string(),
        tech_contact_phone: "+39 333 7654321".to_string(),
        external_provider: String::new(),
    }
}

pub fn complete_notifications() -> Notifications {
    Notifications {
        notification_emails: "segreteria@example.com".to_string(),
        ..Default::default()
    }
}

/// Form data that passes validation in every section
pub fn complete_form_data() -> FormData {
    let mut data = FormData::default();
    data.replace(SectionRecord::CenterInfo(complete_center_info()));
    data.replace(SectionRecord::BookingFlow(complete_booking()));
    data.replace(SectionRecord::CallForwarding(CallForwarding::default()));
    data.replace(SectionRecord::PhoneIntegration(complete_phone()));
    data.replace(SectionRecord::Notifications(complete_notifications()));
    data
}
