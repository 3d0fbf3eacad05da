//! Read-only projection of the collected data, shown before submission

use super::forms::NOTIFICATION_TYPES;
use super::records::{
    BookingFlow, CallForwarding, CenterInfo, FormData, GreetingType, Notifications,
    PatientNotification, PhoneIntegration,
};
use super::sections::{section_for_key, SectionKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryItem {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub title: &'static str,
    pub items: Vec<SummaryItem>,
}

/// Collects items, dropping empty values
#[derive(Default)]
struct Items(Vec<SummaryItem>);

impl Items {
    fn text(&mut self, label: &'static str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.0.push(SummaryItem {
                label,
                value: value.to_string(),
            });
        }
        self
    }

    fn list<S: AsRef<str>>(&mut self, label: &'static str, values: &[S]) -> &mut Self {
        let joined = values
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(", ");
        self.text(label, &joined)
    }

    fn finish(self, key: SectionKey) -> SummarySection {
        SummarySection {
            title: section_for_key(key).title,
            items: self.0,
        }
    }
}

fn center_info(info: &CenterInfo) -> SummarySection {
    let mut items = Items::default();
    items
        .text("Struttura", &info.structure_name)
        .text("Indirizzo", &info.address)
        .text("Referente", &info.contact_name)
        .text("Email", &info.contact_email)
        .text("Telefono", &info.contact_phone)
        .text("Numero principale", &info.main_phone);
    items.finish(SectionKey::CenterInfo)
}

fn booking_flow(booking: &BookingFlow) -> SummarySection {
    let greeting = match booking.greeting_type {
        Some(GreetingType::Custom) => booking.custom_greeting.as_str(),
        Some(GreetingType::Default) => "Saluto consigliato",
        None => "",
    };
    let rating = if booking.additional_options.iter().any(|o| o == "ask-rating") {
        "Sì"
    } else {
        "No"
    };

    let mut items = Items::default();
    items
        .list("Informazioni paziente da raccogliere", &booking.patient_info)
        .list("Comunicazioni", &booking.communications)
        .text("Istruzioni aggiuntive", &booking.other_instructions)
        .text("Saluto", greeting)
        .text("Richiesta voto conversazione", rating)
        .text(
            "Lista prestazioni",
            booking.services_list.as_ref().map_or("", |a| a.file_name()),
        )
        .text(
            "Linee guida",
            booking.guidelines.as_ref().map_or("", |a| a.file_name()),
        )
        .text("Situazioni da non gestire", &booking.dont_handle);
    items.finish(SectionKey::BookingFlow)
}

fn call_forwarding(forwarding: &CallForwarding) -> SummarySection {
    let mut items = Items::default();
    for id in forwarding.enabled_rule_ids() {
        items.text("Regola attiva", id);
    }
    items.finish(SectionKey::CallForwarding)
}

fn phone_integration(phone: &PhoneIntegration) -> SummarySection {
    let mut items = Items::default();
    items
        .text("Tipo centralino", &phone.pbx_type)
        .text("Numero principale", &phone.main_call_number)
        .text("Numero inoltro", &phone.forwarding_number)
        .text("Referente tecnico", &phone.tech_contact_name)
        .text("Email tecnico", &phone.tech_contact_email)
        .text("Telefono tecnico", &phone.tech_contact_phone)
        .text("Società esterna", &phone.external_provider);
    items.finish(SectionKey::PhoneIntegration)
}

fn notifications(notifications: &Notifications) -> SummarySection {
    let types: Vec<&str> = notifications
        .notification_types
        .iter()
        .map(|value| {
            NOTIFICATION_TYPES
                .iter()
                .find(|(v, _)| *v == value.as_str())
                .map_or(value.as_str(), |(_, label)| *label)
        })
        .collect();
    let whatsapp = match notifications.patient_notification {
        PatientNotification::Yes => "Attivo",
        PatientNotification::No => "Non attivo",
    };

    let mut items = Items::default();
    items
        .list("Notifiche clinica", &types)
        .text("Email notifiche", &notifications.notification_emails)
        .text("WhatsApp pazienti", whatsapp);
    items.finish(SectionKey::Notifications)
}

/// Summarize every section that has a stored slice, in section order
pub fn summarize(data: &FormData) -> Vec<SummarySection> {
    let mut sections = Vec::new();
    if let Some(info) = data.center_info() {
        sections.push(center_info(info));
    }
    if let Some(booking) = data.booking_flow() {
        sections.push(booking_flow(booking));
    }
    if let Some(forwarding) = data.call_forwarding() {
        sections.push(call_forwarding(forwarding));
    }
    if let Some(phone) = data.phone_integration() {
        sections.push(phone_integration(phone));
    }
    if let Some(n) = data.notifications() {
        sections.push(notifications(n));
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ForwardingRule, SectionRecord};
    use pretty_assertions::assert_eq;

    fn item(label: &'static str, value: &str) -> SummaryItem {
        SummaryItem {
            label,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_empty_data_has_no_sections() {
        assert!(summarize(&FormData::default()).is_empty());
    }

    #[test]
    fn test_center_info_suppresses_empty_values() {
        let mut data = FormData::default();
        data.replace(SectionRecord::CenterInfo(CenterInfo {
            structure_name: "Centro Polidiagnostico".to_string(),
            main_phone: "+39 02 1234".to_string(),
            ..Default::default()
        }));

        let summary = summarize(&data);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].title, "Informazioni del centro");
        assert_eq!(
            summary[0].items,
            vec![
                item("Struttura", "Centro Polidiagnostico"),
                item("Numero principale", "+39 02 1234"),
            ]
        );
    }

    #[test]
    fn test_booking_lists_joined_and_greeting() {
        let mut data = FormData::default();
        data.replace(SectionRecord::BookingFlow(BookingFlow {
            patient_info: vec!["Nome e cognome".to_string(), "Sesso".to_string()],
            greeting_type: Some(GreetingType::Default),
            additional_options: vec!["ask-rating".to_string()],
            ..Default::default()
        }));

        let items = &summarize(&data)[0].items;
        assert_eq!(
            items,
            &vec![
                item("Informazioni paziente da raccogliere", "Nome e cognome, Sesso"),
                item("Saluto", "Saluto consigliato"),
                item("Richiesta voto conversazione", "Sì"),
            ]
        );
    }

    #[test]
    fn test_unset_greeting_is_suppressed() {
        let mut data = FormData::default();
        data.replace(SectionRecord::BookingFlow(BookingFlow::default()));
        let items = &summarize(&data)[0].items;
        assert!(!items.iter().any(|i| i.label == "Saluto"));
        assert_eq!(items, &vec![item("Richiesta voto conversazione", "No")]);
    }

    #[test]
    fn test_call_forwarding_lists_only_enabled_rules() {
        let mut forwarding = CallForwarding::default();
        forwarding.rules.insert(
            "urgent".to_string(),
            ForwardingRule {
                enabled: true,
                value: String::new(),
            },
        );
        forwarding.rules.insert(
            "keywords".to_string(),
            ForwardingRule {
                enabled: false,
                value: "dolore".to_string(),
            },
        );
        let mut data = FormData::default();
        data.replace(SectionRecord::CallForwarding(forwarding));

        let summary = summarize(&data);
        assert_eq!(summary[0].items, vec![item("Regola attiva", "urgent")]);
    }

    #[test]
    fn test_notifications_whatsapp_state() {
        let mut data = FormData::default();
        data.replace(SectionRecord::Notifications(Notifications {
            notification_types: vec!["bookings".to_string()],
            notification_emails: "a@b.it".to_string(),
            ..Default::default()
        }));
        let items = &summarize(&data)[0].items;
        assert_eq!(
            items,
            &vec![
                item("Notifiche clinica", "Prenotazioni effettuate"),
                item("Email notifiche", "a@b.it"),
                item("WhatsApp pazienti", "Non attivo"),
            ]
        );
    }

    #[test]
    fn test_sections_follow_wizard_order() {
        let mut data = FormData::default();
        data.replace(SectionRecord::empty(SectionKey::Notifications));
        data.replace(SectionRecord::empty(SectionKey::CenterInfo));
        let titles: Vec<_> = summarize(&data).iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Informazioni del centro", "Notifiche"]);
    }
}
