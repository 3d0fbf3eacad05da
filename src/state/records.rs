//! Per-section records and the aggregated form data

use super::attachment::{Attachment, AttachmentSlot};
use super::sections::SectionKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// True when a text value is empty or whitespace only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checkbox-group toggle over an ordered selection.
///
/// Checking appends the value when absent; unchecking removes it and keeps
/// the order of the remaining entries.
pub fn toggle_value(values: &[String], value: &str, checked: bool) -> Vec<String> {
    let mut next = values.to_vec();
    let position = next.iter().position(|v| v == value);
    match (checked, position) {
        (true, None) => next.push(value.to_string()),
        (false, Some(index)) => {
            next.remove(index);
        }
        _ => {}
    }
    next
}

/// Center contact information (section 1)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CenterInfo {
    pub structure_name: String,
    pub address: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub main_phone: String,
}

/// How the assistant greets callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreetingType {
    Default,
    Custom,
}

/// Booking preferences and assistant setup (section 2)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFlow {
    pub patient_info: Vec<String>,
    pub communications: Vec<String>,
    pub other_instructions: String,
    pub greeting_type: Option<GreetingType>,
    pub custom_greeting: String,
    pub additional_options: Vec<String>,
    pub services_list: Option<Attachment>,
    pub guidelines: Option<Attachment>,
    pub dont_handle: String,
}

impl BookingFlow {
    pub fn attachment(&self, slot: AttachmentSlot) -> Option<&Attachment> {
        match slot {
            AttachmentSlot::ServicesList => self.services_list.as_ref(),
            AttachmentSlot::Guidelines => self.guidelines.as_ref(),
        }
    }

    /// Replace the attachment held by a slot, discarding the previous one
    pub fn with_attachment(mut self, slot: AttachmentSlot, attachment: Option<Attachment>) -> Self {
        match slot {
            AttachmentSlot::ServicesList => self.services_list = attachment,
            AttachmentSlot::Guidelines => self.guidelines = attachment,
        }
        self
    }
}

/// State of one call-forwarding rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardingRule {
    pub enabled: bool,
    pub value: String,
}

/// Call-forwarding rules keyed by rule id (section 3)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallForwarding {
    pub rules: BTreeMap<String, ForwardingRule>,
}

impl CallForwarding {
    pub fn rule(&self, id: &str) -> Option<&ForwardingRule> {
        self.rules.get(id)
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.rule(id).is_some_and(|r| r.enabled)
    }

    pub fn enabled_rule_ids(&self) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|(_, rule)| rule.enabled)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

/// PBX and telephony integration details (section 4)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneIntegration {
    pub pbx_type: String,
    pub main_call_number: String,
    pub forwarding_number: String,
    pub tech_contact_name: String,
    pub tech_contact_email: String,
    pub tech_contact_phone: String,
    pub external_provider: String,
}

impl PhoneIntegration {
    /// Both numbers are filled in and identical, which would make the assistant forward to itself
    pub fn has_forwarding_loop(&self) -> bool {
        !self.main_call_number.is_empty()
            && !self.forwarding_number.is_empty()
            && self.main_call_number == self.forwarding_number
    }
}

/// Whether patients get a WhatsApp confirmation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientNotification {
    Yes,
    #[default]
    No,
}

/// Clinic and patient notification settings (section 5)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    pub notification_types: Vec<String>,
    pub notification_emails: String,
    pub patient_notification: PatientNotification,
    /// None until the user edits the message; the default message stands in
    pub whatsapp_message: Option<String>,
}

/// The slice of form data owned by one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionRecord {
    CenterInfo(CenterInfo),
    BookingFlow(BookingFlow),
    CallForwarding(CallForwarding),
    PhoneIntegration(PhoneIntegration),
    Notifications(Notifications),
}

impl SectionRecord {
    pub fn key(&self) -> SectionKey {
        match self {
            Self::CenterInfo(_) => SectionKey::CenterInfo,
            Self::BookingFlow(_) => SectionKey::BookingFlow,
            Self::CallForwarding(_) => SectionKey::CallForwarding,
            Self::PhoneIntegration(_) => SectionKey::PhoneIntegration,
            Self::Notifications(_) => SectionKey::Notifications,
        }
    }

    /// An untouched record for a section
    pub fn empty(key: SectionKey) -> Self {
        match key {
            SectionKey::CenterInfo => Self::CenterInfo(CenterInfo::default()),
            SectionKey::BookingFlow => Self::BookingFlow(BookingFlow::default()),
            SectionKey::CallForwarding => Self::CallForwarding(CallForwarding::default()),
            SectionKey::PhoneIntegration => Self::PhoneIntegration(PhoneIntegration::default()),
            SectionKey::Notifications => Self::Notifications(Notifications::default()),
        }
    }
}

/// Aggregated wizard data, one slice per section key.
///
/// Slices are only ever replaced whole; the map only shrinks on a full reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    slices: BTreeMap<SectionKey, SectionRecord>,
}

impl FormData {
    pub fn get(&self, key: SectionKey) -> Option<&SectionRecord> {
        self.slices.get(&key)
    }

    /// The stored slice, or an empty record when the section was never edited
    pub fn slice_or_empty(&self, key: SectionKey) -> SectionRecord {
        self.get(key)
            .cloned()
            .unwrap_or_else(|| SectionRecord::empty(key))
    }

    /// Store a slice under its own key, replacing any previous slice
    pub fn replace(&mut self, record: SectionRecord) {
        self.slices.insert(record.key(), record);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn center_info(&self) -> Option<&CenterInfo> {
        match self.get(SectionKey::CenterInfo) {
            Some(SectionRecord::CenterInfo(r)) => Some(r),
            _ => None,
        }
    }

    pub fn booking_flow(&self) -> Option<&BookingFlow> {
        match self.get(SectionKey::BookingFlow) {
            Some(SectionRecord::BookingFlow(r)) => Some(r),
            _ => None,
        }
    }

    pub fn call_forwarding(&self) -> Option<&CallForwarding> {
        match self.get(SectionKey::CallForwarding) {
            Some(SectionRecord::CallForwarding(r)) => Some(r),
            _ => None,
        }
    }

    pub fn phone_integration(&self) -> Option<&PhoneIntegration> {
        match self.get(SectionKey::PhoneIntegration) {
            Some(SectionRecord::PhoneIntegration(r)) => Some(r),
            _ => None,
        }
    }

    pub fn notifications(&self) -> Option<&Notifications> {
        match self.get(SectionKey::Notifications) {
            Some(SectionRecord::Notifications(r)) => Some(r),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\n"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_toggle_on_appends_in_selection_order() {
        let values = toggle_value(&strings(&["Sesso"]), "Codice fiscale", true);
        assert_eq!(values, strings(&["Sesso", "Codice fiscale"]));
    }

    #[test]
    fn test_toggle_on_existing_value_is_noop() {
        let values = toggle_value(&strings(&["Sesso"]), "Sesso", true);
        assert_eq!(values, strings(&["Sesso"]));
    }

    #[test]
    fn test_toggle_on_then_off_restores_membership() {
        let original = strings(&["Nome e cognome", "Sesso", "Data di nascita"]);
        let on = toggle_value(&original, "Codice fiscale", true);
        let off = toggle_value(&on, "Codice fiscale", false);
        assert_eq!(off, original);
    }

    #[test]
    fn test_toggle_off_preserves_remaining_order() {
        let original = strings(&["a", "b", "c"]);
        assert_eq!(toggle_value(&original, "b", false), strings(&["a", "c"]));
    }

    #[test]
    fn test_replace_is_whole_slice() {
        let mut data = FormData::default();
        data.replace(SectionRecord::CenterInfo(CenterInfo {
            structure_name: "Centro".to_string(),
            address: "Via Roma 1".to_string(),
            ..Default::default()
        }));
        let replacement = SectionRecord::CenterInfo(CenterInfo {
            structure_name: "Altro".to_string(),
            ..Default::default()
        });
        data.replace(replacement.clone());

        assert_eq!(data.get(SectionKey::CenterInfo), Some(&replacement));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_slice_or_empty_defaults_per_key() {
        let data = FormData::default();
        assert_eq!(
            data.slice_or_empty(SectionKey::Notifications),
            SectionRecord::Notifications(Notifications::default())
        );
        assert!(data.is_empty());
    }

    #[test]
    fn test_with_attachment_replaces_slot() {
        let first = Attachment::new("a.pdf", vec![1u8]);
        let second = Attachment::new("b.pdf", vec![2u8]);
        let booking = BookingFlow::default()
            .with_attachment(AttachmentSlot::ServicesList, Some(first))
            .with_attachment(AttachmentSlot::ServicesList, Some(second.clone()));
        assert_eq!(
            booking.attachment(AttachmentSlot::ServicesList),
            Some(&second)
        );
        assert!(booking.attachment(AttachmentSlot::Guidelines).is_none());
    }

    #[test]
    fn test_enabled_rule_ids() {
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
        assert_eq!(forwarding.enabled_rule_ids(), vec!["urgent"]);
        assert!(!forwarding.is_enabled("keywords"));
    }

    #[test]
    fn test_forwarding_loop_requires_both_numbers() {
        let mut phone = PhoneIntegration::default();
        assert!(!phone.has_forwarding_loop());
        phone.main_call_number = "+39 02 1234".to_string();
        phone.forwarding_number = "+39 02 1234".to_string();
        assert!(phone.has_forwarding_loop());
    }
}
