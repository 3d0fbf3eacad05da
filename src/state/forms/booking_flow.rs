//! Booking flow editor

use super::field::{edit_text, EditAction, EditOutcome, FormField};
use super::form_state::SectionEditor;
use crate::state::{toggle_value, AttachmentSlot, BookingFlow, GreetingType};

/// Patient data the assistant can collect, with an optional hint
pub const PATIENT_INFO_OPTIONS: [(&str, Option<&str>); 8] = [
    ("Nome e cognome", None),
    ("Codice fiscale", None),
    (
        "Numero di telefono",
        Some("Il numero del chiamante viene raccolto automaticamente. Richiedilo solo se il paziente è diverso dal chiamante."),
    ),
    ("Data di nascita", None),
    ("Sesso", None),
    ("Comune di nascita", None),
    ("Quesito diagnostico", None),
    ("Preferenza per il medico", None),
];

pub const COMMUNICATION_OPTIONS: [&str; 2] = ["Prezzo della prestazione", "Preparazione necessaria"];

/// (value, label)
pub const ADDITIONAL_OPTIONS: [(&str, &str); 1] = [("ask-rating", "Chiedere voto alla conversazione")];

const PATIENT_INFO_GROUP: &str = "Informazioni da chiedere al paziente";
const COMMUNICATIONS_GROUP: &str = "Comunicazioni al paziente";
const GREETING_GROUP: &str = "Saluto iniziale dell'assistente";
const ADDITIONAL_GROUP: &str = "Aggiunte facoltative";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    PatientInfo(usize),
    Communication(usize),
    OtherInstructions,
    Greeting(GreetingType),
    CustomGreeting,
    AdditionalOption(usize),
    Attachment(AttachmentSlot),
    DontHandle,
}

impl BookingFlow {
    fn targets(&self) -> Vec<Target> {
        let mut targets: Vec<Target> = (0..PATIENT_INFO_OPTIONS.len())
            .map(Target::PatientInfo)
            .collect();
        targets.extend((0..COMMUNICATION_OPTIONS.len()).map(Target::Communication));
        targets.push(Target::OtherInstructions);
        targets.push(Target::Greeting(GreetingType::Default));
        targets.push(Target::Greeting(GreetingType::Custom));
        if self.greeting_type == Some(GreetingType::Custom) {
            targets.push(Target::CustomGreeting);
        }
        targets.extend((0..ADDITIONAL_OPTIONS.len()).map(Target::AdditionalOption));
        targets.push(Target::Attachment(AttachmentSlot::ServicesList));
        targets.push(Target::Attachment(AttachmentSlot::Guidelines));
        targets.push(Target::DontHandle);
        targets
    }

    fn field_for(&self, target: Target) -> FormField {
        match target {
            Target::PatientInfo(i) => {
                let (value, hint) = PATIENT_INFO_OPTIONS[i];
                let field = FormField::checkbox(value, self.patient_info.iter().any(|v| v == value))
                    .in_group(PATIENT_INFO_GROUP)
                    .required();
                match hint {
                    Some(hint) => field.describe(hint),
                    None => field,
                }
            }
            Target::Communication(i) => {
                let value = COMMUNICATION_OPTIONS[i];
                FormField::checkbox(value, self.communications.iter().any(|v| v == value))
                    .in_group(COMMUNICATIONS_GROUP)
            }
            Target::OtherInstructions => FormField::multiline(
                "Istruzioni aggiuntive",
                &self.other_instructions,
                "Es. Si prega di presentarsi 15 minuti prima dell'appuntamento...",
            )
            .describe("Altre comunicazioni da inviare sempre ai pazienti"),
            Target::Greeting(GreetingType::Default) => FormField::radio(
                "Usa saluto consigliato",
                self.greeting_type == Some(GreetingType::Default),
            )
            .describe("\"[Nome centro medico], buongiorno. Sono Anna, come posso aiutarla?\"")
            .in_group(GREETING_GROUP)
            .required(),
            Target::Greeting(GreetingType::Custom) => FormField::radio(
                "Inserisci saluto personalizzato",
                self.greeting_type == Some(GreetingType::Custom),
            )
            .in_group(GREETING_GROUP)
            .required(),
            Target::CustomGreeting => FormField::text(
                "Saluto personalizzato",
                &self.custom_greeting,
                "Es. Salve, sono Maria dell'assistenza virtuale...",
            )
            .required(),
            Target::AdditionalOption(i) => {
                let (value, label) = ADDITIONAL_OPTIONS[i];
                FormField::checkbox(label, self.additional_options.iter().any(|v| v == value))
                    .in_group(ADDITIONAL_GROUP)
            }
            Target::Attachment(slot) => {
                let field = FormField::file(slot, self.attachment(slot));
                match slot {
                    AttachmentSlot::ServicesList => field.describe(
                        "Elenco completo delle prestazioni offerte (PDF, Excel o Word). In alternativa puoi inviarlo via email a riccardo@ciaodott.com",
                    ),
                    AttachmentSlot::Guidelines => {
                        field.describe("Documenti con procedure e protocolli da seguire (PDF o Word)")
                    }
                }
            }
            Target::DontHandle => FormField::multiline(
                "Situazioni da NON gestire mai",
                &self.dont_handle,
                "Es. Richieste di risultati esami, urgenze mediche, pratiche assicurative, reclami...",
            )
            .describe("Richieste che devono sempre essere inoltrate alla segreteria")
            .required(),
        }
    }

    fn apply(&self, target: Target, action: &EditAction) -> EditOutcome<Self> {
        let mut next = self.clone();
        let changed = match (target, action) {
            (Target::PatientInfo(i), EditAction::Toggle) => {
                let value = PATIENT_INFO_OPTIONS[i].0;
                let checked = !self.patient_info.iter().any(|v| v == value);
                next.patient_info = toggle_value(&self.patient_info, value, checked);
                true
            }
            (Target::Communication(i), EditAction::Toggle) => {
                let value = COMMUNICATION_OPTIONS[i];
                let checked = !self.communications.iter().any(|v| v == value);
                next.communications = toggle_value(&self.communications, value, checked);
                true
            }
            (Target::AdditionalOption(i), EditAction::Toggle) => {
                let value = ADDITIONAL_OPTIONS[i].0;
                let checked = !self.additional_options.iter().any(|v| v == value);
                next.additional_options = toggle_value(&self.additional_options, value, checked);
                true
            }
            (Target::Greeting(greeting), EditAction::Toggle) => {
                if self.greeting_type == Some(greeting) {
                    false
                } else {
                    next.greeting_type = Some(greeting);
                    true
                }
            }
            (Target::OtherInstructions, _) => edit_text(&mut next.other_instructions, action, true),
            (Target::CustomGreeting, _) => edit_text(&mut next.custom_greeting, action, false),
            (Target::DontHandle, _) => edit_text(&mut next.dont_handle, action, true),
            (Target::Attachment(slot), EditAction::Attach(attachment)) => {
                if let Err(rejection) = slot.check(attachment) {
                    tracing::warn!(
                        slot = slot.prefix(),
                        file = attachment.file_name(),
                        "attachment rejected: {rejection}"
                    );
                    return EditOutcome::Rejected(rejection.to_string());
                }
                next = next.with_attachment(slot, Some(attachment.clone()));
                true
            }
            (Target::Attachment(slot), EditAction::Remove) => {
                if self.attachment(slot).is_none() {
                    false
                } else {
                    next = next.with_attachment(slot, None);
                    true
                }
            }
            _ => false,
        };

        if changed {
            EditOutcome::Updated(next)
        } else {
            EditOutcome::Unchanged
        }
    }
}

impl SectionEditor for BookingFlow {
    fn fields(&self) -> Vec<FormField> {
        self.targets()
            .into_iter()
            .map(|t| self.field_for(t))
            .collect()
    }

    fn edit(&self, index: usize, action: &EditAction) -> EditOutcome<Self> {
        match self.targets().get(index) {
            Some(target) => self.apply(*target, action),
            None => EditOutcome::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Attachment, MAX_ATTACHMENT_BYTES};
    use pretty_assertions::assert_eq;

    fn index_of(booking: &BookingFlow, label: &str) -> usize {
        booking
            .fields()
            .iter()
            .position(|f| f.label == label)
            .unwrap()
    }

    fn updated(outcome: EditOutcome<BookingFlow>) -> BookingFlow {
        match outcome {
            EditOutcome::Updated(b) => b,
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_checkbox_toggle_round_trip() {
        let booking = BookingFlow {
            patient_info: vec!["Sesso".to_string(), "Data di nascita".to_string()],
            ..Default::default()
        };
        let idx = index_of(&booking, "Codice fiscale");

        let on = updated(booking.edit(idx, &EditAction::Toggle));
        assert_eq!(
            on.patient_info,
            vec!["Sesso", "Data di nascita", "Codice fiscale"]
        );

        let off = updated(on.edit(idx, &EditAction::Toggle));
        assert_eq!(off.patient_info, booking.patient_info);
    }

    #[test]
    fn test_custom_greeting_field_only_when_custom_selected() {
        let booking = BookingFlow::default();
        assert!(!booking
            .fields()
            .iter()
            .any(|f| f.label == "Saluto personalizzato"));

        let idx = index_of(&booking, "Inserisci saluto personalizzato");
        let custom = updated(booking.edit(idx, &EditAction::Toggle));
        assert_eq!(custom.greeting_type, Some(GreetingType::Custom));
        assert!(custom
            .fields()
            .iter()
            .any(|f| f.label == "Saluto personalizzato"));
    }

    #[test]
    fn test_selecting_same_greeting_is_unchanged() {
        let booking = BookingFlow {
            greeting_type: Some(GreetingType::Default),
            ..Default::default()
        };
        let idx = index_of(&booking, "Usa saluto consigliato");
        assert_eq!(booking.edit(idx, &EditAction::Toggle), EditOutcome::Unchanged);
    }

    #[test]
    fn test_switching_greeting_keeps_custom_text() {
        let booking = BookingFlow {
            greeting_type: Some(GreetingType::Custom),
            custom_greeting: "Salve".to_string(),
            ..Default::default()
        };
        let idx = index_of(&booking, "Usa saluto consigliato");
        let next = updated(booking.edit(idx, &EditAction::Toggle));
        assert_eq!(next.greeting_type, Some(GreetingType::Default));
        assert_eq!(next.custom_greeting, "Salve");
    }

    #[test]
    fn test_oversized_attachment_is_rejected_and_slice_unchanged() {
        let booking = BookingFlow {
            dont_handle: "urgenze".to_string(),
            ..Default::default()
        };
        let idx = index_of(&booking, AttachmentSlot::ServicesList.label());
        let big = Attachment::new(
            "listino.pdf",
            vec![0u8; (12 * 1024 * 1024) as usize],
        );
        assert!(big.size() > MAX_ATTACHMENT_BYTES);

        let outcome = booking.edit(idx, &EditAction::Attach(big));
        match outcome {
            EditOutcome::Rejected(message) => assert!(message.contains("10MB")),
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(booking.services_list.is_none());
    }

    #[test]
    fn test_new_attachment_replaces_previous() {
        let booking = BookingFlow::default();
        let idx = index_of(&booking, AttachmentSlot::Guidelines.label());

        let first = updated(booking.edit(
            idx,
            &EditAction::Attach(Attachment::new("v1.pdf", vec![1u8])),
        ));
        let second = updated(first.edit(
            idx,
            &EditAction::Attach(Attachment::new("v2.docx", vec![2u8])),
        ));
        assert_eq!(
            second.guidelines.as_ref().map(|a| a.file_name()),
            Some("v2.docx")
        );
    }

    #[test]
    fn test_wrong_extension_is_rejected() {
        let booking = BookingFlow::default();
        let idx = index_of(&booking, AttachmentSlot::Guidelines.label());
        let outcome = booking.edit(
            idx,
            &EditAction::Attach(Attachment::new("prezzi.xlsx", vec![1u8])),
        );
        assert!(matches!(outcome, EditOutcome::Rejected(_)));
    }

    #[test]
    fn test_remove_attachment() {
        let booking = BookingFlow::default().with_attachment(
            AttachmentSlot::ServicesList,
            Some(Attachment::new("a.pdf", vec![1u8])),
        );
        let idx = index_of(&booking, AttachmentSlot::ServicesList.label());
        let next = updated(booking.edit(idx, &EditAction::Remove));
        assert!(next.services_list.is_none());
        assert_eq!(next.edit(idx, &EditAction::Remove), EditOutcome::Unchanged);
    }

    #[test]
    fn test_multiline_accepts_newline() {
        let booking = BookingFlow::default();
        let idx = index_of(&booking, "Situazioni da NON gestire mai");
        let next = updated(booking.edit(idx, &EditAction::Newline));
        assert_eq!(next.dont_handle, "\n");
    }
}
