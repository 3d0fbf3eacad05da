//! Notifications editor

use super::field::{edit_text, EditAction, EditOutcome, FormField};
use super::form_state::SectionEditor;
use crate::state::{toggle_value, Notifications, PatientNotification};

/// (value, label)
pub const NOTIFICATION_TYPES: [(&str, &str); 3] = [
    ("bookings", "Prenotazioni effettuate"),
    ("transfers", "Trasferimenti di chiamata"),
    ("actions", "Azioni richieste"),
];

/// Message proposed when the clinic turns WhatsApp confirmations on
pub const DEFAULT_WHATSAPP_MESSAGE: &str = "Il suo appuntamento per l'ecografia dell'addome completo presso Centro Polidiagnostico è confermato per il 24/10/2025 alle ore 15:15. La invitiamo a seguire le eventuali raccomandazioni fornite durante la chiamata.\n\nQuesto è un messaggio automatico: si prega di non rispondere. Per modifiche o ulteriori informazioni, si prega di ricontattare la clinica.";

const CLINIC_GROUP: &str = "Notifiche alla clinica";
const PATIENT_GROUP: &str = "Conferma prenotazione via WhatsApp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    NotificationType(usize),
    Emails,
    Patient(PatientNotification),
    WhatsappMessage,
}

impl Notifications {
    fn targets(&self) -> Vec<Target> {
        let mut targets: Vec<Target> = (0..NOTIFICATION_TYPES.len())
            .map(Target::NotificationType)
            .collect();
        targets.push(Target::Emails);
        targets.push(Target::Patient(PatientNotification::Yes));
        if self.patient_notification == PatientNotification::Yes {
            targets.push(Target::WhatsappMessage);
        }
        targets.push(Target::Patient(PatientNotification::No));
        targets
    }

    /// The message as shown in the editor; an untouched message reads as the default
    pub fn effective_whatsapp_message(&self) -> &str {
        self.whatsapp_message
            .as_deref()
            .unwrap_or(DEFAULT_WHATSAPP_MESSAGE)
    }

    fn field_for(&self, target: Target) -> FormField {
        match target {
            Target::NotificationType(i) => {
                let (value, label) = NOTIFICATION_TYPES[i];
                FormField::checkbox(label, self.notification_types.iter().any(|v| v == value))
                    .in_group(CLINIC_GROUP)
            }
            Target::Emails => FormField::text(
                "Indirizzi email per le notifiche",
                &self.notification_emails,
                "Es. segreteria@example.com, responsabile@example.com",
            )
            .describe("Inserisci uno o più indirizzi email separati da virgola")
            .required(),
            Target::Patient(PatientNotification::Yes) => FormField::radio(
                "Sì, inviare messaggio WhatsApp di conferma",
                self.patient_notification == PatientNotification::Yes,
            )
            .describe(
                "Il paziente riceverà un messaggio di conferma con i dettagli della prenotazione",
            )
            .in_group(PATIENT_GROUP),
            Target::WhatsappMessage => FormField::multiline(
                "Messaggio di conferma",
                self.effective_whatsapp_message(),
                "Personalizza il messaggio di conferma",
            )
            .describe("Nota: l'invio del messaggio WhatsApp ha un costo di €0.10 per ogni messaggio inviato."),
            Target::Patient(PatientNotification::No) => FormField::radio(
                "No, non inviare messaggio",
                self.patient_notification == PatientNotification::No,
            )
            .describe("Non verrà inviata alcuna conferma automatica ai pazienti")
            .in_group(PATIENT_GROUP),
        }
    }

    fn apply(&self, target: Target, action: &EditAction) -> EditOutcome<Self> {
        let mut next = self.clone();
        let changed = match (target, action) {
            (Target::NotificationType(i), EditAction::Toggle) => {
                let value = NOTIFICATION_TYPES[i].0;
                let checked = !self.notification_types.iter().any(|v| v == value);
                next.notification_types = toggle_value(&self.notification_types, value, checked);
                true
            }
            (Target::Emails, _) => edit_text(&mut next.notification_emails, action, false),
            (Target::Patient(choice), EditAction::Toggle) => {
                if self.patient_notification == choice {
                    false
                } else {
                    next.patient_notification = choice;
                    true
                }
            }
            (Target::WhatsappMessage, _) => {
                let mut message = self.effective_whatsapp_message().to_string();
                let edited = edit_text(&mut message, action, true);
                if edited {
                    next.whatsapp_message = Some(message);
                }
                edited
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

impl SectionEditor for Notifications {
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
