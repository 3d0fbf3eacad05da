//! Phone integration editor

use super::field::{edit_text, EditAction, EditOutcome, FormField};
use super::form_state::SectionEditor;
use crate::state::PhoneIntegration;

/// Inline warning shown while the forwarding number equals the main number
pub const FORWARDING_LOOP_WARNING: &str = "Attenzione: il numero alternativo non può essere lo stesso del numero principale, altrimenti si genera un loop e l'assistente non potrà inoltrare correttamente le chiamate.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneField {
    PbxType,
    MainCallNumber,
    ForwardingNumber,
    TechContactName,
    TechContactEmail,
    TechContactPhone,
    ExternalProvider,
}

impl PhoneField {
    pub const ALL: [PhoneField; 7] = [
        Self::PbxType,
        Self::MainCallNumber,
        Self::ForwardingNumber,
        Self::TechContactName,
        Self::TechContactEmail,
        Self::TechContactPhone,
        Self::ExternalProvider,
    ];

    pub const REQUIRED: [PhoneField; 6] = [
        Self::PbxType,
        Self::MainCallNumber,
        Self::ForwardingNumber,
        Self::TechContactName,
        Self::TechContactEmail,
        Self::TechContactPhone,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::PbxType => "pbxType",
            Self::MainCallNumber => "mainCallNumber",
            Self::ForwardingNumber => "forwardingNumber",
            Self::TechContactName => "techContactName",
            Self::TechContactEmail => "techContactEmail",
            Self::TechContactPhone => "techContactPhone",
            Self::ExternalProvider => "externalProvider",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::PbxType => "Tipo di centralino utilizzato",
            Self::MainCallNumber => "Numero principale su cui arrivano le chiamate",
            Self::ForwardingNumber => "Numero alternativo per inoltro diretto alla segreteria",
            Self::TechContactName => "Nome e cognome referente tecnico",
            Self::TechContactEmail => "Email referente tecnico",
            Self::TechContactPhone => "Numero di telefono referente tecnico",
            Self::ExternalProvider => "Società esterna che gestisce il centralino",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::PbxType => {
                "Indica il modello o il fornitore del centralino (es. Wildix, 3CX, Asterisk)"
            }
            Self::MainCallNumber => "Il numero che i pazienti chiamano per contattare il centro",
            Self::ForwardingNumber => {
                "Numero su cui l'assistente inoltra le chiamate quando necessario"
            }
            Self::TechContactName => {
                "Persona responsabile degli aspetti tecnici dell'integrazione"
            }
            Self::TechContactEmail => "Email per comunicazioni tecniche",
            Self::TechContactPhone => "Numero diretto del referente tecnico",
            Self::ExternalProvider => {
                "Se il centralino è gestito da terzi, indica il nome della società (opzionale)"
            }
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            Self::PbxType => "Es. Wildix UC&C",
            Self::MainCallNumber => "Es. +39 02 12345678",
            Self::ForwardingNumber => "Es. +39 02 87654321",
            Self::TechContactName => "Es. Luigi Bianchi",
            Self::TechContactEmail => "Es. luigi.bianchi@example.com",
            Self::TechContactPhone => "Es. +39 333 9876543",
            Self::ExternalProvider => "Es. TelcoService Srl",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::ExternalProvider)
    }

    pub fn value<'a>(&self, phone: &'a PhoneIntegration) -> &'a str {
        match self {
            Self::PbxType => &phone.pbx_type,
            Self::MainCallNumber => &phone.main_call_number,
            Self::ForwardingNumber => &phone.forwarding_number,
            Self::TechContactName => &phone.tech_contact_name,
            Self::TechContactEmail => &phone.tech_contact_email,
            Self::TechContactPhone => &phone.tech_contact_phone,
            Self::ExternalProvider => &phone.external_provider,
        }
    }

    fn value_mut<'a>(&self, phone: &'a mut PhoneIntegration) -> &'a mut String {
        match self {
            Self::PbxType => &mut phone.pbx_type,
            Self::MainCallNumber => &mut phone.main_call_number,
            Self::ForwardingNumber => &mut phone.forwarding_number,
            Self::TechContactName => &mut phone.tech_contact_name,
            Self::TechContactEmail => &mut phone.tech_contact_email,
            Self::TechContactPhone => &mut phone.tech_contact_phone,
            Self::ExternalProvider => &mut phone.external_provider,
        }
    }
}

impl SectionEditor for PhoneIntegration {
    fn fields(&self) -> Vec<FormField> {
        PhoneField::ALL
            .iter()
            .map(|f| {
                let field = FormField::text(f.label(), f.value(self), f.placeholder())
                    .describe(f.description());
                if f.is_required() {
                    field.required()
                } else {
                    field
                }
            })
            .collect()
    }

    fn edit(&self, index: usize, action: &EditAction) -> EditOutcome<Self> {
        let Some(field) = PhoneField::ALL.get(index) else {
            return EditOutcome::Unchanged;
        };
        let mut next = self.clone();
        if edit_text(field.value_mut(&mut next), action, false) {
            EditOutcome::Updated(next)
        } else {
            EditOutcome::Unchanged
        }
    }

    fn warnings(&self) -> Vec<&'static str> {
        if self.has_forwarding_loop() {
            vec![FORWARDING_LOOP_WARNING]
        } else {
            Vec::new()
        }
    }
}
