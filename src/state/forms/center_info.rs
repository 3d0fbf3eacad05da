//! Center information editor

use super::field::{edit_text, EditAction, EditOutcome, FormField};
use super::form_state::SectionEditor;
use crate::state::CenterInfo;

/// Fields of the center information section, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterField {
    StructureName,
    Address,
    ContactName,
    ContactEmail,
    ContactPhone,
    MainPhone,
}

impl CenterField {
    pub const ALL: [CenterField; 6] = [
        Self::StructureName,
        Self::Address,
        Self::ContactName,
        Self::ContactEmail,
        Self::ContactPhone,
        Self::MainPhone,
    ];

    /// Wire name of the field, used when reporting missing fields
    pub fn name(&self) -> &'static str {
        match self {
            Self::StructureName => "structureName",
            Self::Address => "address",
            Self::ContactName => "contactName",
            Self::ContactEmail => "contactEmail",
            Self::ContactPhone => "contactPhone",
            Self::MainPhone => "mainPhone",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::StructureName => "Nome della struttura",
            Self::Address => "Indirizzo completo",
            Self::ContactName => "Nome e cognome referente operativo",
            Self::ContactEmail => "Email referente",
            Self::ContactPhone => "Numero di telefono referente",
            Self::MainPhone => "Numero principale su cui si ricevono le chiamate dei pazienti",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::StructureName => {
                "Inserisci il nome completo del centro medico o studio dentistico"
            }
            Self::Address => "Via, numero civico, città, CAP",
            Self::ContactName => "Persona responsabile della gestione quotidiana del servizio",
            Self::ContactEmail => "Indirizzo email per comunicazioni operative",
            Self::ContactPhone => "Numero diretto del referente operativo",
            Self::MainPhone => "Numero che i pazienti chiamano per prenotazioni e informazioni",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            Self::StructureName => "Es. Poliambulatorio San Marco",
            Self::Address => "Es. Via Roma 123, 20121 Milano MI",
            Self::ContactName => "Es. Mario Rossi",
            Self::ContactEmail => "Es. mario.rossi@example.com",
            Self::ContactPhone => "Es. +39 333 1234567",
            Self::MainPhone => "Es. +39 02 12345678",
        }
    }

    pub fn value<'a>(&self, info: &'a CenterInfo) -> &'a str {
        match self {
            Self::StructureName => &info.structure_name,
            Self::Address => &info.address,
            Self::ContactName => &info.contact_name,
            Self::ContactEmail => &info.contact_email,
            Self::ContactPhone => &info.contact_phone,
            Self::MainPhone => &info.main_phone,
        }
    }

    fn value_mut<'a>(&self, info: &'a mut CenterInfo) -> &'a mut String {
        match self {
            Self::StructureName => &mut info.structure_name,
            Self::Address => &mut info.address,
            Self::ContactName => &mut info.contact_name,
            Self::ContactEmail => &mut info.contact_email,
            Self::ContactPhone => &mut info.contact_phone,
            Self::MainPhone => &mut info.main_phone,
        }
    }
}

impl SectionEditor for CenterInfo {
    fn fields(&self) -> Vec<FormField> {
        CenterField::ALL
            .iter()
            .map(|f| {
                FormField::text(f.label(), f.value(self), f.placeholder())
                    .describe(f.description())
                    .required()
            })
            .collect()
    }

    fn edit(&self, index: usize, action: &EditAction) -> EditOutcome<Self> {
        let Some(field) = CenterField::ALL.get(index) else {
            return EditOutcome::Unchanged;
        };
        let mut next = self.clone();
        if edit_text(field.value_mut(&mut next), action, false) {
            EditOutcome::Updated(next)
        } else {
            EditOutcome::Unchanged
        }
    }
}
