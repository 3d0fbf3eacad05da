//! Section registry
//!
//! The wizard walks these sections in order; the order defines both
//! navigation and the order sections are validated in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of the form-data slice owned by a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    CenterInfo,
    BookingFlow,
    CallForwarding,
    PhoneIntegration,
    Notifications,
}

impl SectionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CenterInfo => "centerInfo",
            Self::BookingFlow => "bookingFlow",
            Self::CallForwarding => "callForwarding",
            Self::PhoneIntegration => "phoneIntegration",
            Self::Notifications => "notifications",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// 1-based position
    pub id: usize,
    pub title: &'static str,
    pub key: SectionKey,
}

pub const SECTIONS: [Section; 5] = [
    Section {
        id: 1,
        title: "Informazioni del centro",
        key: SectionKey::CenterInfo,
    },
    Section {
        id: 2,
        title: "Flusso di prenotazione",
        key: SectionKey::BookingFlow,
    },
    Section {
        id: 3,
        title: "Inoltro chiamata",
        key: SectionKey::CallForwarding,
    },
    Section {
        id: 4,
        title: "Integrazione telefonica",
        key: SectionKey::PhoneIntegration,
    },
    Section {
        id: 5,
        title: "Notifiche",
        key: SectionKey::Notifications,
    },
];

pub const SECTION_COUNT: usize = SECTIONS.len();

/// Look up a section by its 1-based id
pub fn section(id: usize) -> Option<&'static Section> {
    id.checked_sub(1).and_then(|index| SECTIONS.get(index))
}

/// Look up the section owning a data key
pub fn section_for_key(key: SectionKey) -> &'static Section {
    match key {
        SectionKey::CenterInfo => &SECTIONS[0],
        SectionKey::BookingFlow => &SECTIONS[1],
        SectionKey::CallForwarding => &SECTIONS[2],
        SectionKey::PhoneIntegration => &SECTIONS[3],
        SectionKey::Notifications => &SECTIONS[4],
    }
}
