//! Form field value objects

use crate::state::{Attachment, AttachmentSlot};

/// Name and formatted size of an attached file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub size: String,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text {
        value: String,
        multiline: bool,
        placeholder: &'static str,
    },
    Checkbox(bool),
    Radio(bool),
    File {
        slot: AttachmentSlot,
        file: Option<FileSummary>,
    },
}

/// A single control of a section editor, with its current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub description: Option<&'static str>,
    /// Heading shared by consecutive checkbox/radio fields
    pub group: Option<&'static str>,
    pub required: bool,
    pub value: FieldValue,
}

impl FormField {
    fn with_value(label: impl Into<String>, value: FieldValue) -> Self {
        Self {
            label: label.into(),
            description: None,
            group: None,
            required: false,
            value,
        }
    }

    /// Create a single-line text field
    pub fn text(label: impl Into<String>, value: &str, placeholder: &'static str) -> Self {
        Self::with_value(
            label,
            FieldValue::Text {
                value: value.to_string(),
                multiline: false,
                placeholder,
            },
        )
    }

    /// Create a multi-line text field
    pub fn multiline(label: impl Into<String>, value: &str, placeholder: &'static str) -> Self {
        Self::with_value(
            label,
            FieldValue::Text {
                value: value.to_string(),
                multiline: true,
                placeholder,
            },
        )
    }

    pub fn checkbox(label: impl Into<String>, checked: bool) -> Self {
        Self::with_value(label, FieldValue::Checkbox(checked))
    }

    pub fn radio(label: impl Into<String>, selected: bool) -> Self {
        Self::with_value(label, FieldValue::Radio(selected))
    }

    pub fn file(slot: AttachmentSlot, attachment: Option<&Attachment>) -> Self {
        Self::with_value(
            slot.label(),
            FieldValue::File {
                slot,
                file: attachment.map(|a| FileSummary {
                    name: a.file_name().to_string(),
                    size: a.display_size(),
                }),
            },
        )
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn in_group(mut self, group: &'static str) -> Self {
        self.group = Some(group);
        self
    }

    #[cfg(test)]
    pub fn is_multiline(&self) -> bool {
        matches!(self.value, FieldValue::Text { multiline: true, .. })
    }

    #[cfg(test)]
    pub fn is_toggle(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(_) | FieldValue::Radio(_))
    }

    #[cfg(test)]
    pub fn file_slot(&self) -> Option<AttachmentSlot> {
        match self.value {
            FieldValue::File { slot, .. } => Some(slot),
            _ => None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text { value, .. } => value.clone(),
            FieldValue::Checkbox(checked) => if *checked { "[x]" } else { "[ ]" }.to_string(),
            FieldValue::Radio(selected) => if *selected { "(•)" } else { "( )" }.to_string(),
            FieldValue::File { slot, file } => match file {
                Some(f) => format!("{} ({})", f.name, f.size),
                None => slot.accept_hint(),
            },
        }
    }
}

/// A user edit aimed at one field of an editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    Backspace,
    Newline,
    Toggle,
    Attach(Attachment),
    Remove,
}

/// Result of applying an edit to a section record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome<R> {
    /// The complete replacement record
    Updated(R),
    /// The edit was refused; the message is shown to the user
    Rejected(String),
    Unchanged,
}

impl<R> EditOutcome<R> {
    pub fn map<T>(self, f: impl FnOnce(R) -> T) -> EditOutcome<T> {
        match self {
            Self::Updated(record) => EditOutcome::Updated(f(record)),
            Self::Rejected(message) => EditOutcome::Rejected(message),
            Self::Unchanged => EditOutcome::Unchanged,
        }
    }
}

/// Apply a text edit in place. Returns false when the action does not apply to text.
pub fn edit_text(value: &mut String, action: &EditAction, multiline: bool) -> bool {
    match action {
        EditAction::Insert(c) => {
            value.push(*c);
            true
        }
        EditAction::Backspace => value.pop().is_some(),
        EditAction::Newline if multiline => {
            value.push('\n');
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_text_insert_and_backspace() {
        let mut value = String::from("ab");
        assert!(edit_text(&mut value, &EditAction::Insert('c'), false));
        assert_eq!(value, "abc");
        assert!(edit_text(&mut value, &EditAction::Backspace, false));
        assert_eq!(value, "ab");
    }

    #[test]
    fn test_edit_text_backspace_on_empty_is_noop() {
        let mut value = String::new();
        assert!(!edit_text(&mut value, &EditAction::Backspace, false));
    }

    #[test]
    fn test_newline_only_in_multiline() {
        let mut value = String::new();
        assert!(!edit_text(&mut value, &EditAction::Newline, false));
        assert!(edit_text(&mut value, &EditAction::Newline, true));
        assert_eq!(value, "\n");
    }

    #[test]
    fn test_toggle_does_not_apply_to_text() {
        let mut value = String::from("x");
        assert!(!edit_text(&mut value, &EditAction::Toggle, true));
        assert_eq!(value, "x");
    }

    #[test]
    fn test_display_value_for_toggles() {
        assert_eq!(FormField::checkbox("a", true).display_value(), "[x]");
        assert_eq!(FormField::radio("a", false).display_value(), "( )");
    }

    #[test]
    fn test_file_field_shows_hint_when_empty() {
        let field = FormField::file(AttachmentSlot::Guidelines, None);
        assert_eq!(field.display_value(), "PDF, DOC, DOCX (max 10MB)");
        assert_eq!(field.file_slot(), Some(AttachmentSlot::Guidelines));
    }

    #[test]
    fn test_builder_flags() {
        let field = FormField::multiline("Note", "", "")
            .required()
            .describe("desc")
            .in_group("G");
        assert!(field.required);
        assert!(field.is_multiline());
        assert_eq!(field.description, Some("desc"));
        assert_eq!(field.group, Some("G"));
    }

    #[test]
    fn test_outcome_map() {
        let outcome: EditOutcome<u8> = EditOutcome::Updated(1);
        assert_eq!(outcome.map(|v| v + 1), EditOutcome::Updated(2));
        let rejected: EditOutcome<u8> = EditOutcome::Rejected("no".into());
        assert_eq!(rejected.map(|v| v + 1), EditOutcome::Rejected("no".into()));
    }
}
