//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const CURSOR: &str = "▌";
const INDENT: &str = "    ";
const CONFIRMATION_LABEL: &str = "Confermo che le informazioni inserite sono corrette e autorizzo CiaoDott ad avviare la configurazione dell'assistente virtuale.";

fn label_style(is_active: bool) -> Style {
    if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Lines for one editor field.
///
/// `show_group` prints the field's group heading above it; the editor sets it
/// on the first field of each group.
pub fn field_lines(field: &FormField, show_group: bool, is_active: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let (true, Some(group)) = (show_group, field.group) {
        lines.push(Line::from(Span::styled(
            group,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }

    match &field.value {
        FieldValue::Checkbox(_) | FieldValue::Radio(_) => {
            lines.push(Line::from(vec![
                Span::styled(field.display_value(), label_style(is_active)),
                Span::raw(" "),
                Span::styled(field.label.clone(), label_style(is_active)),
            ]));
            push_description(&mut lines, field);
        }
        FieldValue::Text {
            value, placeholder, ..
        } => {
            lines.push(label_line(field, is_active));
            push_description(&mut lines, field);

            if value.is_empty() {
                let mut spans = vec![Span::raw(INDENT)];
                if is_active {
                    spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
                }
                spans.push(Span::styled(*placeholder, dim()));
                lines.push(Line::from(spans));
            } else {
                let mut value_lines: Vec<Line<'static>> = value
                    .split('\n')
                    .map(|l| Line::from(vec![Span::raw(INDENT), Span::raw(l.to_string())]))
                    .collect();
                if is_active {
                    if let Some(last) = value_lines.last_mut() {
                        last.spans
                            .push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
                    }
                }
                lines.extend(value_lines);
            }
        }
        FieldValue::File { slot, file } => {
            lines.push(label_line(field, is_active));
            push_description(&mut lines, field);
            let value = match file {
                Some(f) => Span::styled(
                    format!("{INDENT}📎 {} ({})", f.name, f.size),
                    Style::default().fg(Color::Green),
                ),
                None => Span::styled(
                    format!("{INDENT}Nessun file · {}", slot.accept_hint()),
                    dim(),
                ),
            };
            lines.push(Line::from(value));
            if is_active {
                let hint = if file.is_some() {
                    "Invio: sostituisci  Canc: rimuovi"
                } else {
                    "Invio: scegli file"
                };
                lines.push(Line::from(Span::styled(format!("{INDENT}{hint}"), dim())));
            }
        }
    }

    lines.push(Line::from(""));
    lines
}

fn label_line(field: &FormField, is_active: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(field.label.clone(), label_style(is_active))];
    if field.required {
        spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    Line::from(spans)
}

fn push_description(lines: &mut Vec<Line<'static>>, field: &FormField) {
    if let Some(description) = field.description {
        lines.push(Line::from(Span::styled(
            format!("{INDENT}{description}"),
            dim(),
        )));
    }
}

/// Lines for the final confirmation checkbox
pub fn confirmation_lines(checked: bool, is_active: bool) -> Vec<Line<'static>> {
    let marker = if checked { "[x]" } else { "[ ]" };
    vec![Line::from(vec![
        Span::styled(marker, label_style(is_active)),
        Span::raw(" "),
        Span::styled(CONFIRMATION_LABEL, label_style(is_active)),
    ])]
}
