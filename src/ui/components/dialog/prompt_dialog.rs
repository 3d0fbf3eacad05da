//! File path prompt for upload slots

use super::base::{key_hint, render_dialog, DialogConfig};
use crate::app::FilePrompt;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

pub fn render_prompt_dialog(frame: &mut Frame, prompt: &FilePrompt) {
    let body = vec![
        Line::from(Span::styled(
            format!("Formati accettati: {}", prompt.slot.accept_hint()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from("Percorso del file:"),
        Line::from(vec![
            Span::styled(prompt.input.as_str(), Style::default().fg(Color::Cyan)),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ]),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: prompt.slot.label(),
            accent: Color::Cyan,
            body,
            hint: Some(key_hint(&[("Invio", "allega"), ("Esc", "annulla")])),
            max_width: 72,
        },
    );
}
