//! Closing screen after a successful submission

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Min(6),
            Constraint::Percentage(30),
        ])
        .split(area);

    let content = vec![
        Line::from(Span::styled(
            "Raccolta informazioni conclusa",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(
            "Grazie. Abbiamo ricevuto i dati del suo onboarding. Un referente di CiaoDott si metterà in contatto con lei per eventuali domande o chiarimenti.",
        ),
    ];

    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}
