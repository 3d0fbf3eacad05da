//! Summary panel shown on the final section

use super::components::{render_button, BUTTON_HEIGHT};
use super::forms::confirmation_lines;
use crate::app::App;
use crate::state::{summarize, SummarySection};
use crate::submission::StorageBackend;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn summary_lines(sections: &[SummarySection]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in sections {
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for item in &section.items {
            let mut values = item.value.split('\n');
            lines.push(Line::from(vec![
                Span::styled(format!("  {}: ", item.label), Style::default().fg(Color::Gray)),
                Span::raw(values.next().unwrap_or_default().to_string()),
            ]));
            lines.extend(values.map(|v| Line::from(format!("    {v}"))));
        }
        lines.push(Line::from(""));
    }
    lines
}

pub fn draw_summary<B: StorageBackend>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let state = app.controller.state();

    let block = Block::default()
        .title(" Riepilogo configurazione ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(4),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .split(inner);

    let sections = summarize(app.controller.form_data());
    frame.render_widget(
        Paragraph::new(summary_lines(&sections)).wrap(Wrap { trim: false }),
        chunks[0],
    );

    let confirmation = confirmation_lines(state.final_confirmation, app.confirmation_focused());
    frame.render_widget(
        Paragraph::new(confirmation)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::TOP)),
        chunks[1],
    );

    let label = if app.is_sending() {
        "Invio in corso…"
    } else {
        "^S Invia dati e avvia configurazione"
    };
    render_button(
        frame,
        chunks[2],
        label,
        state.final_confirmation,
        state.final_confirmation && !app.is_sending(),
    );
}
