//! Section editor panel

use super::field_renderer::field_lines;
use crate::app::App;
use crate::submission::StorageBackend;
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

const INTRO_TITLE: &str = "Tempo di compilazione: 5–7 minuti";
const INTRO_TEXT: &str = "Queste informazioni sono fondamentali per configurare correttamente l'assistente virtuale e attivare il servizio senza ritardi.";

/// Draw the current section's fields, with notices above them
pub fn draw_section_editor<B: StorageBackend>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let state = app.controller.state();
    let section = state.current();
    let record = app.current_record();

    let block = Block::default()
        .title(format!(" {}. {} ", section.id, section.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut notices: Vec<Line> = Vec::new();
    if let Some(error) = &state.submission_error {
        notices.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
    }
    if section.id == 1 {
        notices.push(Line::from(Span::styled(
            INTRO_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        notices.push(Line::from(Span::styled(
            INTRO_TEXT,
            Style::default().fg(Color::DarkGray),
        )));
    }
    for warning in record.warnings() {
        notices.push(Line::from(Span::styled(
            format!("⚠ {warning}"),
            Style::default().fg(Color::Yellow),
        )));
    }

    let notice_height = if notices.is_empty() {
        0
    } else {
        (notices.len() as u16 + 2).min(inner.height / 3)
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(notice_height), Constraint::Min(0)])
        .split(inner);

    if !notices.is_empty() {
        frame.render_widget(
            Paragraph::new(notices)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::BOTTOM)),
            chunks[0],
        );
    }

    let fields = record.fields();
    let focus = app.focus.index();
    let mut previous_group = None;
    let items: Vec<ListItem> = fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let show_group = field.group.is_some() && field.group != previous_group;
            previous_group = field.group;
            ListItem::new(field_lines(field, show_group, idx == focus && app.prompt.is_none()))
        })
        .collect();

    let selected = (focus < fields.len()).then_some(focus);
    let list = List::new(items).highlight_symbol("▶ ");
    render_scrollable_list(frame, chunks[1], list, selected);
}
