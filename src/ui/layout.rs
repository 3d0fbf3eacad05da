//! Layout components (header, section tabs, status bar)

use super::components::{render_section_tab, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::SECTIONS;
use crate::submission::StorageBackend;
use crate::wizard::NoticeLevel;
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

/// Screen regions
pub struct Regions {
    pub header: Rect,
    pub tabs: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Split the screen; the tab row collapses once the wizard is submitted
pub fn create_layout(area: Rect, show_tabs: bool) -> Regions {
    let tabs_height = if show_tabs { BUTTON_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),           // Header
            Constraint::Length(tabs_height), // Section tabs
            Constraint::Min(0),              // Content
            Constraint::Length(1),           // Status bar
        ])
        .split(area);

    Regions {
        header: chunks[0],
        tabs: chunks[1],
        content: chunks[2],
        status: chunks[3],
    }
}

/// Draw the title line and, before submission, the progress gauge
pub fn draw_header<B: StorageBackend>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let state = app.controller.state();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let mut spans = vec![
        Span::styled(
            " CiaoDott ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Onboarding Centro Medico"),
    ];
    if let (Some(saved), false) = (state.last_saved, state.is_submitted) {
        spans.push(Span::styled(
            format!("  💾 Salvato {}", saved.with_timezone(&Local).format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    if state.is_submitted {
        return;
    }
    let percent = state.progress_percent();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(percent)
        .label(format!(
            "Sezione {} di {} · {}%",
            state.current_section,
            SECTIONS.len(),
            percent
        ));
    frame.render_widget(gauge, rows[1]);
}

/// Draw one tab per section, styled by its status
pub fn draw_section_tabs<B: StorageBackend>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let state = app.controller.state();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(SECTIONS.iter().map(|_| Constraint::Ratio(1, SECTIONS.len() as u32)))
        .split(area);

    for (section, chunk) in SECTIONS.iter().zip(chunks.iter()) {
        render_section_tab(
            frame,
            *chunk,
            &format!("F{}", section.id),
            section.title,
            state.section_status(section.id),
            section.id <= state.max_completed_section + 1,
        );
    }
}

/// Key hints for the current mode
fn hints<B: StorageBackend>(app: &App<B>) -> &'static str {
    let state = app.controller.state();
    if app.has_errors() {
        "Invio/Esc:chiudi"
    } else if app.prompt.is_some() {
        "Invio:allega  Esc:annulla"
    } else if state.is_submitted {
        "^R:nuova raccolta"
    } else if state.is_final_section() {
        "Tab:campo  Spazio:seleziona  ^B:indietro  ^S:invia  F1-F5:sezione"
    } else if state.current_section == 1 {
        "Tab:campo  Spazio:seleziona  ^N:continua  F1-F5:sezione"
    } else {
        "Tab:campo  Spazio:seleziona  ^N:continua  ^B:indietro  F1-F5:sezione"
    }
}

/// Draw the status bar
pub fn draw_status_bar<B: StorageBackend>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let mut spans = vec![Span::styled(
        format!(" {}", hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(notice) = &app.status {
        let color = match notice.level {
            NoticeLevel::Success => Color::Green,
            NoticeLevel::Warning => Color::Yellow,
            NoticeLevel::Error => Color::Red,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(notice.message.as_str(), Style::default().fg(color)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray)),
        area,
    );

    let quit_hint = " ^C:esci ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray)),
        quit_area,
    );
}
