//! Button component for TUI

use crate::state::SectionStatus;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a section tab: function key, title and a check mark once passed
pub fn render_section_tab(
    frame: &mut Frame,
    area: Rect,
    key: &str,
    title: &str,
    status: SectionStatus,
    is_reachable: bool,
) {
    let (border, text) = match status {
        SectionStatus::Current => (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        SectionStatus::Completed => (
            Style::default().fg(Color::Green),
            Style::default().fg(Color::Green),
        ),
        SectionStatus::Pending if is_reachable => (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Gray),
        ),
        SectionStatus::Pending => (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let mark = if status == SectionStatus::Completed {
        " ✓"
    } else {
        ""
    };
    let paragraph = Paragraph::new(format!(" {key} {title}{mark} ")).style(text);
    let block = Block::default().borders(Borders::ALL).border_style(border);

    frame.render_widget(paragraph.block(block), area);
}
