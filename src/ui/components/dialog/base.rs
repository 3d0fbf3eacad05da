//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Title and border color
    pub accent: Color,
    /// Body lines; long lines are wrapped
    pub body: Vec<Line<'a>>,
    /// Key hint shown at the bottom
    pub hint: Option<Line<'a>>,
    pub max_width: u16,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "",
            accent: Color::White,
            body: Vec::new(),
            hint: None,
            max_width: 64,
        }
    }
}

/// Rows needed to show `text` wrapped at `width` columns
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    text.split('\n')
        .map(|line| line.chars().count().max(1).div_ceil(width) as u16)
        .sum()
}

/// Key hint line in the dialog style: keys bold, descriptions plain
pub fn key_hint<'a>(pairs: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::new();
    for (idx, (key, action)) in pairs.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {action}")));
    }
    Line::from(spans)
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let dialog_width = config.max_width.min(area.width);
    // Borders and one column of padding on each side
    let inner_width = dialog_width.saturating_sub(4);

    let body_height: u16 = config
        .body
        .iter()
        .map(|line| wrapped_height(&line.to_string(), inner_width))
        .sum();
    let hint_height = if config.hint.is_some() { 2 } else { 0 };
    let dialog_height = (body_height + hint_height + 2).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(dialog_width) / 2,
        y: area.y + area.height.saturating_sub(dialog_height) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let mut content = config.body;
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(hint);
    }

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.accent))
        .style(Style::default().bg(Color::Black));

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(block.padding(ratatui::widgets::Padding::horizontal(1)));

    frame.render_widget(dialog, dialog_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_height_counts_wrapped_rows() {
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("abcdefghij", 10), 1);
        assert_eq!(wrapped_height("abcdefghijk", 10), 2);
        assert_eq!(wrapped_height("ab\ncd", 10), 2);
    }

    #[test]
    fn test_wrapped_height_counts_chars_not_bytes() {
        assert_eq!(wrapped_height("èèèèè", 5), 1);
    }

    #[test]
    fn test_key_hint_layout() {
        let line = key_hint(&[("Invio", "allega"), ("Esc", "annulla")]);
        assert_eq!(line.to_string(), "Invio allega  Esc annulla");
    }
}
