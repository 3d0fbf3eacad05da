//! Error dialog component

use super::base::{key_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, text::Line, Frame};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, queued: usize) {
    let mut body: Vec<Line> = error_message.lines().map(Line::from).collect();
    if queued > 0 {
        body.push(Line::from(""));
        body.push(Line::from(format!("(+{queued} altri messaggi)")));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: "Attenzione",
            accent: Color::Red,
            body,
            hint: Some(key_hint(&[("Invio/Esc", "chiudi")])),
            max_width: 60,
        },
    );
}
