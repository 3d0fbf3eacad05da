//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod submitted;
mod summary;
mod widgets;

use crate::app::App;
use crate::submission::StorageBackend;
use components::{render_error_dialog, render_prompt_dialog};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main draw function
pub fn draw<B: StorageBackend>(frame: &mut Frame, app: &App<B>) {
    let state = app.controller.state();
    let regions = layout::create_layout(frame.area(), !state.is_submitted);

    layout::draw_header(frame, regions.header, app);

    if state.is_submitted {
        submitted::draw(frame, regions.content);
    } else {
        layout::draw_section_tabs(frame, regions.tabs, app);
        if state.is_final_section() {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(regions.content);
            forms::draw_section_editor(frame, chunks[0], app);
            summary::draw_summary(frame, chunks[1], app);
        } else {
            forms::draw_section_editor(frame, regions.content, app);
        }
    }

    layout::draw_status_bar(frame, regions.status, app);

    // Overlays
    if let Some(prompt) = &app.prompt {
        render_prompt_dialog(frame, prompt);
    }
    if let Some(error) = app.current_error() {
        render_error_dialog(frame, error, app.errors.len() - 1);
    }
}
