//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render a list that keeps the selected item in view.
///
/// With no selection the list stays scrolled to the top.
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected: Option<usize>) {
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}
