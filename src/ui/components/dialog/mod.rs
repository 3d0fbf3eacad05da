//! Dialog components for TUI

mod base;
mod error_dialog;
mod prompt_dialog;

pub use error_dialog::render_error_dialog;
pub use prompt_dialog::render_prompt_dialog;
