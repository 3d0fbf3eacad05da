//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, render_section_tab, BUTTON_HEIGHT};
pub use dialog::{render_error_dialog, render_prompt_dialog};
