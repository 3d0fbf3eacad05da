//! Form rendering module
//!
//! - `field_renderer`: lines for a single field
//! - `editor`: the current section's editor panel

mod editor;
mod field_renderer;

pub use editor::draw_section_editor;
pub use field_renderer::confirmation_lines;
