//! Wizard domain state

mod attachment;
mod forms;
mod records;
mod sections;
mod summary;
mod wizard_state;

pub use attachment::*;
pub use forms::*;
pub use records::*;
pub use sections::*;
pub use summary::*;
pub use wizard_state::*;
