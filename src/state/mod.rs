//! Application state module

mod app_state;
mod editor;
mod forms;
mod submission;

pub use app_state::*;
pub use editor::*;
pub use forms::*;
#[cfg(test)]
pub use submission::SubmitStatus;
