//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `editor_page`: Layout shared by the bus attribute pages

mod editor_page;
mod field_renderer;

pub use editor_page::draw_editor_page;
