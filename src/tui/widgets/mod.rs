//! Reusable TUI widgets.

pub mod form;
pub mod status_bar;
pub mod tabs;

pub use form::{draw_form, field_height};
pub use status_bar::{StatusBarContext, draw_status_bar};
pub use tabs::{draw_tabs, tab_titles};
