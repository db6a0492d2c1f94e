//! TUI screen implementations.

pub mod chart_form;
pub mod help;

pub use chart_form::{ChartFormState, draw_chart_form};
pub use help::{HelpState, draw_help};
