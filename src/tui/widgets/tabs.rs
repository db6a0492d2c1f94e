//! Tab bar widget, one title per generation mode.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Tabs;

use crate::wizard::tabs::TabBar;

/// Titles as shown, prefixed with the `Alt+<n>` shortcut number.
pub fn tab_titles(tabs: &TabBar) -> Vec<String> {
    tabs.tabs()
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.label()))
        .collect()
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_tabs(tabs: &TabBar, frame: &mut Frame, area: Rect) {
    let titles: Vec<Line> = tab_titles(tabs).into_iter().map(Line::from).collect();
    let widget = Tabs::new(titles)
        .select(tabs.active_index().unwrap_or(0))
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|");
    frame.render_widget(widget, area);
}
