//! Renders field containers as labelled rows with inline error messages.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::wizard::form::{FormField, InputKind};

const LABEL_WIDTH: usize = 24;

/// Rows a field takes up: one for the input, one more while an error is shown.
pub fn field_height(field: &FormField) -> u16 {
    if field.error().is_some() { 2 } else { 1 }
}

fn value_spans(field: &FormField, focused: bool) -> Vec<Span<'_>> {
    let Some(input) = field.input() else {
        return vec![Span::styled("-", Style::default().fg(Color::DarkGray))];
    };
    let value_style = if input.is_invalid() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let mut spans = Vec::new();
    match input.kind() {
        InputKind::Choice(_) => {
            let arrow = Style::default().fg(if focused { Color::Yellow } else { Color::DarkGray });
            spans.push(Span::styled("\u{2039} ", arrow));
            spans.push(Span::styled(input.value(), value_style));
            spans.push(Span::styled(" \u{203a}", arrow));
        }
        InputKind::File if input.value().is_empty() && !focused => {
            spans.push(Span::styled(
                "(no file)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        InputKind::Text | InputKind::File => {
            spans.push(Span::styled(input.value(), value_style));
            if focused {
                spans.push(Span::styled(
                    "\u{2588}",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
        }
    }
    spans
}

/// Renders `fields` top to bottom within `area`, highlighting the one at `focus`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(fields: &[&FormField], focus: Option<usize>, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    let rows = Layout::vertical(constraints).split(area);

    for (i, (field, row)) in fields.iter().zip(rows.iter()).enumerate() {
        let focused = focus == Some(i);
        let label_style = if field.is_invalid() {
            Style::default().fg(Color::Red)
        } else if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if focused { "> " } else { "  " };

        let mut spans = vec![Span::styled(
            format!("{marker}{:<LABEL_WIDTH$}", field.label()),
            label_style,
        )];
        spans.extend(value_spans(field, focused));

        let mut lines = vec![Line::from(spans)];
        if let Some(err) = field.error() {
            lines.push(Line::from(Span::styled(
                format!("{:width$}{err}", "", width = LABEL_WIDTH + 2),
                Style::default().fg(Color::Red),
            )));
        }
        frame.render_widget(Paragraph::new(lines), *row);
    }
}
