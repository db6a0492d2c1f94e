//! Chart form screen: mode tabs, the shown panel and the FITS source selector.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::FitsOption;
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::{draw_form, draw_tabs, field_height};
use crate::wizard::Wizard;
use crate::wizard::form::{FormField, Input};

/// State for the chart form screen.
#[derive(Debug, Clone, Default)]
pub struct ChartFormState {
    wizard: Wizard,
    focus: usize,
}

impl ChartFormState {
    /// Creates the screen with a fresh [`Wizard`] and focus on the first field.
    pub fn new() -> Self {
        Self::with_wizard(Wizard::new())
    }

    pub fn with_wizard(wizard: Wizard) -> Self {
        Self { wizard, focus: 0 }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    /// Index of the focused field among the live fields.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Name of the focused field container.
    pub fn focused_name(&self) -> Option<&str> {
        self.wizard.live_fields().nth(self.focus).map(FormField::name)
    }

    fn focus_next(&mut self) {
        let count = self.wizard.live_field_count();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    fn focus_prev(&mut self) {
        let count = self.wizard.live_field_count();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Keeps focus inside the live form after its field set changed.
    fn clamp_focus(&mut self) {
        let count = self.wizard.live_field_count();
        self.focus = self.focus.min(count.saturating_sub(1));
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut Input)) {
        if let Some(input) = self
            .wizard
            .live_field_mut(self.focus)
            .and_then(FormField::input_mut)
        {
            edit(input);
        }
    }

    fn handle_alt(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.wizard.select_tab(index);
            }
            KeyCode::Left => self.wizard.prev_tab(),
            KeyCode::Right => self.wizard.next_tab(),
            KeyCode::Char('s') => self.wizard.select_fits_option(FitsOption::ImageSurvey),
            KeyCode::Char('c') => self.wizard.select_fits_option(FitsOption::CustomFits),
            _ => return Action::None,
        }
        self.clamp_focus();
        Action::None
    }
}

impl ScreenState for ChartFormState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers == KeyModifiers::ALT {
            return self.handle_alt(key.code);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::None;
        }

        match key.code {
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Backspace => self.edit_focused(|i| i.delete_char()),
            KeyCode::Left => self.edit_focused(|i| i.cycle_choice(false)),
            KeyCode::Right => self.edit_focused(|i| i.cycle_choice(true)),
            KeyCode::Char(ch) => self.edit_focused(|i| i.insert_char(ch)),
            KeyCode::Enter => return Action::Submit,
            KeyCode::Esc => return Action::Quit,
            _ => {}
        }
        Action::None
    }
}

fn fits_radio_line(mounted: FitsOption) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "  FITS source           ",
        Style::default().fg(Color::Gray),
    )];
    for option in FitsOption::all() {
        let (mark, style) = if *option == mounted {
            ("(\u{2022}) ", Style::default().fg(Color::Yellow))
        } else {
            ("( ) ", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!("{mark}{}   ", option.label()), style));
    }
    Line::from(spans)
}

/// Renders the chart form screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_chart_form(state: &ChartFormState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Finder Chart Generator ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let wizard = state.wizard();
    let panel_fields: Vec<&FormField> = wizard
        .panel()
        .map(|form| form.fields().iter().collect())
        .unwrap_or_default();
    let fits_fields: Vec<&FormField> = wizard.fits().view().fields().iter().collect();
    let height = |fields: &[&FormField]| fields.iter().map(|f| field_height(f)).sum::<u16>();

    let [tabs_area, panel_area, radio_area, fits_area, _, error_area, footer_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(height(&panel_fields)),
            Constraint::Length(2),
            Constraint::Length(height(&fits_fields)),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

    draw_tabs(wizard.tabs(), frame, tabs_area);

    let panel_len = panel_fields.len();
    let panel_focus = (state.focus() < panel_len).then_some(state.focus());
    let fits_focus = state.focus().checked_sub(panel_len);
    draw_form(&panel_fields, panel_focus, frame, panel_area);

    let [_, radio_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(radio_area);
    frame.render_widget(
        Paragraph::new(fits_radio_line(wizard.fits().mounted())),
        radio_row,
    );
    draw_form(&fits_fields, fits_focus, frame, fits_area);

    if let Some(err) = wizard.general_error() {
        frame.render_widget(
            Paragraph::new(Span::styled(err, Style::default().fg(Color::Red))),
            error_area,
        );
    }

    let footer = Paragraph::new(Line::from(
        "Tab: next  \u{2190}/\u{2192}: choice  Alt+1-6/\u{2190}/\u{2192}: mode  Alt+s/c: FITS  Enter: submit  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
