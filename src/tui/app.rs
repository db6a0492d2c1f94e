use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::client::ChartTransport;
use crate::wizard::submission::{Completion, run_submission};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{ChartFormState, HelpState, draw_chart_form, draw_help};
use super::widgets::{StatusBarContext, draw_status_bar};

/// How long the event loop waits for input before checking for completions.
const TICK: Duration = Duration::from_millis(100);

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The finder chart request form.
    ChartForm,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    chart_form: ChartFormState,
    help: HelpState,
    transport: Arc<dyn ChartTransport>,
    runtime: Handle,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
    server_url: String,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on the [`Screen::ChartForm`] screen.
    ///
    /// Submissions are spawned on `runtime` and sent through `transport`.
    pub fn new(
        transport: Arc<dyn ChartTransport>,
        runtime: Handle,
        server_url: impl Into<String>,
    ) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::ChartForm,
            chart_form: ChartFormState::new(),
            help: HelpState::new(),
            transport,
            runtime,
            completions_tx,
            completions_rx,
            server_url: server_url.into(),
            should_quit: false,
        }
    }

    /// Main event loop: apply completions → draw → poll event → dispatch.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            self.apply_completions();
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::ChartForm => draw_chart_form(&self.chart_form, frame, main_area),
            Screen::Help => draw_help(&self.help, frame, main_area),
        }
        draw_status_bar(&self.status_context(), frame, status_area);
    }

    /// Builds the status bar context from the wizard state.
    pub fn status_context(&self) -> StatusBarContext {
        let wizard = self.chart_form.wizard();
        StatusBarContext {
            mode: wizard.mode().unwrap_or_default().to_string(),
            server: self.server_url.clone(),
            loading: wizard.is_loading(),
            last: wizard.last_resolution(),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.set_origin(self.screen);
                self.help.reset();
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::ChartForm => self.chart_form.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply_action(action);
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Submit => self.submit(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Starts a submission of the live form without waiting for it.
    fn submit(&mut self) {
        let Some((request, ticket)) = self
            .chart_form
            .wizard_mut()
            .begin_submission(self.completions_tx.clone())
        else {
            debug!("no active tab; nothing to submit");
            return;
        };
        let transport = Arc::clone(&self.transport);
        self.runtime.spawn(async move {
            run_submission(transport.as_ref(), request, ticket).await;
        });
    }

    /// Applies every completion that has arrived. Returns how many were applied.
    pub fn apply_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.chart_form.wizard_mut().finish_submission(completion);
            applied += 1;
        }
        applied
    }

    /// Waits for the next completion and applies it.
    #[cfg(test)]
    async fn await_completion(&mut self) {
        if let Some(completion) = self.completions_rx.recv().await {
            self.chart_form.wizard_mut().finish_submission(completion);
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn chart_form(&self) -> &ChartFormState {
        &self.chart_form
    }
}
