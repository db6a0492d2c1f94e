#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod cli;

use std::io::{self, stdout};
use std::sync::Arc;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use fcg::client::HttpTransport;
use fcg::logging::{LogConfig, init_logging};
use fcg::tui::{App, AppError};

use crate::cli::Cli;

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config().map_err(AppError::from)?;
    init_logging(&LogConfig::from_config(&config).map_err(AppError::from)?)?;
    info!(server = %config.server_url, "starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let transport = HttpTransport::new(&config.server_url).map_err(AppError::from)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(
        Arc::new(transport),
        runtime.handle().clone(),
        config.server_url.clone(),
    );
    let result = app.run(&mut terminal);

    let restore_result = restore_terminal();
    info!("exiting");
    match result {
        Err(e) => Err(e.into()),
        Ok(()) => restore_result.map_err(Into::into),
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
