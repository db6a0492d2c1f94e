//! Status bar widget: active mode, server and submission state on one line.

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::wizard::submission::Resolution;

/// Data passed to the status bar widget; decoupled from `Wizard` so it can be built in tests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// The active mode name, e.g. `imaging`.
    pub mode: String,
    /// The server requests go to.
    pub server: String,
    /// Whether any submission is in flight.
    pub loading: bool,
    /// The most recent resolution and when it happened.
    pub last: Option<(Resolution, DateTime<Utc>)>,
}

fn outcome_text(resolution: Resolution) -> (&'static str, Color) {
    match resolution {
        Resolution::Success => ("chart requested", Color::Green),
        Resolution::FieldErrors => ("please fix the highlighted fields", Color::Yellow),
        Resolution::GeneralError => ("request failed", Color::Red),
    }
}

/// Renders a one-line status bar.
///
/// Display format: `imaging @ http://localhost:8000  Submitting…` while a
/// request is in flight, otherwise the last outcome with its UTC time.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);

    let mut spans = vec![
        Span::styled(ctx.mode.clone(), cyan),
        Span::styled(" @ ", Style::default().fg(Color::DarkGray)),
        Span::styled(ctx.server.clone(), cyan),
        Span::raw("  "),
    ];

    if ctx.loading {
        spans.push(Span::styled(
            "Submitting\u{2026}",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some((resolution, at)) = ctx.last {
        let (text, color) = outcome_text(resolution);
        spans.push(Span::styled(
            format!("{text} at {}", at.format("%H:%M:%S UTC")),
            Style::default().fg(color),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_status_bar(ctx: &StatusBarContext, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn ctx() -> StatusBarContext {
        StatusBarContext {
            mode: "imaging".into(),
            server: "http://localhost:8000".into(),
            loading: false,
            last: None,
        }
    }

    #[test]
    fn renders_mode_and_server() {
        let output = render_status_bar(&ctx(), 80);
        assert!(output.contains("imaging @ http://localhost:8000"));
    }

    #[test]
    fn renders_loading() {
        let ctx = StatusBarContext {
            loading: true,
            ..ctx()
        };
        let output = render_status_bar(&ctx, 80);
        assert!(output.contains("Submitting"));
    }

    #[test]
    fn renders_last_outcome_with_time() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 21, 4, 5).unwrap();
        let ctx = StatusBarContext {
            last: Some((Resolution::Success, at)),
            ..ctx()
        };
        let output = render_status_bar(&ctx, 80);
        assert!(output.contains("chart requested at 21:04:05 UTC"));
    }

    #[test]
    fn loading_hides_last_outcome() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 21, 4, 5).unwrap();
        let ctx = StatusBarContext {
            loading: true,
            last: Some((Resolution::GeneralError, at)),
            ..ctx()
        };
        let output = render_status_bar(&ctx, 80);
        assert!(!output.contains("request failed"));
    }

    #[test]
    fn outcome_text_per_resolution() {
        assert_eq!(outcome_text(Resolution::Success).1, Color::Green);
        assert_eq!(outcome_text(Resolution::FieldErrors).1, Color::Yellow);
        assert_eq!(outcome_text(Resolution::GeneralError).1, Color::Red);
    }
}
