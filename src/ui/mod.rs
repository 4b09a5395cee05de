pub mod listing;
pub mod status_bar;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use ratatui::Frame;

use crate::app::App;
use crate::browser::BrowserState;
use crate::config::Config;
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, app: &App, config: &Config) {
  let area = frame.area();
  let theme = &config.theme;

  // Vertical layout: header, listing, status bar
  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(1),   // listing
      Constraint::Length(1), // status bar
    ])
    .split(area);

  render_header(&app.state, theme, chunks[0], frame.buffer_mut());
  listing::render_listing(&app.state, &app.fs, theme, chunks[1], frame.buffer_mut());
  status_bar::render_status_bar(app, theme, chunks[2], frame.buffer_mut());
}

/// `Dir: <name> | Cmd: <buffer> | Pg: <page>`
pub fn header_line(state: &BrowserState, theme: &Theme) -> Line<'static> {
  let dir = state
    .current_dir
    .file_name()
    .map(|n| n.to_string_lossy().to_string())
    .unwrap_or_else(|| state.current_dir.display().to_string());
  let style = Style::default().fg(theme.header).add_modifier(Modifier::BOLD);
  Line::from(vec![
    Span::styled(format!("Dir: {dir}"), style),
    Span::styled(" | ", Style::default().fg(theme.text_dim)),
    Span::styled(format!("Cmd: {}", state.command), style),
    Span::styled(" | ", Style::default().fg(theme.text_dim)),
    Span::styled(format!("Pg: {}", state.page + 1), style),
  ])
}

fn render_header(state: &BrowserState, theme: &Theme, area: Rect, buf: &mut Buffer) {
  Paragraph::new(header_line(state, theme))
    .style(Style::default().bg(theme.bg_bar))
    .render(area, buf);
}
