use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::app::App;
use crate::event::InputMode;
use crate::fs::entry::display_name;
use crate::theme::Theme;

pub fn status_line(app: &App, theme: &Theme) -> Line<'static> {
  if let Some(ref msg) = app.status_message {
    return Line::from(Span::styled(format!(" {msg}"), Style::default().fg(theme.info)));
  }

  let state = &app.state;
  match app.input_mode() {
    InputMode::Command => Line::from(vec![
      Span::styled(" :", Style::default().fg(theme.cursor).add_modifier(Modifier::BOLD)),
      Span::styled(state.command.clone(), Style::default().fg(theme.file)),
      Span::styled("▌", Style::default().fg(theme.cursor)),
      Span::styled("  (: run, ; clear)", Style::default().fg(theme.text_dim)),
    ]),
    InputMode::Normal => match state.current_entry() {
      Some(path) => {
        let mut spans = vec![
          Span::styled(
            format!(" {}", display_name(path)),
            Style::default().fg(theme.file).add_modifier(Modifier::BOLD),
          ),
          Span::styled(
            format!(" {}/{}", state.cursor + 1, state.entries.len()),
            Style::default().fg(theme.text_dim),
          ),
        ];
        spans.push(Span::styled(
          format!(" | pg {}/{}", state.page + 1, state.page_count()),
          Style::default().fg(theme.text_dim),
        ));
        if !state.selected.is_empty() {
          spans.push(Span::styled(
            format!(" | {} selected", state.selected.len()),
            Style::default().fg(theme.marked),
          ));
        }
        let history = &state.history;
        if history.len() > 1 {
          let back = if history.can_go_back() { "← " } else { "" };
          let forward = if history.can_go_forward() { " →" } else { "" };
          spans.push(Span::styled(
            format!(" | {back}{}/{}{forward}", history.cursor() + 1, history.len()),
            Style::default().fg(theme.text_dim),
          ));
        }
        Line::from(spans)
      }
      None => Line::from(Span::styled(" Empty directory", Style::default().fg(theme.text_dim))),
    },
  }
}

pub fn render_status_bar(app: &App, theme: &Theme, area: Rect, buf: &mut Buffer) {
  Paragraph::new(status_line(app, theme))
    .style(Style::default().bg(theme.bg_bar))
    .render(area, buf);
}
