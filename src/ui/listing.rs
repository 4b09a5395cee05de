use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::browser::BrowserState;
use crate::fs::FileSystem;
use crate::fs::entry::display_name;
use crate::icons::file_icon;
use crate::theme::Theme;

/// Cuts `s` to at most `max` terminal columns, marking the cut with an ellipsis.
pub fn truncate_to_width(s: &str, max: usize) -> String {
  if s.width() <= max {
    return s.to_string();
  }
  if max == 0 {
    return String::new();
  }
  let budget = max - 1;
  let mut out = String::new();
  let mut used = 0;
  for c in s.chars() {
    let w = c.width().unwrap_or(0);
    if used + w > budget {
      break;
    }
    out.push(c);
    used += w;
  }
  out.push('…');
  out
}

/// One row: `<cursor> [<mark>] <icon> <name>`.
pub fn entry_line(state: &BrowserState, fs: &dyn FileSystem, index: usize, theme: &Theme, width: usize) -> Line<'static> {
  let path = &state.entries[index];
  let is_dir = fs.is_dir(path);
  let name = display_name(path);
  let icon = file_icon(&name, is_dir);

  let is_cursor = index == state.cursor;
  let cursor = if is_cursor { "▶" } else { " " };
  let mark = if state.selected.contains(&index) { "✔" } else { " " };

  let prefix_width = cursor.width() + mark.width() + icon.glyph.width() + 5;
  let name = truncate_to_width(&name, width.saturating_sub(prefix_width));

  let mut name_style = Style::default().fg(if is_dir { theme.directory } else { theme.file });
  if is_cursor {
    name_style = name_style.add_modifier(Modifier::BOLD);
  }

  Line::from(vec![
    Span::styled(cursor, Style::default().fg(theme.cursor)),
    Span::raw(" ["),
    Span::styled(mark, Style::default().fg(theme.marked)),
    Span::raw("] "),
    Span::styled(icon.glyph, Style::default().fg(icon.color)),
    Span::raw(" "),
    Span::styled(name, name_style),
  ])
}

pub fn render_listing(state: &BrowserState, fs: &dyn FileSystem, theme: &Theme, area: Rect, buf: &mut Buffer) {
  let width = area.width as usize;
  let lines: Vec<Line> = if state.entries.is_empty() {
    vec![Line::from(Span::styled("  (empty)", Style::default().fg(theme.text_dim)))]
  } else {
    state
      .page_range()
      .map(|i| entry_line(state, fs, i, theme, width))
      .collect()
  };

  Paragraph::new(lines).render(area, buf);
}
