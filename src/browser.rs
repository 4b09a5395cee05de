use std::collections::BTreeSet;
use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::action::Action;
use crate::command::Command;
use crate::fs::entry::{self, EntryKind};
use crate::fs::lister::resolve_against;
use crate::fs::{FileSystem, FolderCache, FsError};
use crate::history::NavigationHistory;

/// Collaborators a transition may consult. The cache is shared across
/// transitions and only ever grows.
pub struct Context<'a> {
  pub fs: &'a dyn FileSystem,
  pub cache: &'a mut FolderCache,
  pub open_extensions: &'a [String],
}

/// Work the caller must carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
  /// Run the external editor on this file and wait for it to exit.
  OpenInEditor(PathBuf),
}

/// Everything on screen besides styling.
///
/// Invariants after every transition:
/// - `cursor < entries.len()` unless the listing is empty (then 0)
/// - `page == cursor / page_size`
/// - `selected` holds indices into the current `entries` only
/// - `history.current() == current_dir`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
  pub current_dir: PathBuf,
  pub entries: Vec<PathBuf>,
  pub cursor: usize,
  pub page: usize,
  pub page_size: usize,
  pub selected: BTreeSet<usize>,
  pub command: String,
  pub history: NavigationHistory,
  pub quitting: bool,
}

impl BrowserState {
  pub fn open(start: &Path, page_size: usize, ctx: &mut Context) -> Result<Self, FsError> {
    let dir = ctx.fs.resolve_dir(start)?;
    let entries = ctx.cache.get_or_populate(ctx.fs, &dir)?;
    Ok(Self {
      current_dir: dir.clone(),
      entries,
      cursor: 0,
      page: 0,
      page_size: page_size.max(1),
      selected: BTreeSet::new(),
      command: String::new(),
      history: NavigationHistory::new(dir),
      quitting: false,
    })
  }

  /// Produces the state after `action`. Once quitting, every action
  /// returns an identical state.
  pub fn apply(&self, action: &Action, ctx: &mut Context) -> (BrowserState, Option<Effect>) {
    let mut next = self.clone();
    if self.quitting {
      return (next, None);
    }
    let effect = next.step(action, ctx);
    (next, effect)
  }

  fn step(&mut self, action: &Action, ctx: &mut Context) -> Option<Effect> {
    match action {
      Action::Quit => self.quitting = true,
      Action::MoveUp => self.move_up(),
      Action::MoveDown => self.move_down(),
      Action::PageUp => self.page_up(),
      Action::PageDown => self.page_down(),
      Action::HistoryBack => self.travel(ctx, false),
      Action::HistoryForward => self.travel(ctx, true),
      Action::ToggleSelect => self.toggle_select(),
      Action::Enter => return self.enter(ctx),
      Action::CommandInput(c) => self.command.push(*c),
      Action::CommandBackspace => {
        self.command.pop();
      }
      Action::CommandSubmit => self.submit_command(ctx),
      Action::CommandCancel => self.command.clear(),
      Action::Tick | Action::None => {}
    }
    None
  }

  pub fn in_command_mode(&self) -> bool {
    !self.command.is_empty()
  }

  pub fn current_entry(&self) -> Option<&Path> {
    self.entries.get(self.cursor).map(PathBuf::as_path)
  }

  /// Indices of `entries` shown on the current page.
  pub fn page_range(&self) -> Range<usize> {
    let start = (self.page * self.page_size).min(self.entries.len());
    let end = (start + self.page_size).min(self.entries.len());
    start..end
  }

  pub fn page_count(&self) -> usize {
    self.entries.len().div_ceil(self.page_size).max(1)
  }

  fn move_up(&mut self) {
    if self.cursor > 0 {
      self.cursor -= 1;
    }
    self.page = self.cursor / self.page_size;
  }

  fn move_down(&mut self) {
    if self.cursor + 1 < self.entries.len() {
      self.cursor += 1;
    }
    self.page = self.cursor / self.page_size;
  }

  fn page_up(&mut self) {
    if self.page > 0 {
      self.page -= 1;
      self.clamp_cursor_to_page();
    }
  }

  fn page_down(&mut self) {
    if (self.page + 1) * self.page_size < self.entries.len() {
      self.page += 1;
      self.clamp_cursor_to_page();
    }
  }

  /// Keeps the cursor's row within the page, capped at the last entry.
  fn clamp_cursor_to_page(&mut self) {
    let offset = self.cursor % self.page_size;
    let last = self.entries.len().saturating_sub(1);
    self.cursor = (self.page * self.page_size + offset).min(last);
  }

  fn toggle_select(&mut self) {
    if self.cursor >= self.entries.len() {
      return;
    }
    if !self.selected.remove(&self.cursor) {
      self.selected.insert(self.cursor);
    }
  }

  fn travel(&mut self, ctx: &mut Context, forward: bool) {
    let mut history = self.history.clone();
    let moved = if forward { history.forward() } else { history.back() };
    if !moved {
      return;
    }
    let target = history.current().to_path_buf();
    match ctx.cache.get_or_populate(ctx.fs, &target) {
      Ok(entries) => {
        self.history = history;
        self.show(target, entries);
      }
      Err(e) => debug!(path = %target.display(), error = %e, "history move rejected"),
    }
  }

  fn enter(&mut self, ctx: &mut Context) -> Option<Effect> {
    let item = self.current_entry()?.to_path_buf();
    match entry::classify(ctx.fs, &item, ctx.open_extensions) {
      EntryKind::Directory => {
        self.descend(&item, ctx);
        None
      }
      EntryKind::Openable => Some(Effect::OpenInEditor(item)),
      EntryKind::Inert => None,
    }
  }

  fn descend(&mut self, target: &Path, ctx: &mut Context) {
    let dir = match ctx.fs.resolve_dir(target) {
      Ok(dir) => dir,
      Err(e) => {
        debug!(path = %target.display(), error = %e, "cannot enter directory");
        return;
      }
    };
    let entries = match ctx.cache.get_or_populate(ctx.fs, &dir) {
      Ok(entries) => entries,
      Err(e) => {
        debug!(path = %dir.display(), error = %e, "cannot list directory");
        return;
      }
    };
    self.history.go_to(dir.clone());
    self.show(dir, entries);
  }

  fn submit_command(&mut self, ctx: &mut Context) {
    let buffer = std::mem::take(&mut self.command);
    match Command::parse(&buffer) {
      Command::ChangeDir(target) => {
        let path = resolve_against(&self.current_dir, &target);
        self.descend(&path, ctx);
      }
      Command::Write => debug!("write command ignored"),
      Command::Unknown => {
        if !buffer.is_empty() {
          debug!(command = %buffer, "discarding unknown command");
        }
      }
    }
  }

  fn show(&mut self, dir: PathBuf, entries: Vec<PathBuf>) {
    self.current_dir = dir;
    self.entries = entries;
    self.cursor = 0;
    self.page = 0;
    self.selected.clear();
  }
}
