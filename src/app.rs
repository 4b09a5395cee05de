use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use crate::action::Action;
use crate::browser::{BrowserState, Context, Effect};
use crate::command::Command;
use crate::config::Config;
use crate::event::InputMode;
use crate::fs::{FolderCache, OsFileSystem};
use crate::opener::Editor;

/// Ticks a status message stays visible.
const STATUS_TICKS: u16 = 30;

pub struct App {
  pub state: BrowserState,
  pub cache: FolderCache,
  pub fs: OsFileSystem,
  pub open_extensions: Vec<String>,
  pub should_quit: bool,
  pub should_suspend: Option<SuspendAction>,
  pub status_message: Option<String>,
  pub status_ticks: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuspendAction {
  Editor(PathBuf),
}

impl App {
  pub fn new(root: PathBuf, config: &Config) -> Result<Self> {
    let fs = OsFileSystem::new(config.show_hidden);
    let mut cache = FolderCache::new(config.max_prewarm_depth);
    let open_extensions = config.open_extensions.clone();
    let state = {
      let mut ctx = Context { fs: &fs, cache: &mut cache, open_extensions: &open_extensions };
      BrowserState::open(&root, config.page_size, &mut ctx)?
    };
    info!(root = %state.current_dir.display(), cached = cache.len(), "browser opened");
    Ok(Self {
      state,
      cache,
      fs,
      open_extensions,
      should_quit: false,
      should_suspend: None,
      status_message: None,
      status_ticks: 0,
    })
  }

  pub fn input_mode(&self) -> InputMode {
    if self.state.in_command_mode() {
      InputMode::Command
    } else {
      InputMode::Normal
    }
  }

  pub fn update(&mut self, action: Action) {
    if action == Action::Tick {
      self.tick();
      return;
    }

    let pending = match action {
      Action::CommandSubmit => Command::parse(&self.state.command),
      _ => Command::Unknown,
    };

    let (next, effect) = {
      let mut ctx = Context { fs: &self.fs, cache: &mut self.cache, open_extensions: &self.open_extensions };
      self.state.apply(&action, &mut ctx)
    };

    if let Command::ChangeDir(target) = pending
      && next.history == self.state.history
    {
      self.set_status(format!("cd: cannot open {target}"));
    }

    self.state = next;
    self.should_quit = self.state.quitting;
    if let Some(Effect::OpenInEditor(path)) = effect {
      self.should_suspend = Some(SuspendAction::Editor(path));
    }
  }

  fn tick(&mut self) {
    if self.status_ticks > 0 {
      self.status_ticks -= 1;
    } else {
      self.status_message = None;
    }
  }

  pub fn set_status(&mut self, msg: String) {
    self.status_message = Some(msg);
    self.status_ticks = STATUS_TICKS;
  }

  pub fn show_error(&mut self, errors: Vec<String>) {
    for e in &errors {
      warn!(error = %e, "config");
    }
    self.status_message = Some(errors.join("; "));
    self.status_ticks = STATUS_TICKS * 3;
  }

  pub fn handle_suspend(&mut self) -> Option<SuspendAction> {
    self.should_suspend.take()
  }

  pub fn execute_suspend(action: &SuspendAction, editor: &Editor) -> Result<()> {
    match action {
      SuspendAction::Editor(path) => editor.open(path),
    }
  }
}
