mod action;
mod app;
mod browser;
mod command;
mod config;
mod event;
mod fs;
mod history;
mod icons;
mod opener;
mod theme;
mod ui;

use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
  EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::{App, SuspendAction};
use crate::event::{Event, EventLoop, map_key};
use crate::opener::Editor;

fn main() -> Result<()> {
  let args: Vec<String> = std::env::args().skip(1).collect();

  let mut show_help = false;
  let mut show_version = false;
  let mut show_init = false;
  let mut show_hidden = false;
  let mut path_arg: Option<String> = None;

  for arg in &args {
    match arg.as_str() {
      "--help" | "-h" => show_help = true,
      "--version" | "-V" => show_version = true,
      "--init" => show_init = true,
      "--all" | "-a" => show_hidden = true,
      a if !a.starts_with('-') => path_arg = Some(a.to_string()),
      _ => {
        eprintln!("pgbrowse: unknown option '{arg}'");
        std::process::exit(1);
      }
    }
  }

  if show_help {
    println!(concat!(
      "pgbrowse - paged terminal file browser\n",
      "\n",
      "Usage: pgbrowse [options] [path]\n",
      "\n",
      "Options:\n",
      "  -a, --all                Show hidden files\n",
      "  --init                   Write the default config to ~/.config/pgbrowse/\n",
      "  -h, --help               Print this help message\n",
      "  -V, --version            Print version\n",
      "\n",
      "If no path is given, opens the current directory.\n",
      "Type a command and press ':' to run it (cd <path>), ';' to clear it.\n",
      "Set PGBROWSE_LOG (e.g. debug) to change the log level.",
    ));
    return Ok(());
  }

  if show_version {
    println!("pgbrowse {}", env!("CARGO_PKG_VERSION"));
    return Ok(());
  }

  if show_init {
    let config_path = match config::Config::config_path() {
      Ok(p) => p,
      Err(e) => {
        eprintln!("pgbrowse: {e}");
        std::process::exit(1);
      }
    };
    let write_config = if config_path.exists() {
      eprint!("{} already exists. Overwrite? [y/N] ", config_path.display());
      let mut answer = String::new();
      io::stdin().read_line(&mut answer).unwrap_or(0);
      answer.trim().eq_ignore_ascii_case("y")
    } else {
      true
    };
    if write_config {
      match config::Config::dump_default_config(&config_path) {
        Ok(()) => println!("{}", config_path.display()),
        Err(e) => {
          eprintln!("pgbrowse: {e}");
          std::process::exit(1);
        }
      }
    }
    return Ok(());
  }

  init_logging();

  let (mut config, config_errors) = config::Config::load();
  if show_hidden {
    config.show_hidden = true;
  }
  let editor = Editor::new(config.editor.clone());

  let root = path_arg
    .map(PathBuf::from)
    .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
  let root = std::fs::canonicalize(root)?;

  // Listing the start directory can fail, do it before touching the terminal
  let mut app = App::new(root, &config)?;
  if !config_errors.is_empty() {
    app.show_error(config_errors);
  }

  // Install panic hook that restores terminal
  let original_hook = panic::take_hook();
  panic::set_hook(Box::new(move |info| {
    let _ = restore_terminal();
    original_hook(info);
  }));

  setup_terminal()?;
  let backend = CrosstermBackend::new(io::stdout());
  let mut terminal = Terminal::new(backend)?;

  let events = EventLoop::new(Duration::from_millis(config.tick_rate_ms));

  loop {
    terminal.draw(|frame| ui::draw(frame, &app, &config))?;

    match events.next()? {
      Event::Key(key) => {
        let action = map_key(key, app.input_mode(), &config);
        app.update(action);
      }
      // The next draw picks up the new size
      Event::Resize => {}
      Event::Tick => app.update(action::Action::Tick),
    }

    if let Some(suspend) = app.handle_suspend() {
      events.pause();
      restore_terminal()?;
      let (resumed, outcome) = suspend_and_resume(terminal, &suspend, &editor)?;
      terminal = resumed;
      events.resume();
      if let Err(e) = outcome {
        warn!(error = %format!("{e:#}"), "editor failed");
        app.set_status(format!("{e:#}"));
      }
    }

    if app.should_quit {
      break;
    }
  }

  restore_terminal()?;
  info!(cached = app.cache.len(), "session ended");
  Ok(())
}

/// Logs go to a file so they never draw over the UI.
fn init_logging() {
  let Some(dir) = dirs::cache_dir().map(|d| d.join("pgbrowse")) else {
    return;
  };
  if std::fs::create_dir_all(&dir).is_err() {
    return;
  }
  let Ok(file) = std::fs::OpenOptions::new()
    .create(true)
    .append(true)
    .open(dir.join("pgbrowse.log"))
  else {
    return;
  };

  let filter = EnvFilter::try_from_env("PGBROWSE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .init();
}

fn setup_terminal() -> Result<()> {
  enable_raw_mode()?;
  execute!(io::stdout(), EnterAlternateScreen)?;
  Ok(())
}

fn restore_terminal() -> Result<()> {
  disable_raw_mode()?;
  execute!(io::stdout(), LeaveAlternateScreen)?;
  Ok(())
}

fn suspend_and_resume(
  terminal: Terminal<CrosstermBackend<io::Stdout>>,
  action: &SuspendAction,
  editor: &Editor,
) -> Result<(Terminal<CrosstermBackend<io::Stdout>>, Result<()>)> {
  drop(terminal);
  let outcome = App::execute_suspend(action, editor);

  setup_terminal()?;

  // Drain stale keystrokes buffered in the TTY while the editor ran
  while crossterm::event::poll(Duration::ZERO).unwrap_or(false) {
    let _ = crossterm::event::read();
  }

  let backend = CrosstermBackend::new(io::stdout());
  let terminal = Terminal::new(backend)?;
  Ok((terminal, outcome))
}
