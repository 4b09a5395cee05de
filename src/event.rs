use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::config::{Config, normalize_key_event};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
  Key(KeyEvent),
  Resize,
  Tick,
}

pub struct EventLoop {
  rx: mpsc::Receiver<Event>,
  paused: Arc<AtomicBool>,
  /// Held by the reader for the whole of each poll/read
  gate: Arc<Mutex<()>>,
}

impl EventLoop {
  pub fn new(tick_rate: Duration) -> Self {
    Self::spawn(tick_rate, |timeout| {
      if !event::poll(timeout).unwrap_or(false) {
        return Some(Event::Tick);
      }
      match event::read() {
        Ok(CrosstermEvent::Key(key)) if key.kind != KeyEventKind::Release => Some(Event::Key(key)),
        Ok(CrosstermEvent::Resize(..)) => Some(Event::Resize),
        _ => None,
      }
    })
  }

  fn spawn<F>(tick_rate: Duration, mut source: F) -> Self
  where
    F: FnMut(Duration) -> Option<Event> + Send + 'static,
  {
    let (tx, rx) = mpsc::channel();
    let paused = Arc::new(AtomicBool::new(false));
    let gate = Arc::new(Mutex::new(()));
    let pf = Arc::clone(&paused);
    let reader_gate = Arc::clone(&gate);

    thread::spawn(move || loop {
      let guard = reader_gate.lock().unwrap_or_else(|e| e.into_inner());
      // Leave the terminal alone while a child process owns it
      if pf.load(Ordering::SeqCst) {
        drop(guard);
        thread::sleep(tick_rate);
        continue;
      }
      let next = source(tick_rate);
      drop(guard);
      if let Some(event) = next {
        if tx.send(event).is_err() {
          break;
        }
      }
    });

    Self { rx, paused, gate }
  }

  pub fn next(&self) -> Result<Event> {
    Ok(self.rx.recv()?)
  }

  /// Returns once the reader is parked, so no read can race the child process.
  pub fn pause(&self) {
    self.paused.store(true, Ordering::SeqCst);
    // A poll in flight finishes within one tick
    drop(self.gate.lock().unwrap_or_else(|e| e.into_inner()));
  }

  pub fn resume(&self) {
    // Keys that arrived before the pause took effect are stale now
    while self.rx.try_recv().is_ok() {}
    self.paused.store(false, Ordering::SeqCst);
  }
}

/// Whether a command is being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
  Normal,
  Command,
}

pub fn map_key(key: KeyEvent, mode: InputMode, config: &Config) -> Action {
  let kb = normalize_key_event(key);
  let bound = config.normal_keys.get(&kb);
  let typed = match key.code {
    KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Some(c),
    _ => None,
  };

  match (mode, bound, typed) {
    // Once typing has started, letters go to the buffer even when bound
    (InputMode::Command, Some(action), Some(c)) if !is_command_key(action) => Action::CommandInput(c),
    (_, Some(action), _) => action.clone(),
    (_, None, Some(c)) => Action::CommandInput(c),
    (_, None, None) => Action::None,
  }
}

fn is_command_key(action: &Action) -> bool {
  matches!(action, Action::CommandSubmit | Action::CommandCancel | Action::CommandBackspace)
}
