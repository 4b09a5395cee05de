use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

/// External program that files are handed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
  pub command: String,
}

impl Editor {
  pub fn new(command: impl Into<String>) -> Self {
    Self { command: command.into() }
  }

  /// Runs the editor on `path` with the terminal's stdio and waits for it.
  /// A non-zero exit is not an error, only failing to start is.
  pub fn open(&self, path: &Path) -> Result<()> {
    let status = Command::new(&self.command)
      .arg(path)
      .status()
      .with_context(|| format!("failed to start {}", self.command))?;
    tracing::debug!(editor = %self.command, path = %path.display(), %status, "editor exited");
    Ok(())
  }
}
