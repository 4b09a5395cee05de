use std::path::{Path, PathBuf};

/// Back/forward list of visited directories.
///
/// Never empty: it starts with the startup directory, and the entry at
/// `cursor` is the directory on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationHistory {
  paths: Vec<PathBuf>,
  cursor: usize,
}

impl NavigationHistory {
  pub fn new(start: PathBuf) -> Self {
    Self { paths: vec![start], cursor: 0 }
  }

  pub fn current(&self) -> &Path {
    &self.paths[self.cursor]
  }

  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn len(&self) -> usize {
    self.paths.len()
  }

  #[cfg(test)]
  pub fn paths(&self) -> &[PathBuf] {
    &self.paths
  }

  /// Drops everything after the cursor, then appends `path`.
  pub fn go_to(&mut self, path: PathBuf) {
    self.paths.truncate(self.cursor + 1);
    self.paths.push(path);
    self.cursor = self.paths.len() - 1;
  }

  pub fn back(&mut self) -> bool {
    if self.cursor > 0 {
      self.cursor -= 1;
      true
    } else {
      false
    }
  }

  pub fn forward(&mut self) -> bool {
    if self.cursor + 1 < self.paths.len() {
      self.cursor += 1;
      true
    } else {
      false
    }
  }

  pub fn can_go_back(&self) -> bool {
    self.cursor > 0
  }

  pub fn can_go_forward(&self) -> bool {
    self.cursor + 1 < self.paths.len()
  }
}
