//! In-memory filesystem for exercising navigation without touching disk.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use super::lister::{FileSystem, FsError, normalize};

#[derive(Debug, Default)]
pub struct FakeFs {
  dirs: HashMap<PathBuf, Vec<PathBuf>>,
  unreadable: RefCell<HashSet<PathBuf>>,
  aliases: HashMap<PathBuf, PathBuf>,
  list_calls: Cell<usize>,
}

impl FakeFs {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `path` as a directory whose children are `children`, in
  /// that order. Children that are not registered themselves are files.
  pub fn dir(mut self, path: &str, children: &[&str]) -> Self {
    let path = PathBuf::from(path);
    let kids = children.iter().map(|c| path.join(c)).collect();
    self.dirs.insert(path, kids);
    self
  }

  /// Makes `link` behave like a symlink to the directory `target`.
  pub fn symlink(mut self, link: &str, target: &str) -> Self {
    self.aliases.insert(PathBuf::from(link), PathBuf::from(target));
    self
  }

  pub fn deny(&self, path: &str) {
    self.unreadable.borrow_mut().insert(PathBuf::from(path));
  }

  pub fn list_calls(&self) -> usize {
    self.list_calls.get()
  }

  fn target(&self, path: &Path) -> PathBuf {
    let mut current = PathBuf::new();
    for component in normalize(path).components() {
      current.push(component);
      for _ in 0..16 {
        match self.aliases.get(&current) {
          Some(next) => current = next.clone(),
          None => break,
        }
      }
    }
    current
  }
}

impl FileSystem for FakeFs {
  fn is_dir(&self, path: &Path) -> bool {
    self.dirs.contains_key(&self.target(path))
  }

  fn list_children(&self, path: &Path) -> Result<Vec<PathBuf>, FsError> {
    self.list_calls.set(self.list_calls.get() + 1);
    let target = self.target(path);
    if self.unreadable.borrow().contains(&target) {
      return Err(FsError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
      });
    }
    let children = self
      .dirs
      .get(&target)
      .ok_or_else(|| FsError::NotFound(path.to_path_buf()))?;
    // Children of an aliased dir appear under the alias, like a real symlink
    Ok(
      children
        .iter()
        .map(|c| path.join(c.file_name().unwrap_or_default()))
        .collect(),
    )
  }

  fn resolve_dir(&self, path: &Path) -> Result<PathBuf, FsError> {
    let normalized = normalize(path);
    if !self.is_dir(&normalized) {
      return Err(FsError::NotFound(normalized));
    }
    if self.unreadable.borrow().contains(&self.target(&normalized)) {
      return Err(FsError::Io {
        path: normalized,
        source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
      });
    }
    Ok(normalized)
  }

  fn identity(&self, path: &Path) -> PathBuf {
    self.target(path)
  }
}
