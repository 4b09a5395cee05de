use std::path::{Component, Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
  #[error("{} does not exist", .0.display())]
  NotFound(PathBuf),
  #[error("{} is not a directory", .0.display())]
  NotADirectory(PathBuf),
  #[error("{}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl FsError {
  fn io(path: &Path, source: std::io::Error) -> Self {
    if source.kind() == std::io::ErrorKind::NotFound {
      FsError::NotFound(path.to_path_buf())
    } else {
      FsError::Io { path: path.to_path_buf(), source }
    }
  }
}

/// Filesystem calls the browser depends on. Everything takes an absolute
/// path; nothing reads or changes the process working directory.
pub trait FileSystem {
  fn is_dir(&self, path: &Path) -> bool;

  /// Immediate children of `path`, in an order that is stable while the
  /// directory is unchanged.
  fn list_children(&self, path: &Path) -> Result<Vec<PathBuf>, FsError>;

  /// Normalized absolute form of a directory the browser can enter.
  fn resolve_dir(&self, path: &Path) -> Result<PathBuf, FsError>;

  /// Key used to detect that two paths are the same directory.
  fn identity(&self, path: &Path) -> PathBuf {
    path.to_path_buf()
  }
}

#[derive(Debug, Clone, Default)]
pub struct OsFileSystem {
  pub show_hidden: bool,
}

impl OsFileSystem {
  pub fn new(show_hidden: bool) -> Self {
    Self { show_hidden }
  }
}

fn is_hidden(path: &Path) -> bool {
  path
    .file_name()
    .is_some_and(|n| n.to_string_lossy().starts_with('.'))
}

impl FileSystem for OsFileSystem {
  fn is_dir(&self, path: &Path) -> bool {
    path.is_dir()
  }

  fn list_children(&self, path: &Path) -> Result<Vec<PathBuf>, FsError> {
    let read_dir = std::fs::read_dir(path).map_err(|e| FsError::io(path, e))?;

    let mut children: Vec<PathBuf> = read_dir
      .flatten()
      .map(|entry| entry.path())
      .filter(|p| self.show_hidden || !is_hidden(p))
      .collect();

    // Byte order on the name, directories and files interleaved
    children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(children)
  }

  fn resolve_dir(&self, path: &Path) -> Result<PathBuf, FsError> {
    let resolved = path.canonicalize().map_err(|e| FsError::io(path, e))?;
    if !resolved.is_dir() {
      return Err(FsError::NotADirectory(resolved));
    }
    // Entering requires being able to list it
    std::fs::read_dir(&resolved).map_err(|e| FsError::io(&resolved, e))?;
    Ok(resolved)
  }

  fn identity(&self, path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
  }
}

/// Lexically resolves `.` and `..` without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
  let mut out = PathBuf::new();
  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        if !out.pop() && !out.has_root() {
          out.push(component);
        }
      }
      other => out.push(other),
    }
  }
  if out.as_os_str().is_empty() {
    out.push(Component::RootDir);
  }
  out
}

/// Expands a leading `~`, joins relative paths onto `base` and folds
/// `.`/`..` lexically.
pub fn resolve_against(base: &Path, input: &str) -> PathBuf {
  let expanded = if input == "~" {
    dirs::home_dir()
  } else if let Some(rest) = input.strip_prefix("~/") {
    dirs::home_dir().map(|h| h.join(rest))
  } else {
    None
  };
  let path = expanded.unwrap_or_else(|| PathBuf::from(input));
  if path.is_absolute() {
    normalize(&path)
  } else {
    normalize(&base.join(path))
  }
}
