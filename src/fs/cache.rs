use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::lister::{FileSystem, FsError};

/// Levels below a freshly listed directory that get pre-warmed.
pub const DEFAULT_PREWARM_DEPTH: usize = 8;

/// Directory listings keyed by absolute path.
///
/// A populated key is never refreshed: entering a directory that was
/// listed before shows the listing from that time. A miss lists the
/// directory and then walks its subdirectories (up to `max_depth` levels,
/// each resolved directory at most once) so later descents are served
/// from memory.
#[derive(Debug)]
pub struct FolderCache {
  folders: HashMap<PathBuf, Vec<PathBuf>>,
  max_depth: usize,
}

impl Default for FolderCache {
  fn default() -> Self {
    Self::new(DEFAULT_PREWARM_DEPTH)
  }
}

impl FolderCache {
  pub fn new(max_depth: usize) -> Self {
    Self { folders: HashMap::new(), max_depth }
  }

  #[cfg(test)]
  pub fn contains(&self, path: &Path) -> bool {
    self.folders.contains_key(path)
  }

  pub fn len(&self) -> usize {
    self.folders.len()
  }

  pub fn get_or_populate(&mut self, fs: &dyn FileSystem, path: &Path) -> Result<Vec<PathBuf>, FsError> {
    if let Some(children) = self.folders.get(path) {
      trace!(path = %path.display(), "folder cache hit");
      return Ok(children.clone());
    }

    let children = fs.list_children(path)?;
    trace!(path = %path.display(), count = children.len(), "folder cache miss");
    self.folders.insert(path.to_path_buf(), children.clone());

    let mut visited = HashSet::new();
    visited.insert(fs.identity(path));
    let before = self.folders.len();
    self.prewarm(fs, &children, 1, &mut visited);
    debug!(
      path = %path.display(),
      prewarmed = self.folders.len() - before,
      "populated folder cache"
    );

    Ok(children)
  }

  fn prewarm(&mut self, fs: &dyn FileSystem, children: &[PathBuf], depth: usize, visited: &mut HashSet<PathBuf>) {
    if depth > self.max_depth {
      return;
    }
    for child in children {
      if !fs.is_dir(child) || self.folders.contains_key(child) {
        continue;
      }
      // Symlink loops resolve to a directory already on this walk
      if !visited.insert(fs.identity(child)) {
        continue;
      }
      match fs.list_children(child) {
        Ok(grandchildren) => {
          self.folders.insert(child.clone(), grandchildren.clone());
          self.prewarm(fs, &grandchildren, depth + 1, visited);
        }
        // Left unpopulated so a later visit lists it again and can fail properly
        Err(e) => debug!(path = %child.display(), error = %e, "skipping pre-warm"),
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fs::fake::FakeFs;

  fn tree() -> FakeFs {
    FakeFs::new()
      .dir("/root", &["a.txt", "sub"])
      .dir("/root/sub", &["deep", "b.md"])
      .dir("/root/sub/deep", &["c.go"])
  }

  #[test]
  fn test_miss_lists_and_prewarms_subtree() {
    let fake = tree();
    let mut cache = FolderCache::default();
    let entries = cache.get_or_populate(&fake, Path::new("/root")).unwrap();
    assert_eq!(entries, vec![PathBuf::from("/root/a.txt"), PathBuf::from("/root/sub")]);
    assert!(cache.contains(Path::new("/root/sub")));
    assert!(cache.contains(Path::new("/root/sub/deep")));
    assert_eq!(cache.len(), 3);
    assert_eq!(fake.list_calls(), 3);
  }

  #[test]
  fn test_second_lookup_does_not_touch_filesystem() {
    let fake = tree();
    let mut cache = FolderCache::default();
    let first = cache.get_or_populate(&fake, Path::new("/root")).unwrap();
    let calls = fake.list_calls();
    let second = cache.get_or_populate(&fake, Path::new("/root")).unwrap();
    assert_eq!(first, second);
    assert_eq!(fake.list_calls(), calls);
  }

  #[test]
  fn test_descent_after_prewarm_is_cache_only() {
    let fake = tree();
    let mut cache = FolderCache::default();
    cache.get_or_populate(&fake, Path::new("/root")).unwrap();
    let calls = fake.list_calls();
    let sub = cache.get_or_populate(&fake, Path::new("/root/sub")).unwrap();
    assert_eq!(sub.len(), 2);
    assert_eq!(fake.list_calls(), calls);
  }

  #[test]
  fn test_failed_listing_stores_nothing() {
    let fake = tree();
    let mut cache = FolderCache::default();
    assert!(cache.get_or_populate(&fake, Path::new("/missing")).is_err());
    assert_eq!(cache.len(), 0);
  }

  #[test]
  fn test_unreadable_child_is_not_cached() {
    let fake = tree();
    fake.deny("/root/sub");
    let mut cache = FolderCache::default();
    cache.get_or_populate(&fake, Path::new("/root")).unwrap();
    assert!(cache.contains(Path::new("/root")));
    assert!(!cache.contains(Path::new("/root/sub")));
    assert!(cache.get_or_populate(&fake, Path::new("/root/sub")).is_err());
  }

  #[test]
  fn test_depth_bound_stops_prewarm() {
    let fake = FakeFs::new()
      .dir("/r", &["a"])
      .dir("/r/a", &["b"])
      .dir("/r/a/b", &["c"])
      .dir("/r/a/b/c", &[]);
    let mut cache = FolderCache::new(2);
    cache.get_or_populate(&fake, Path::new("/r")).unwrap();
    assert!(cache.contains(Path::new("/r/a")));
    assert!(cache.contains(Path::new("/r/a/b")));
    assert!(!cache.contains(Path::new("/r/a/b/c")));
  }

  #[test]
  fn test_zero_depth_is_lazy() {
    let fake = tree();
    let mut cache = FolderCache::new(0);
    cache.get_or_populate(&fake, Path::new("/root")).unwrap();
    assert_eq!(cache.len(), 1);
    assert_eq!(fake.list_calls(), 1);
  }

  #[test]
  fn test_symlink_cycle_terminates() {
    let fake = FakeFs::new()
      .dir("/r", &["loop", "x"])
      .dir("/r/x", &["back"])
      .symlink("/r/loop", "/r")
      .symlink("/r/x/back", "/r/x");
    let mut cache = FolderCache::new(64);
    let entries = cache.get_or_populate(&fake, Path::new("/r")).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(cache.contains(Path::new("/r/x")));
    assert!(!cache.contains(Path::new("/r/loop")));
    assert!(!cache.contains(Path::new("/r/x/back")));
  }

  #[test]
  fn test_cached_listing_is_not_refreshed() {
    let fake = tree();
    let mut cache = FolderCache::default();
    let stale = cache.get_or_populate(&fake, Path::new("/root")).unwrap();
    let changed = FakeFs::new().dir("/root", &["other.txt"]);
    assert_eq!(cache.get_or_populate(&changed, Path::new("/root")).unwrap(), stale);
    assert_eq!(changed.list_calls(), 0);
  }
}
