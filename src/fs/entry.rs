use std::path::Path;

use super::lister::FileSystem;

/// Extensions opened in the editor when no list is configured.
pub const DEFAULT_OPEN_EXTENSIONS: &[&str] = &[
  "txt", "md", "go", "py", "js", "json", "html", "css", "java", "cpp", "h", "sh", "rb", "c", "jsx",
  "tsx", "astro",
];

/// How the browser treats an entry on Enter. Derived from the path every
/// time it is needed, never stored alongside the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
  Directory,
  Openable,
  Inert,
}

pub fn classify(fs: &dyn FileSystem, path: &Path, open_extensions: &[String]) -> EntryKind {
  if fs.is_dir(path) {
    EntryKind::Directory
  } else if is_openable(path, open_extensions) {
    EntryKind::Openable
  } else {
    EntryKind::Inert
  }
}

/// Suffix match on the file name, case-sensitive.
pub fn is_openable(path: &Path, open_extensions: &[String]) -> bool {
  let name = display_name(path);
  open_extensions
    .iter()
    .any(|ext| name.strip_suffix(ext.as_str()).is_some_and(|stem| stem.ends_with('.')))
}

pub fn display_name(path: &Path) -> String {
  path
    .file_name()
    .map(|n| n.to_string_lossy().to_string())
    .unwrap_or_else(|| path.to_string_lossy().to_string())
}

pub fn default_open_extensions() -> Vec<String> {
  DEFAULT_OPEN_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fs::fake::FakeFs;
  use std::path::PathBuf;

  #[test]
  fn test_default_extensions_are_openable() {
    let exts = default_open_extensions();
    for name in ["a.txt", "README.md", "main.go", "x.astro", "comp.tsx", "lib.h", "run.sh"] {
      assert!(is_openable(Path::new(name), &exts), "{name} should be openable");
    }
  }

  #[test]
  fn test_unlisted_extension_is_not_openable() {
    let exts = default_open_extensions();
    assert!(!is_openable(Path::new("main.rs"), &exts));
    assert!(!is_openable(Path::new("photo.png"), &exts));
    assert!(!is_openable(Path::new("Makefile"), &exts));
  }

  #[test]
  fn test_extension_match_is_case_sensitive() {
    let exts = default_open_extensions();
    assert!(!is_openable(Path::new("NOTES.TXT"), &exts));
  }

  #[test]
  fn test_suffix_needs_dot_boundary() {
    let exts = default_open_extensions();
    // "c" must not match a name that merely ends in the letter c
    assert!(!is_openable(Path::new("music"), &exts));
    assert!(is_openable(Path::new("prog.c"), &exts));
  }

  #[test]
  fn test_dotfile_named_like_extension() {
    let exts = default_open_extensions();
    assert!(is_openable(Path::new("/r/.md"), &exts));
  }

  #[test]
  fn test_classify() {
    let fake = FakeFs::new().dir("/r", &["sub", "a.txt", "b.bin"]).dir("/r/sub", &[]);
    let exts = default_open_extensions();
    assert_eq!(classify(&fake, Path::new("/r/sub"), &exts), EntryKind::Directory);
    assert_eq!(classify(&fake, Path::new("/r/a.txt"), &exts), EntryKind::Openable);
    assert_eq!(classify(&fake, Path::new("/r/b.bin"), &exts), EntryKind::Inert);
  }

  #[test]
  fn test_display_name() {
    assert_eq!(display_name(&PathBuf::from("/r/sub/file.md")), "file.md");
    assert_eq!(display_name(&PathBuf::from("/")), "/");
  }
}
