/// A submitted command-line buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  /// `cd <path>`: navigate, same rules as entering a directory.
  ChangeDir(String),
  /// `w...`: accepted and ignored, there is nothing to save.
  Write,
  /// Empty or unrecognized input.
  Unknown,
}

impl Command {
  pub fn parse(buffer: &str) -> Command {
    let line = buffer.strip_prefix(':').unwrap_or(buffer);
    if let Some(target) = line.strip_prefix("cd ") {
      let target = target.trim();
      if target.is_empty() {
        return Command::Unknown;
      }
      return Command::ChangeDir(target.to_string());
    }
    if line.starts_with('w') {
      return Command::Write;
    }
    Command::Unknown
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_cd() {
    assert_eq!(Command::parse("cd /tmp"), Command::ChangeDir("/tmp".into()));
    assert_eq!(Command::parse("cd .."), Command::ChangeDir("..".into()));
  }

  #[test]
  fn test_parse_cd_with_leading_colon() {
    assert_eq!(Command::parse(":cd /nonexistent"), Command::ChangeDir("/nonexistent".into()));
  }

  #[test]
  fn test_parse_cd_keeps_inner_spaces() {
    assert_eq!(Command::parse("cd My Documents "), Command::ChangeDir("My Documents".into()));
  }

  #[test]
  fn test_parse_cd_without_target() {
    assert_eq!(Command::parse("cd "), Command::Unknown);
    assert_eq!(Command::parse("cd"), Command::Unknown);
  }

  #[test]
  fn test_parse_write_forms() {
    assert_eq!(Command::parse("w"), Command::Write);
    assert_eq!(Command::parse("wq"), Command::Write);
    assert_eq!(Command::parse(":write"), Command::Write);
  }

  #[test]
  fn test_parse_unknown() {
    assert_eq!(Command::parse(""), Command::Unknown);
    assert_eq!(Command::parse("ls"), Command::Unknown);
    assert_eq!(Command::parse("xcd /tmp"), Command::Unknown);
  }
}
