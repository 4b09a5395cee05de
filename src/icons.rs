use ratatui::style::Color;

pub struct FileIcon {
  pub glyph: &'static str,
  pub color: Color,
}

const fn icon(glyph: &'static str, r: u8, g: u8, b: u8) -> FileIcon {
  FileIcon { glyph, color: Color::Rgb(r, g, b) }
}

pub fn file_icon(name: &str, is_dir: bool) -> FileIcon {
  if is_dir {
    return icon("\u{1f4c1}", 208, 208, 208); // 📁
  }

  // Names without a dot, and dot-files like ".go", get the default glyph
  let ext = match name.rsplit_once('.') {
    Some((stem, ext)) if !stem.is_empty() => ext,
    _ => "",
  };

  match ext {
    "go" => icon("\u{e627}", 224, 224, 224),
    "json" => icon("\u{e60b}", 255, 255, 0),
    "html" => icon("\u{f13b}", 255, 165, 0),
    "md" => icon("\u{f48a}", 0, 255, 0),
    "js" => icon("\u{e74e}", 255, 0, 0),
    "css" => icon("\u{e749}", 255, 0, 255),
    "py" => icon("\u{e606}", 0, 255, 255),
    "java" => icon("\u{e256}", 0, 0, 128),
    "cpp" | "h" => icon("\u{e61d}", 255, 215, 0),
    "rb" => icon("\u{e791}", 200, 16, 46),
    "c" => icon("\u{e61e}", 75, 0, 130),
    "sh" => icon("\u{e795}", 255, 69, 0),
    "jsx" => icon("\u{e625}", 255, 140, 0),
    "tsx" => icon("\u{e628}", 0, 191, 255),
    "astro" => icon("\u{e626}", 138, 43, 226),
    _ => icon("\u{e612}", 169, 169, 169),
  }
}
