use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
  pub header: Color,
  pub cursor: Color,
  pub marked: Color,
  pub directory: Color,
  pub file: Color,
  pub text_dim: Color,
  pub bg_bar: Color,
  pub info: Color,
}

impl Theme {
  /// Greyscale palette with the file icons providing the only color.
  pub fn mono() -> Self {
    Self {
      header: Color::Rgb(224, 224, 224),
      cursor: Color::Rgb(224, 224, 224),
      marked: Color::Rgb(192, 192, 192),
      directory: Color::Rgb(208, 208, 208),
      file: Color::Rgb(240, 240, 240),
      text_dim: Color::Rgb(128, 128, 128),
      bg_bar: Color::Reset,
      info: Color::Rgb(255, 255, 255),
    }
  }

  pub fn dark() -> Self {
    Self {
      header: Color::Indexed(252),
      cursor: Color::Indexed(75),
      marked: Color::Indexed(208),
      directory: Color::Indexed(75),
      file: Color::Indexed(252),
      text_dim: Color::DarkGray,
      bg_bar: Color::Indexed(236),
      info: Color::Indexed(150),
    }
  }

  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "mono" => Some(Self::mono()),
      "dark" => Some(Self::dark()),
      _ => None,
    }
  }

  pub fn available_themes() -> &'static [&'static str] {
    &["mono", "dark"]
  }
}

impl Default for Theme {
  fn default() -> Self {
    Self::mono()
  }
}
