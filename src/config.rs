use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::action::Action;
use crate::fs::cache::DEFAULT_PREWARM_DEPTH;
use crate::fs::entry::default_open_extensions;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
  pub code: KeyCode,
  pub modifiers: KeyModifiers,
}

pub struct Config {
  pub page_size: usize,
  pub tick_rate_ms: u64,
  pub editor: String,
  pub show_hidden: bool,
  pub max_prewarm_depth: usize,
  pub open_extensions: Vec<String>,
  pub theme: Theme,
  pub normal_keys: HashMap<KeyBinding, Action>,
}

#[derive(Deserialize, Default)]
struct TomlConfig {
  general: Option<GeneralConfig>,
  keys: Option<KeysConfig>,
}

#[derive(Deserialize, Default)]
struct GeneralConfig {
  page_size: Option<usize>,
  tick_rate_ms: Option<u64>,
  editor: Option<String>,
  show_hidden: Option<bool>,
  max_prewarm_depth: Option<usize>,
  open_extensions: Option<Vec<String>>,
  theme: Option<String>,
}

#[derive(Deserialize, Default)]
struct KeysConfig {
  normal: Option<HashMap<String, String>>,
}

pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
  if s.is_empty() {
    return None;
  }

  let parts: Vec<&str> = s.split('+').collect();

  if parts.len() == 1 {
    let key = parts[0];
    if let Some(code) = named_key(key) {
      return Some(KeyBinding { code, modifiers: KeyModifiers::NONE });
    }
    let mut chars = key.chars();
    return match (chars.next(), chars.next()) {
      (Some(c), None) => Some(KeyBinding { code: KeyCode::Char(c), modifiers: KeyModifiers::NONE }),
      _ => None,
    };
  }

  if parts.len() == 2 {
    let key_str = parts[1];
    let modifiers = match parts[0].to_lowercase().as_str() {
      "ctrl" => KeyModifiers::CONTROL,
      "alt" => KeyModifiers::ALT,
      "shift" => {
        let chars: Vec<char> = key_str.chars().collect();
        if chars.len() == 1 {
          let c = chars[0].to_uppercase().next().unwrap_or(chars[0]);
          return Some(KeyBinding { code: KeyCode::Char(c), modifiers: KeyModifiers::NONE });
        }
        return named_key(key_str).map(|code| KeyBinding { code, modifiers: KeyModifiers::SHIFT });
      }
      _ => return None,
    };

    if let Some(code) = named_key(key_str) {
      return Some(KeyBinding { code, modifiers });
    }
    let chars: Vec<char> = key_str.chars().collect();
    if chars.len() == 1 {
      return Some(KeyBinding { code: KeyCode::Char(chars[0]), modifiers });
    }
    return None;
  }

  None
}

fn named_key(s: &str) -> Option<KeyCode> {
  match s.to_lowercase().as_str() {
    "enter" => Some(KeyCode::Enter),
    "space" => Some(KeyCode::Char(' ')),
    "esc" => Some(KeyCode::Esc),
    "up" => Some(KeyCode::Up),
    "down" => Some(KeyCode::Down),
    "left" => Some(KeyCode::Left),
    "right" => Some(KeyCode::Right),
    "backspace" => Some(KeyCode::Backspace),
    "delete" => Some(KeyCode::Delete),
    "tab" => Some(KeyCode::Tab),
    "pageup" | "pgup" => Some(KeyCode::PageUp),
    "pagedown" | "pgdn" => Some(KeyCode::PageDown),
    "home" => Some(KeyCode::Home),
    "end" => Some(KeyCode::End),
    s if s.starts_with('f') && s.len() > 1 => {
      s[1..].parse::<u8>().ok().filter(|&n| (1..=24).contains(&n)).map(KeyCode::F)
    }
    _ => None,
  }
}

pub fn normalize_key_event(key: KeyEvent) -> KeyBinding {
  let mut modifiers = key.modifiers;
  if let KeyCode::Char(c) = key.code
    && (c.is_uppercase() || !c.is_alphanumeric())
  {
    // Terminals disagree on whether shifted symbols like ':' carry SHIFT
    modifiers -= KeyModifiers::SHIFT;
  }
  KeyBinding { code: key.code, modifiers }
}

impl Default for Config {
  fn default() -> Self {
    let mut config = Config::empty();
    let mut errors = Vec::new();
    config.apply_toml_str(Config::default_toml(), &mut errors);
    config
  }
}

impl Config {
  fn empty() -> Self {
    Config {
      page_size: 10,
      tick_rate_ms: 100,
      editor: "nvim".to_string(),
      show_hidden: false,
      max_prewarm_depth: DEFAULT_PREWARM_DEPTH,
      open_extensions: default_open_extensions(),
      theme: Theme::default(),
      normal_keys: HashMap::new(),
    }
  }

  fn apply_toml_str(&mut self, s: &str, errors: &mut Vec<String>) {
    let toml_config: TomlConfig = match toml::from_str(s) {
      Ok(c) => c,
      Err(e) => {
        errors.push(format!("failed to parse config.toml: {e}"));
        return;
      }
    };

    if let Some(general) = toml_config.general {
      match general.page_size {
        Some(0) => errors.push("page_size must be at least 1".to_string()),
        Some(size) => self.page_size = size,
        None => {}
      }
      if let Some(tick) = general.tick_rate_ms {
        self.tick_rate_ms = tick;
      }
      if let Some(editor) = general.editor {
        if editor.trim().is_empty() {
          errors.push("editor must not be empty".to_string());
        } else {
          self.editor = editor;
        }
      }
      if let Some(show_hidden) = general.show_hidden {
        self.show_hidden = show_hidden;
      }
      if let Some(depth) = general.max_prewarm_depth {
        self.max_prewarm_depth = depth;
      }
      if let Some(exts) = general.open_extensions {
        self.open_extensions = exts
          .into_iter()
          .map(|e| e.trim_start_matches('.').to_string())
          .filter(|e| !e.is_empty())
          .collect();
      }
      if let Some(name) = general.theme {
        match Theme::from_name(&name) {
          Some(theme) => self.theme = theme,
          None => errors.push(format!(
            "unknown theme: {name:?} (available: {})",
            Theme::available_themes().join(", ")
          )),
        }
      }
    }

    if let Some(keys) = toml_config.keys
      && let Some(normal) = keys.normal
    {
      self.normal_keys.clear();
      for (key_str, action_str) in &normal {
        let Some(kb) = parse_key_binding(key_str) else {
          errors.push(format!("invalid key binding: {key_str:?}"));
          continue;
        };
        let Some(action) = Action::from_name(action_str) else {
          errors.push(format!("invalid action: {action_str:?}"));
          continue;
        };
        self.normal_keys.insert(kb, action);
      }
    }
  }

  pub fn default_toml() -> &'static str {
    r#"[general]
page_size = 10            # entries per page
tick_rate_ms = 100        # event loop tick rate in ms
editor = "nvim"           # program used to open files
show_hidden = false       # list dot-files
max_prewarm_depth = 8     # directory levels cached ahead of a visit
theme = "mono"            # mono, dark
open_extensions = ["txt", "md", "go", "py", "js", "json", "html", "css", "java", "cpp", "h", "sh", "rb", "c", "jsx", "tsx", "astro"]

# Any printable key without a binding is typed into the command line.
# Submit with ":" and clear with ";". Commands: "cd <path>", "w".
[keys.normal]
up = "move_up"
k = "move_up"
down = "move_down"
j = "move_down"
left = "history_back"
right = "history_forward"
space = "toggle_select"
enter = "enter"
backspace = "command_backspace"
":" = "command_submit"
";" = "command_cancel"
pageup = "page_up"
pagedown = "page_down"
"ctrl+c" = "quit"
"#
  }

  pub fn config_path() -> Result<PathBuf, String> {
    dirs::config_dir()
      .map(|d| d.join("pgbrowse").join("config.toml"))
      .ok_or_else(|| "could not determine config directory".to_string())
  }

  pub fn dump_default_config(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)
        .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
    }

    std::fs::write(path, Self::default_toml())
      .map_err(|e| format!("failed to write {}: {e}", path.display()))?;

    Ok(())
  }

  pub fn load() -> (Config, Vec<String>) {
    let mut errors = Vec::new();

    let content = Self::config_path()
      .ok()
      .and_then(|p| std::fs::read_to_string(p).ok());

    let config = match content {
      Some(s) => Self::load_from_str_with_errors(&s, &mut errors),
      None => Config::default(),
    };

    (config, errors)
  }

  #[cfg(test)]
  pub fn load_from_str(s: &str) -> Config {
    let mut errors = Vec::new();
    Self::load_from_str_with_errors(s, &mut errors)
  }

  fn load_from_str_with_errors(s: &str, errors: &mut Vec<String>) -> Config {
    let mut config = Config::default();
    config.apply_toml_str(s, errors);
    config
  }
}
