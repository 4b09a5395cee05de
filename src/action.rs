#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
  Quit,
  MoveUp,
  MoveDown,
  PageUp,
  PageDown,
  HistoryBack,
  HistoryForward,
  ToggleSelect,
  Enter,
  CommandInput(char),
  CommandBackspace,
  CommandSubmit,
  CommandCancel,
  Tick,
  None,
}

impl Action {
  pub fn from_name(name: &str) -> Option<Action> {
    match name {
      "quit" => Some(Action::Quit),
      "move_up" => Some(Action::MoveUp),
      "move_down" => Some(Action::MoveDown),
      "page_up" => Some(Action::PageUp),
      "page_down" => Some(Action::PageDown),
      "history_back" => Some(Action::HistoryBack),
      "history_forward" => Some(Action::HistoryForward),
      "toggle_select" => Some(Action::ToggleSelect),
      "enter" => Some(Action::Enter),
      "command_backspace" => Some(Action::CommandBackspace),
      "command_submit" => Some(Action::CommandSubmit),
      "command_cancel" => Some(Action::CommandCancel),
      "none" => Some(Action::None),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_name_bindable_actions() {
    assert_eq!(Action::from_name("quit"), Some(Action::Quit));
    assert_eq!(Action::from_name("move_up"), Some(Action::MoveUp));
    assert_eq!(Action::from_name("move_down"), Some(Action::MoveDown));
    assert_eq!(Action::from_name("page_up"), Some(Action::PageUp));
    assert_eq!(Action::from_name("page_down"), Some(Action::PageDown));
    assert_eq!(Action::from_name("history_back"), Some(Action::HistoryBack));
    assert_eq!(Action::from_name("history_forward"), Some(Action::HistoryForward));
    assert_eq!(Action::from_name("toggle_select"), Some(Action::ToggleSelect));
    assert_eq!(Action::from_name("enter"), Some(Action::Enter));
    assert_eq!(Action::from_name("command_backspace"), Some(Action::CommandBackspace));
    assert_eq!(Action::from_name("command_submit"), Some(Action::CommandSubmit));
    assert_eq!(Action::from_name("command_cancel"), Some(Action::CommandCancel));
  }

  #[test]
  fn test_from_name_none() {
    assert_eq!(Action::from_name("none"), Some(Action::None));
  }

  #[test]
  fn test_from_name_invalid() {
    assert_eq!(Action::from_name("garbage"), None);
    assert_eq!(Action::from_name(""), None);
  }

  #[test]
  fn test_from_name_unbindable() {
    assert_eq!(Action::from_name("command_input"), None);
    assert_eq!(Action::from_name("resize"), None);
    assert_eq!(Action::from_name("tick"), None);
  }
}
