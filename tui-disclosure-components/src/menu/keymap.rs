//! Configurable key bindings for the menu

use std::path::Path;

use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use tui_disclosure_core::{key_matches, validate_bindings, ConfigError};

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

/// Key strings for each menu command
///
/// Loaded from JSON; commands missing from the file keep their defaults.
///
/// ```json
/// { "next": ["down", "j"], "previous": ["up", "k"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuKeymap {
    /// Trigger: open the menu and focus the first item
    pub trigger_open: Vec<String>,
    /// Item: select it and close the menu
    pub item_activate: Vec<String>,
    /// Panel: close and focus the panel root
    pub dismiss: Vec<String>,
    /// Panel: focus the previous item
    pub previous: Vec<String>,
    /// Panel: focus the next item
    pub next: Vec<String>,
    /// Panel: focus the first item
    pub first: Vec<String>,
    /// Panel: focus the last item
    pub last: Vec<String>,
}

impl Default for MenuKeymap {
    fn default() -> Self {
        Self {
            trigger_open: keys(&["enter", "space", "down", "up"]),
            item_activate: keys(&["enter", "space"]),
            dismiss: keys(&["esc"]),
            previous: keys(&["up"]),
            next: keys(&["down"]),
            first: keys(&["home"]),
            last: keys(&["end"]),
        }
    }
}

impl MenuKeymap {
    /// Parse and validate a JSON keymap
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let keymap: Self = serde_json::from_str(json)?;
        keymap.validate()?;
        Ok(keymap)
    }

    /// Read, parse and validate a JSON keymap file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let keymap = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "Loaded menu keymap");
        Ok(keymap)
    }

    /// Every command with its bindings
    pub fn commands(&self) -> [(&'static str, &[String]); 7] {
        [
            ("trigger_open", self.trigger_open.as_slice()),
            ("item_activate", self.item_activate.as_slice()),
            ("dismiss", self.dismiss.as_slice()),
            ("previous", self.previous.as_slice()),
            ("next", self.next.as_slice()),
            ("first", self.first.as_slice()),
            ("last", self.last.as_slice()),
        ]
    }

    /// Check that every binding parses
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.commands()
            .into_iter()
            .try_for_each(|(command, bindings)| validate_bindings(command, bindings))
    }

    /// The command bound to `key` among the panel's navigation commands
    pub fn panel_command(&self, key: &KeyEvent) -> Option<PanelCommand> {
        [
            (PanelCommand::Dismiss, &self.dismiss),
            (PanelCommand::Previous, &self.previous),
            (PanelCommand::Next, &self.next),
            (PanelCommand::First, &self.first),
            (PanelCommand::Last, &self.last),
        ]
        .into_iter()
        .find(|(_, bindings)| key_matches(key, bindings))
        .map(|(command, _)| command)
    }
}

/// Keys the panel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    Dismiss,
    Previous,
    Next,
    First,
    Last,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_disclosure_core::testing::key;

    #[test]
    fn test_defaults() {
        let keymap = MenuKeymap::default();
        assert!(keymap.validate().is_ok());

        for k in ["enter", "space", "down", "up"] {
            assert!(key_matches(&key(k), &keymap.trigger_open), "{k}");
        }
        assert_eq!(keymap.panel_command(&key("esc")), Some(PanelCommand::Dismiss));
        assert_eq!(keymap.panel_command(&key("up")), Some(PanelCommand::Previous));
        assert_eq!(keymap.panel_command(&key("down")), Some(PanelCommand::Next));
        assert_eq!(keymap.panel_command(&key("home")), Some(PanelCommand::First));
        assert_eq!(keymap.panel_command(&key("end")), Some(PanelCommand::Last));
        assert_eq!(keymap.panel_command(&key("enter")), None);
    }

    #[test]
    fn test_json_overrides_only_named_commands() {
        let keymap = MenuKeymap::from_json(r#"{ "next": ["down", "j"] }"#).unwrap();

        assert_eq!(keymap.next, vec!["down".to_string(), "j".to_string()]);
        assert_eq!(keymap.previous, MenuKeymap::default().previous);
        assert_eq!(keymap.panel_command(&key("j")), Some(PanelCommand::Next));
    }

    #[test]
    fn test_json_rejects_bad_key() {
        let err = MenuKeymap::from_json(r#"{ "dismiss": ["escape", "meta+x"] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKey { .. }));
        assert!(err.to_string().contains("dismiss"));
    }

    #[test]
    fn test_json_rejects_unknown_command() {
        let err = MenuKeymap::from_json(r#"{ "explode": ["x"] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = MenuKeymap::load("/nonexistent/keymap.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
