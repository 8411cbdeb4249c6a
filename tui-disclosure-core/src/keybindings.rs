//! Key strings: parsing, matching and display
//!
//! Bindings are written as human-readable strings such as `"q"`, `"esc"`,
//! `"space"` or `"ctrl+p"`, so they can live in JSON config files.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use crate::error::ConfigError;

/// Parse a key string like "q", "esc", "ctrl+p", "shift+tab" into a KeyEvent
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();
    if key_str.is_empty() {
        return None;
    }

    // "+" on its own is a key, not a separator
    let (modifier_parts, key_part) = match key_str.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, key)) => (mods, key),
        None => ("", key_str.as_str()),
    };

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts.split('+').filter(|p| !p.is_empty()) {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
    }

    let code = match key_part.trim() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "space" => KeyCode::Char(' '),
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "backtab" => {
            modifiers |= KeyModifiers::SHIFT;
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        f if f.len() > 1 && f.starts_with('f') => {
            let n: u8 = f[1..].parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
        c => {
            let mut chars = c.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Check whether `key` matches any of `bindings`
///
/// Character keys compare case-insensitively and ignore SHIFT, since
/// terminals disagree on whether they report it for uppercase letters.
/// Unparseable bindings never match.
pub fn key_matches(key: &KeyEvent, bindings: &[String]) -> bool {
    bindings
        .iter()
        .filter_map(|b| parse_key_string(b))
        .any(|bound| match (bound.code, key.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => {
                a.to_lowercase().eq(b.to_lowercase())
                    && bound.modifiers.difference(KeyModifiers::SHIFT)
                        == key.modifiers.difference(KeyModifiers::SHIFT)
            }
            (a, b) => a == b && bound.modifiers == key.modifiers,
        })
}

/// Ensure every binding of `command` parses
pub fn validate_bindings(command: &str, bindings: &[String]) -> Result<(), ConfigError> {
    match bindings.iter().find(|b| parse_key_string(b).is_none()) {
        Some(bad) => Err(ConfigError::invalid_key(command, bad.as_str())),
        None => Ok(()),
    }
}

/// Format a key string for help text ("ctrl+p" -> "^P", "down" -> "↓")
pub fn format_key_for_display(key_str: &str) -> String {
    let Some(key) = parse_key_string(key_str) else {
        return key_str.to_string();
    };

    let mut out = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        out.push('^');
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        out.push_str("Alt+");
    }

    let code = match key.code {
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => return format!("{out}Shift+Tab"),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Insert => "Ins".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            c.to_uppercase().to_string()
        }
        KeyCode::Char(c) => c.to_string(),
        _ => key_str.to_string(),
    };

    if key.modifiers.contains(KeyModifiers::SHIFT) {
        out.push_str("Shift+");
    }
    out.push_str(&code);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key_string("esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("Enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string("down").unwrap().code, KeyCode::Down);
        assert_eq!(parse_key_string("f12").unwrap().code, KeyCode::F(12));
    }

    #[test]
    fn test_parse_modifiers() {
        let k = parse_key_string("ctrl+p").unwrap();
        assert_eq!(k.code, KeyCode::Char('p'));
        assert_eq!(k.modifiers, KeyModifiers::CONTROL);

        let k = parse_key_string("shift+tab").unwrap();
        assert_eq!(k.code, KeyCode::BackTab);
        assert!(k.modifiers.contains(KeyModifiers::SHIFT));

        let k = parse_key_string("ctrl++").unwrap();
        assert_eq!(k.code, KeyCode::Char('+'));
        assert_eq!(k.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_key_string("").is_none());
        assert!(parse_key_string("hyper+q").is_none());
        assert!(parse_key_string("qq").is_none());
        assert!(parse_key_string("f13").is_none());
    }

    #[test]
    fn test_key_matches() {
        let bindings = strings(&["enter", "space", "ctrl+o"]);

        assert!(key_matches(&parse_key_string("enter").unwrap(), &bindings));
        assert!(key_matches(&parse_key_string("space").unwrap(), &bindings));
        assert!(key_matches(&parse_key_string("ctrl+O").unwrap(), &bindings));
        assert!(!key_matches(&parse_key_string("o").unwrap(), &bindings));
        assert!(!key_matches(&parse_key_string("esc").unwrap(), &bindings));
    }

    #[test]
    fn test_key_matches_ignores_shift_on_chars() {
        let bindings = strings(&["g"]);
        let mut key = parse_key_string("G").unwrap();
        key.modifiers = KeyModifiers::SHIFT;

        assert!(key_matches(&key, &bindings));
    }

    #[test]
    fn test_validate_bindings() {
        assert!(validate_bindings("next", &strings(&["down", "j"])).is_ok());

        let err = validate_bindings("next", &strings(&["down", "nope"])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidKey { ref command, ref binding } if command == "next" && binding == "nope"
        ));
    }

    #[test]
    fn test_format_key_for_display() {
        assert_eq!(format_key_for_display("ctrl+p"), "^P");
        assert_eq!(format_key_for_display("down"), "↓");
        assert_eq!(format_key_for_display("space"), "Space");
        assert_eq!(format_key_for_display("shift+tab"), "Shift+Tab");
        assert_eq!(format_key_for_display("q"), "q");
    }
}
