use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::{BTreeMap, HashMap};

use crate::action::Action;
use crate::error::ConfigError;

/// Data-only binding of raw key tokens to logical actions
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<String, Action>,
}

impl KeyMap {
    /// Build from `overrides` layered over the factory tokens
    pub fn new(overrides: &BTreeMap<Action, String>) -> Result<Self, ConfigError> {
        let mut bindings: HashMap<String, Action> = HashMap::new();

        for action in Action::ALL {
            let token = overrides
                .get(&action)
                .map(|t| unescape(t))
                .unwrap_or_else(|| action.default_token().to_string());

            if let Some(previous) = bindings.insert(token.clone(), action) {
                return Err(ConfigError::DuplicateKey {
                    token,
                    first: previous.config_name().to_string(),
                    second: action.config_name().to_string(),
                });
            }
        }

        Ok(Self { bindings })
    }

    /// Action bound to `token`, if any
    pub fn action(&self, token: &str) -> Option<Action> {
        self.bindings.get(token).copied()
    }

    /// Token bound to `action`, for the status bar
    pub fn token_for(&self, action: Action) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(_, a)| **a == action)
            .map(|(t, _)| t.as_str())
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let bindings = Action::ALL
            .iter()
            .map(|a| (a.default_token().to_string(), *a))
            .collect();
        Self { bindings }
    }
}

/// Translate a key event into the token a raw terminal would have sent
pub fn key_token(key: &KeyEvent) -> Option<String> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let token = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "\x1b[A".to_string(),
        KeyCode::Down => "\x1b[B".to_string(),
        KeyCode::Right => "\x1b[C".to_string(),
        KeyCode::Left => "\x1b[D".to_string(),
        KeyCode::Home => "\x1b[H".to_string(),
        KeyCode::End => "\x1b[F".to_string(),
        KeyCode::PageUp => "\x1b[5~".to_string(),
        KeyCode::PageDown => "\x1b[6~".to_string(),
        KeyCode::Tab => "\t".to_string(),
        KeyCode::Enter => "\n".to_string(),
        KeyCode::Esc => "\x1b".to_string(),
        _ => return None,
    };
    Some(token)
}

/// Turn a config token such as `\x1b[A` or `\t` written literally into
/// the raw characters; already-raw tokens pass through unchanged
fn unescape(token: &str) -> String {
    let mut out = String::new();
    let mut chars = token.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('e') => out.push('\x1b'),
            Some('x') => {
                let hex: String = chars.by_ref().take(2).collect();
                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => out.push(byte as char),
                    Err(_) => {
                        out.push_str("\\x");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}
