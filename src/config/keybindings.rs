//! Keybinding configuration types and parsing.
//!
//! Every menu action of the mixer can also be triggered from the keyboard.
//! Bindings are written as strings such as `"K"`, `"F1"` or `"Ctrl+Q"`.

use crate::model::Preset;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// All actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Exit,
    ToggleAbout,
    SetBlack,
    SetRed,
    SetGreen,
    SetBlue,
    SetCyan,
    SetMagenta,
    SetYellow,
    SetWhite,
}

impl Action {
    /// The preset this action applies, if it is a color action.
    pub fn preset(&self) -> Option<Preset> {
        match self {
            Action::SetBlack => Some(Preset::Black),
            Action::SetRed => Some(Preset::Red),
            Action::SetGreen => Some(Preset::Green),
            Action::SetBlue => Some(Preset::Blue),
            Action::SetCyan => Some(Preset::Cyan),
            Action::SetMagenta => Some(Preset::Magenta),
            Action::SetYellow => Some(Preset::Yellow),
            Action::SetWhite => Some(Preset::White),
            Action::Exit | Action::ToggleAbout => None,
        }
    }
}

/// Reasons a keybinding table can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeybindingError {
    #[error("Empty keybinding string")]
    Empty,

    #[error("No key specified in: {0}")]
    MissingKey(String),

    #[error("Duplicate keybinding '{binding}' assigned to both {existing:?} and {action:?}")]
    Duplicate {
        binding: String,
        existing: Action,
        action: Action,
    },
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key name, stored lowercase so that `"X"` and `"x"` are the same binding
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+W" or "F1".
    /// Modifiers can appear in any order and may be surrounded by spaces.
    pub fn parse(s: &str) -> Result<Self, KeybindingError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeybindingError::Empty);
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(KeybindingError::MissingKey(s.to_string()));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]: the key is '+' itself
        let key = key_parts.join("+");
        let key = if key.chars().all(|c| c == '+') {
            "+".to_string()
        } else {
            key.to_ascii_lowercase()
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches a key press.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Keyboard shortcuts for the mixer.
///
/// Each action can have several bindings:
/// ```toml
/// [keybindings]
/// exit = ["Ctrl+Q"]
/// set_black = ["K", "0"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_toggle_about")]
    pub toggle_about: Vec<String>,

    #[serde(default = "default_set_black")]
    pub set_black: Vec<String>,

    #[serde(default = "default_set_red")]
    pub set_red: Vec<String>,

    #[serde(default = "default_set_green")]
    pub set_green: Vec<String>,

    #[serde(default = "default_set_blue")]
    pub set_blue: Vec<String>,

    #[serde(default = "default_set_cyan")]
    pub set_cyan: Vec<String>,

    #[serde(default = "default_set_magenta")]
    pub set_magenta: Vec<String>,

    #[serde(default = "default_set_yellow")]
    pub set_yellow: Vec<String>,

    #[serde(default = "default_set_white")]
    pub set_white: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            toggle_about: default_toggle_about(),
            set_black: default_set_black(),
            set_red: default_set_red(),
            set_green: default_set_green(),
            set_blue: default_set_blue(),
            set_cyan: default_set_cyan(),
            set_magenta: default_set_magenta(),
            set_yellow: default_set_yellow(),
            set_white: default_set_white(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions.
    /// Fails if any binding string is invalid or the same binding is used twice.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, KeybindingError> {
        let mut map = HashMap::new();

        let table: [(&[String], Action); 10] = [
            (self.exit.as_slice(), Action::Exit),
            (self.toggle_about.as_slice(), Action::ToggleAbout),
            (self.set_black.as_slice(), Action::SetBlack),
            (self.set_red.as_slice(), Action::SetRed),
            (self.set_green.as_slice(), Action::SetGreen),
            (self.set_blue.as_slice(), Action::SetBlue),
            (self.set_cyan.as_slice(), Action::SetCyan),
            (self.set_magenta.as_slice(), Action::SetMagenta),
            (self.set_yellow.as_slice(), Action::SetYellow),
            (self.set_white.as_slice(), Action::SetWhite),
        ];

        for (bindings, action) in table {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing) = map.insert(binding, action) {
                    return Err(KeybindingError::Duplicate {
                        binding: binding_str.clone(),
                        existing,
                        action,
                    });
                }
            }
        }

        Ok(map)
    }
}

fn default_exit() -> Vec<String> {
    vec!["Ctrl+Q".to_string()]
}

fn default_toggle_about() -> Vec<String> {
    vec!["F1".to_string()]
}

fn default_set_black() -> Vec<String> {
    vec!["K".to_string()]
}

fn default_set_red() -> Vec<String> {
    vec!["R".to_string()]
}

fn default_set_green() -> Vec<String> {
    vec!["G".to_string()]
}

fn default_set_blue() -> Vec<String> {
    vec!["B".to_string()]
}

fn default_set_cyan() -> Vec<String> {
    vec!["C".to_string()]
}

fn default_set_magenta() -> Vec<String> {
    vec!["M".to_string()]
}

fn default_set_yellow() -> Vec<String> {
    vec!["Y".to_string()]
}

fn default_set_white() -> Vec<String> {
    vec!["W".to_string()]
}
