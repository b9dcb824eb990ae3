//! Key bindings matched against `bubbletea_rs::KeyMsg`.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es under a single action and
//! carries the short help text shown in the search list's footer. Key presses
//! can be written as strings such as `"ctrl+c"`, `"pgdown"` or `"?"`.
//!
//! ```rust
//! use listsearch::key::{matches_binding, new_binding, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let quit = new_binding(vec![with_keys_str(&["ctrl+c"])]).with_help("ctrl+c", "quit");
//!
//! let msg = KeyMsg {
//!     key: KeyCode::Char('c'),
//!     modifiers: KeyModifiers::CONTROL,
//! };
//! assert!(matches_binding(&msg, &quit));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Returns `true` if `msg` is this key press.
    ///
    /// Shift is ignored for character keys, since terminals report it
    /// inconsistently for uppercase letters and symbols.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        let mut held = msg.modifiers;
        if matches!(msg.key, KeyCode::Char(_)) {
            held.remove(KeyModifiers::SHIFT);
        }
        held == self.modifiers
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// How the keys are written, e.g. `"↑/ctrl+p"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// An action bound to one or more key presses.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible into key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Key presses that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match and are
    /// left out of help.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns `true` if the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Returns `true` if `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|key| key.matches(msg))
    }
}

/// Builds a binding from groups of key presses.
pub fn new_binding(groups: Vec<Vec<KeyPress>>) -> Binding {
    Binding::new(groups.into_iter().flatten().collect::<Vec<KeyPress>>())
}

/// Parses key strings such as `"ctrl+u"` or `"pgdown"`. Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> Vec<KeyPress> {
    keys.iter().filter_map(|key| parse_key(key)).collect()
}

/// Returns `true` if `msg` triggers `binding`.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Parses a single key string.
pub fn parse_key(s: &str) -> Option<KeyPress> {
    // A lone "+" is the plus key itself.
    if s == "+" {
        return Some(KeyCode::Char('+').into());
    }

    let mut parts: Vec<&str> = s.split('+').collect();
    let name = parts.pop()?;
    let mut modifiers = KeyModifiers::NONE;
    for part in parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match name {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };

    Some(KeyPress { code, modifiers })
}

/// Something that can describe its key bindings.
pub trait KeyMap {
    /// Bindings for the single-line help footer.
    fn short_help(&self) -> Vec<&Binding>;
}

/// Renders enabled bindings as `key desc • key desc`.
pub fn help_line(bindings: &[&Binding]) -> String {
    bindings
        .iter()
        .filter(|binding| binding.enabled() && !binding.help().key.is_empty())
        .map(|binding| format!("{} {}", binding.help().key, binding.help().desc))
        .collect::<Vec<_>>()
        .join(" • ")
}
