//! Key acceptance policy.
//!
//! A key stroke only reaches the line editor if it was aimed at the command
//! input and is one of: Enter, Backspace (when the profile supports it), or a
//! single printable character. Named keys such as arrows or F-keys are
//! dropped.

use super::dispatch::Profile;

/// What the key stroke was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The live command input of the current line.
    CommandInput,
    /// The scrolling log of finalized entries.
    ShellLog,
    /// The side panels of the page.
    Sidebar,
    /// No element has focus (e.g. the page is gone).
    Nothing,
}

/// A key, reduced to the properties the editor cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    /// A single printable character.
    Char(char),
    /// Any multi-character key name: `"ArrowUp"`, `"F5"`, `"Tab"`, ...
    Named(String),
}

impl Key {
    /// The key's name, as a browser would report it.
    pub fn name(&self) -> String {
        match self {
            Key::Enter => "Enter".to_string(),
            Key::Backspace => "Backspace".to_string(),
            Key::Char(c) => c.to_string(),
            Key::Named(name) => name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStroke {
    pub target: Target,
    pub key: Key,
}

impl KeyStroke {
    pub fn new(target: Target, key: Key) -> Self {
        Self { target, key }
    }

    /// Shorthand for a stroke aimed at the command input.
    #[cfg(test)]
    pub fn input(key: Key) -> Self {
        Self::new(Target::CommandInput, key)
    }
}

/// The edit an accepted key stroke asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Backspace,
    Submit,
}

/// Decide whether `stroke` is handled by the line editor, and how.
///
/// Returns `None` for anything that must leave the current line untouched.
pub fn accepted_key(stroke: &KeyStroke, profile: Profile) -> Option<Edit> {
    if stroke.target != Target::CommandInput {
        return None;
    }

    match stroke.key {
        Key::Enter => Some(Edit::Submit),
        Key::Backspace if profile.supports_backspace() => Some(Edit::Backspace),
        Key::Backspace => None,
        Key::Char(c) if !c.is_control() => Some(Edit::Insert(c)),
        Key::Char(_) | Key::Named(_) => None,
    }
}
