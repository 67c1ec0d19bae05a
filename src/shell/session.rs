//! Editor state: the current line, the finalized entries above it, and the
//! page they live on.

use super::dispatch::{process_command, DispatchError, Profile};
use super::keys::{accepted_key, Edit, KeyStroke};
use super::line::CurrentLine;
use super::page::Page;
use chrono::{DateTime, Local};

/// A submitted line and the response it produced. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub text: String,
    /// May be empty, e.g. after a successful `rm`.
    pub result: String,
    pub submitted_at: DateTime<Local>,
}

/// What a key stroke did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The stroke was not for the editor, or changed nothing.
    Ignored,
    /// The current line changed.
    Edited,
    /// A line was finalized and a fresh one started.
    Executed,
    /// The page was wiped. The session accepts nothing from now on.
    Destroyed,
}

#[derive(Debug)]
pub struct Session {
    profile: Profile,
    prompt: String,
    line: CurrentLine,
    entries: Vec<Entry>,
    page: Page,
    destroyed: bool,
}

impl Session {
    pub fn new(profile: Profile, prompt: impl Into<String>, page: Page) -> Self {
        Self {
            profile,
            prompt: prompt.into(),
            line: CurrentLine::new(),
            entries: Vec::new(),
            page,
            destroyed: false,
        }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn line(&self) -> &str {
        self.line.text()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn handle_key(&mut self, stroke: &KeyStroke) -> Outcome {
        if self.destroyed {
            return Outcome::Ignored;
        }
        let Some(edit) = accepted_key(stroke, self.profile) else {
            return Outcome::Ignored;
        };
        match edit {
            Edit::Insert(c) => {
                self.line.push(c);
                Outcome::Edited
            }
            Edit::Backspace => {
                if self.line.backspace() {
                    Outcome::Edited
                } else {
                    Outcome::Ignored
                }
            }
            Edit::Submit => self.execute_command(),
        }
    }

    /// Finalize the current line, resolve it, and start a fresh line.
    pub fn execute_command(&mut self) -> Outcome {
        if self.destroyed {
            return Outcome::Ignored;
        }
        let text = self.line.take();
        let result = match process_command(self.profile, &text, &mut self.page) {
            Ok(result) => result,
            Err(DispatchError::Destroyed) => {
                self.entries.clear();
                self.destroyed = true;
                tracing::warn!("session destroyed");
                return Outcome::Destroyed;
            }
            Err(e @ DispatchError::NoSuchElement(_)) => {
                tracing::debug!(command = %text, "{}", e);
                String::new()
            }
        };
        tracing::info!(command = %text, result = %result, "command executed");
        self.entries.push(Entry {
            text,
            result,
            submitted_at: Local::now(),
        });
        Outcome::Executed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::keys::{Key, Target};
    use crate::shell::page::{Element, Region};
    use proptest::prelude::*;

    fn session(profile: Profile) -> Session {
        let page = Page::new(vec![
            Element::new("x", "X", Region::Sidebar, &["x body"]),
            Element::new("banner", "", Region::Header, &["welcome"]),
        ])
        .unwrap();
        Session::new(profile, "$ ", page)
    }

    fn type_str(s: &mut Session, text: &str) {
        for c in text.chars() {
            s.handle_key(&KeyStroke::input(Key::Char(c)));
        }
    }

    fn enter(s: &mut Session) -> Outcome {
        s.handle_key(&KeyStroke::input(Key::Enter))
    }

    #[test]
    fn test_unknown_command() {
        let mut s = session(Profile::Classic);
        type_str(&mut s, "foo");
        assert_eq!(enter(&mut s), Outcome::Executed);
        assert_eq!(s.entries().len(), 1);
        assert_eq!(s.entries()[0].text, "foo");
        assert_eq!(s.entries()[0].result, "foo: command not found");
        assert_eq!(s.line(), "");
    }

    #[test]
    fn test_enter_does_not_append_newline() {
        let mut s = session(Profile::Classic);
        type_str(&mut s, "ab");
        enter(&mut s);
        assert!(!s.entries()[0].text.contains('\n'));
    }

    #[test]
    fn test_empty_line_is_dispatched() {
        let mut s = session(Profile::Echo);
        enter(&mut s);
        assert_eq!(s.entries()[0].text, "");
        assert_eq!(s.entries()[0].result, ": command not found");
    }

    #[test]
    fn test_rm_removes_element() {
        let mut s = session(Profile::Classic);
        type_str(&mut s, "rm x");
        assert_eq!(enter(&mut s), Outcome::Executed);
        assert!(s.page().get("x").is_none());
        assert!(s.page().get("banner").is_some());
        assert_eq!(s.entries()[0].result, "");
    }

    #[test]
    fn test_rm_missing_element_gives_empty_result() {
        let mut s = session(Profile::Classic);
        type_str(&mut s, "rm x ghost banner");
        assert_eq!(enter(&mut s), Outcome::Executed);
        assert_eq!(s.entries()[0].result, "");
        assert!(s.page().get("x").is_none());
        assert!(s.page().get("banner").is_some());
    }

    #[test]
    fn test_wipe_destroys_session() {
        let mut s = session(Profile::Classic);
        type_str(&mut s, "hello");
        enter(&mut s);
        type_str(&mut s, "rm -rf /");
        assert_eq!(enter(&mut s), Outcome::Destroyed);
        assert!(s.is_destroyed());
        assert!(s.entries().is_empty());
        assert!(s.page().is_empty());
        assert_eq!(s.line(), "");

        type_str(&mut s, "ls");
        assert_eq!(enter(&mut s), Outcome::Ignored);
        assert_eq!(s.line(), "");
        assert!(s.entries().is_empty());
        assert_eq!(s.execute_command(), Outcome::Ignored);
    }

    #[test]
    fn test_backspace_on_empty_line_is_ignored() {
        let mut s = session(Profile::Classic);
        assert_eq!(s.handle_key(&KeyStroke::input(Key::Backspace)), Outcome::Ignored);
        type_str(&mut s, "ab");
        assert_eq!(s.handle_key(&KeyStroke::input(Key::Backspace)), Outcome::Edited);
        assert_eq!(s.line(), "a");
    }

    #[test]
    fn test_backspace_dropped_in_later_profiles() {
        for profile in [Profile::Echo, Profile::Fixed] {
            let mut s = session(profile);
            type_str(&mut s, "ab");
            assert_eq!(s.handle_key(&KeyStroke::input(Key::Backspace)), Outcome::Ignored);
            assert_eq!(s.line(), "ab");
        }
    }

    #[test]
    fn test_fixed_profile() {
        let mut s = session(Profile::Fixed);
        type_str(&mut s, "rm x");
        enter(&mut s);
        assert_eq!(s.entries()[0].result, "error: command not found");
        assert!(s.page().get("x").is_some());
    }

    #[test]
    fn test_entries_keep_order() {
        let mut s = session(Profile::Echo);
        for cmd in ["one", "two", "three"] {
            type_str(&mut s, cmd);
            enter(&mut s);
        }
        let texts: Vec<_> = s.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    fn printable() -> impl Strategy<Value = char> {
        any::<char>().prop_filter("printable", |c| !c.is_control())
    }

    proptest! {
        #[test]
        fn typed_chars_are_concatenated(chars in proptest::collection::vec(printable(), 0..64)) {
            let mut s = session(Profile::Classic);
            for c in &chars {
                prop_assert_eq!(s.handle_key(&KeyStroke::input(Key::Char(*c))), Outcome::Edited);
            }
            let expected: String = chars.iter().collect();
            prop_assert_eq!(s.line(), expected.as_str());
        }

        #[test]
        fn backspace_removes_one_char(
            chars in proptest::collection::vec(printable(), 0..32),
            presses in 0usize..40,
        ) {
            let mut s = session(Profile::Classic);
            for c in &chars {
                s.handle_key(&KeyStroke::input(Key::Char(*c)));
            }
            for _ in 0..presses {
                s.handle_key(&KeyStroke::input(Key::Backspace));
            }
            let kept = chars.len().saturating_sub(presses);
            let expected: String = chars[..kept].iter().collect();
            prop_assert_eq!(s.line(), expected.as_str());
        }

        #[test]
        fn other_targets_never_edit(
            chars in proptest::collection::vec(printable(), 0..32),
            target in prop_oneof![Just(Target::ShellLog), Just(Target::Sidebar), Just(Target::Nothing)],
        ) {
            let mut s = session(Profile::Classic);
            type_str(&mut s, "keep");
            for c in &chars {
                s.handle_key(&KeyStroke::new(target, Key::Char(*c)));
            }
            s.handle_key(&KeyStroke::new(target, Key::Backspace));
            s.handle_key(&KeyStroke::new(target, Key::Enter));
            prop_assert_eq!(s.line(), "keep");
            prop_assert!(s.entries().is_empty());
        }
    }
}
