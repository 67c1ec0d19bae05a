//! Command resolution.
//!
//! Three generations of the shell exist, selected by [`Profile`]. Only
//! [`Profile::Classic`] knows any commands; the later two answer every line
//! with a "command not found" message.

use super::page::{ElementId, Page};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The command that wipes the page.
pub const WIPE_COMMAND: &str = "rm -rf /";

const RM_PREFIX: &str = "rm ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// First generation: Backspace works, and `rm` removes page elements.
    #[default]
    Classic,
    /// Second generation: no Backspace, no commands, input is echoed back.
    Echo,
    /// Third generation: no Backspace, a fixed error for every line.
    Fixed,
}

impl Profile {
    pub fn supports_backspace(self) -> bool {
        matches!(self, Profile::Classic)
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Classic => "classic",
            Profile::Echo => "echo",
            Profile::Fixed => "fixed",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The page was wiped. There is nothing left to render a result into.
    #[error("the page is gone")]
    Destroyed,
    /// `rm` named an element that is not on the page.
    #[error("no such element: {0}")]
    NoSuchElement(ElementId),
}

/// Map a submitted line to the text shown beneath it.
///
/// `page` is only touched by the `rm` family under [`Profile::Classic`].
/// Elements removed before an `rm` runs into a missing id stay removed.
pub fn process_command(profile: Profile, cmd: &str, page: &mut Page) -> Result<String, DispatchError> {
    match profile {
        Profile::Classic => classic(cmd, page),
        Profile::Echo => Ok(not_found(cmd)),
        Profile::Fixed => Ok("error: command not found".to_string()),
    }
}

fn classic(cmd: &str, page: &mut Page) -> Result<String, DispatchError> {
    if cmd == WIPE_COMMAND {
        tracing::warn!("wiping page");
        page.clear();
        return Err(DispatchError::Destroyed);
    }

    if cmd.starts_with(RM_PREFIX) {
        for id in cmd.split(' ').skip(1) {
            match page.remove(id) {
                Some(el) => tracing::info!(id = %el.id, "removed element"),
                None => return Err(DispatchError::NoSuchElement(ElementId::new(id))),
            }
        }
        return Ok(String::new());
    }

    Ok(not_found(cmd))
}

fn not_found(cmd: &str) -> String {
    format!("{}: command not found", cmd)
}
