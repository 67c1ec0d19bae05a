//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::shell::{Element, ElementId, Profile, Region};
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub page: PageConfig,
}

/// Which shell generation to run and how its prompt looks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            prompt: default_prompt(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default)]
    pub show_timestamps: bool,
    #[serde(default = "default_true")]
    pub cursor_blink: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            show_timestamps: false,
            cursor_blink: true,
        }
    }
}

/// Diagnostic log settings. The log goes to a file since the TUI owns stdout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

/// The panels around the shell. These are what `rm` removes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_elements")]
    pub elements: Vec<ElementConfig>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            elements: default_elements(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionConfig {
    Header,
    Sidebar,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementConfig {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_region")]
    pub region: RegionConfig,
    #[serde(default)]
    pub lines: Vec<String>,
}

impl From<&ElementConfig> for Element {
    fn from(cfg: &ElementConfig) -> Self {
        Element {
            id: ElementId::new(cfg.id.clone()),
            title: cfg.title.clone(),
            region: match cfg.region {
                RegionConfig::Header => Region::Header,
                RegionConfig::Sidebar => Region::Sidebar,
            },
            lines: cfg.lines.clone(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_prompt() -> String {
    "guest@fauxterm:~$ ".to_string()
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_log_file() -> String {
    "~/.local/share/fauxterm/fauxterm.log".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_region() -> RegionConfig {
    RegionConfig::Sidebar
}

fn element(id: &str, title: &str, region: RegionConfig, lines: &[&str]) -> ElementConfig {
    ElementConfig {
        id: id.into(),
        title: title.into(),
        region,
        lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}

fn default_elements() -> Vec<ElementConfig> {
    vec![
        element(
            "banner",
            "",
            RegionConfig::Header,
            &[
                r" __                  _                      ",
                r"/ _| __ _ _   ___  _| |_ ___ _ __ _ __ ___  ",
                r"| |_ / _` | | | \ \/ / __/ _ \ '__| '_ ` _ \ ",
                r"|  _| (_| | |_| |>  <| ||  __/ |  | | | | | |",
                r"|_|  \__,_|\__,_/_/\_\\__\___|_|  |_| |_| |_|",
            ],
        ),
        element(
            "motd",
            "motd",
            RegionConfig::Sidebar,
            &["Welcome, guest.", "Type a command and", "press Enter."],
        ),
        element(
            "about",
            "about",
            RegionConfig::Sidebar,
            &["A shell that knows", "almost no commands.", "Try `rm motd`."],
        ),
        element(
            "keys",
            "keys",
            RegionConfig::Sidebar,
            &["Tab   cycle focus", "Esc   back to input", "C-c   quit"],
        ),
    ]
}
