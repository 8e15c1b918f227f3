use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Database file. Default: `<data_dir>/todos/todos.db`
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Border drawing style for the panels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Rounded,
    Plain,
    Double,
    Thick,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme overrides, slot name -> "#RRGGBB"
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub border: BorderStyle,
    /// Share of the main area given to the list panel
    #[serde(default = "default_list_width_percent")]
    pub list_width_percent: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            colors: HashMap::new(),
            border: BorderStyle::default(),
            list_width_percent: default_list_width_percent(),
        }
    }
}

impl UiConfig {
    /// List panel width share, clamped to something usable
    pub fn list_percent(&self) -> u16 {
        self.list_width_percent.clamp(20, 80)
    }
}

fn default_list_width_percent() -> u16 {
    40
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of off, error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Default: `todos.log` next to the database
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
