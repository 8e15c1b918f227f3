use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

const APP_DIR: &str = "todos";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// `<config_dir>/todos/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

/// `<data_dir>/todos/todos.db`, falling back to `./data/todos.db`
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR).join("todos.db"))
        .unwrap_or_else(|| PathBuf::from("data").join("todos.db"))
}

/// Read the config file. A missing file yields the defaults; a file that
/// exists but does not parse is an error.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load config from an explicit path, or the default location
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) => read_config(&path),
            None => Ok(Config::default()),
        },
    }
}

/// Resolve the database path: CLI flag, then `[store] path`, then the default
pub fn resolve_db_path(cli_db: Option<&Path>, config: &Config) -> PathBuf {
    cli_db
        .map(Path::to_path_buf)
        .or_else(|| config.store.path.clone())
        .unwrap_or_else(default_db_path)
}

/// Resolve the log file: `[log] file`, else `todos.log` beside the database
pub fn resolve_log_path(config: &Config, db_path: &Path) -> PathBuf {
    config.log.file.clone().unwrap_or_else(|| {
        db_path
            .parent()
            .map(|p| p.join("todos.log"))
            .unwrap_or_else(|| PathBuf::from("todos.log"))
    })
}
