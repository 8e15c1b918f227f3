use std::fs::{self, File};
use std::path::Path;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Parse a level name; unknown names fall back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    let name = name.trim();
    if name.eq_ignore_ascii_case("warning") {
        return LevelFilter::Warn;
    }
    name.parse().unwrap_or(LevelFilter::Info)
}

/// Initialize the file logger. The TUI owns the terminal, so logs only ever
/// go to a file. Returns false if the file could not be opened (logging is
/// then disabled).
pub fn init_file_logger(path: &Path, level: LevelFilter) -> bool {
    if level == LevelFilter::Off {
        return false;
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        let _ = fs::create_dir_all(parent);
    }
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    match File::options().create(true).append(true).open(path) {
        Ok(log_file) => WriteLogger::init(level, log_config, log_file).is_ok(),
        Err(_) => false,
    }
}
