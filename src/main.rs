use clap::Parser;
use log::{error, info};
use todos::cli::commands::Cli;
use todos::cli::handlers;
use todos::io::{config_io, logging};
use todos::store::SqliteStore;
use todos::tui::render::ViewConfig;

fn main() {
    if let Err(e) = run(Cli::parse()) {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config(cli.config.as_deref())?;
    let db_path = config_io::resolve_db_path(cli.db.as_deref(), &config);

    let level = logging::parse_level(cli.log_level.as_deref().unwrap_or(config.log.level.as_str()));
    logging::init_file_logger(&config_io::resolve_log_path(&config, &db_path), level);
    info!("todos v{} starting", env!("CARGO_PKG_VERSION"));

    let mut store = SqliteStore::open(&db_path)?;

    match cli.command {
        // No subcommand → launch TUI
        None => todos::tui::run(Box::new(store), ViewConfig::from_config(&config.ui)),
        Some(command) => handlers::dispatch(command, cli.json, &mut store),
    }
}
