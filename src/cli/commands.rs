use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todos", about = "A terminal todo list", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the todo database
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all todos
    List,
    /// Show one todo
    Show(IdArgs),
    /// Add a todo
    Add(AddArgs),
    /// Toggle a todo between active and completed
    Done(IdArgs),
    /// Delete a todo
    Rm(IdArgs),
}

#[derive(Args)]
pub struct IdArgs {
    /// Todo id
    pub id: i64,
}

#[derive(Args)]
pub struct AddArgs {
    /// Todo title
    pub title: String,
    /// Longer description
    #[arg(long, short)]
    pub content: Option<String>,
}
