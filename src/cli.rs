use std::path::PathBuf;

use clap::Parser;

/// Single-screen to-do list with local JSON storage.
/// Storage defaults to ~/.todo/tasks.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "todo", version, about = "Terminal to-do list manager")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long)]
    pub db: Option<PathBuf>,
}
