//! # todo - terminal to-do list manager
//!
//! A single-screen to-do list for the terminal: add, edit, complete, and
//! delete tasks from one keyboard-driven view, with the whole collection
//! mirrored to a local JSON file on every change.
//!
//! ## Quick start
//!
//! ```bash
//! # Launch the UI (storage at ~/.todo/tasks.json)
//! todo
//!
//! # Use a specific task file
//! todo --db ./tasks.json
//! ```
//!
//! ## Key bindings
//!
//! - `a` - add a task, `e`/`Enter` - edit the selected task
//! - `t`/`Space` - toggle completed, `d` - delete (asks for confirmation)
//! - `h` - help, `q` - quit
//!
//! State is held in one owned [`store::TaskStore`]; every mutation goes
//! through a named operation and is followed by a flush through the
//! [`store::Storage`] backend. Reads happen once at startup; malformed or
//! missing data degrades to an empty list.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use cli::Cli;
use store::JsonFileStorage;

fn main() {
    let cli = Cli::parse();

    let db_path = cli.db.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let data_dir = PathBuf::from(home).join(".todo");
        if let Err(e) = std::fs::create_dir_all(&data_dir) {
            eprintln!("Failed to create data directory {}: {}", data_dir.display(), e);
            std::process::exit(1);
        }
        data_dir.join("tasks.json")
    });

    if let Err(e) = tui::run::run_tui(JsonFileStorage::new(db_path)) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}
