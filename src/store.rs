//! Task collection and persistence.
//!
//! This module provides the `TaskStore` that owns the ordered task list and
//! funnels every mutation through named operations, plus the `Storage` trait
//! and its JSON-file implementation. Persistence is an observer: after each
//! successful mutation the caller flushes the whole collection through a
//! `Storage` backend, so the on-disk format can be swapped without touching
//! the state-transition code.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

use chrono::Utc;

use crate::task::Task;

/// Pluggable persistence backend for the task collection.
pub trait Storage {
    /// Read the persisted collection. An absent or unreadable backing file
    /// degrades to an empty list.
    fn load(&self) -> Vec<Task>;

    /// Write the whole collection.
    fn save(&self, tasks: &[Task]) -> std::io::Result<()>;
}

/// JSON-file backend: one array holding every task.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            return Vec::new();
        }
        let mut buf = String::new();
        match File::open(&self.path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => match serde_json::from_str(&buf) {
                Ok(tasks) => tasks,
                Err(e) => {
                    eprintln!("Error parsing task file, starting fresh: {e}");
                    Vec::new()
                }
            },
            Err(e) => {
                eprintln!("Error reading task file, starting fresh: {e}");
                Vec::new()
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> std::io::Result<()> {
        // Atomic-ish write via temp + rename.
        let tmp = self.path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(tasks)?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory task collection, insertion-ordered.
///
/// Append-only except for `remove`; ids are unique within the collection.
#[derive(Debug, Default)]
pub struct TaskStore {
    pub tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Mint a fresh id from the current time, bumped past the largest
    /// existing id so two tasks created within the same millisecond stay
    /// distinct.
    fn next_id(&self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let max = self.tasks.iter().map(|t| t.id).max().unwrap_or(0);
        now.max(max + 1)
    }

    /// Append a new task with a fresh id and `completed = false`.
    pub fn add(&mut self, name: &str, description: &str) -> u64 {
        let id = self.next_id();
        self.tasks.push(Task {
            id,
            name: name.to_string(),
            description: description.to_string(),
            completed: false,
        });
        id
    }

    /// Overwrite the name and description of the task with the given id,
    /// leaving its id and completion flag untouched.
    pub fn update(&mut self, id: u64, name: &str, description: &str) -> bool {
        match self.get_mut(id) {
            Some(t) => {
                t.name = name.to_string();
                t.description = description.to_string();
                true
            }
            None => false,
        }
    }

    /// Flip the completion flag of the task with the given id.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.get_mut(id) {
            Some(t) => {
                t.completed = !t.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the task with the given id.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Get a task by id.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a task by id.
    fn get_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
