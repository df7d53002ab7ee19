//! Task data structure.
//!
//! This module defines the `Task` struct that represents a single to-do item.

use serde::{Deserialize, Serialize};

/// A user-created to-do item.
///
/// The id doubles as the creation timestamp in milliseconds since the Unix
/// epoch (see `TaskStore::next_id`), so insertion order and id order agree
/// for tasks minted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}
