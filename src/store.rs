//! In-memory task store.
//!
//! The entire persistence layer of the service: a mapping from caller-supplied
//! task IDs to task records. The map is guarded by an `RwLock` so concurrent
//! requests cannot race on it. The store lives as long as the process; nothing
//! is written to disk.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Error from task store operations.
///
/// The `NotFound` display text is surfaced verbatim as the response body of
/// failed lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("task with this id not found")]
    NotFound,
}

/// A single task record.
///
/// All fields are optional on parse and default to their zero value when
/// absent from the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Caller-supplied identifier, used as the store key
    pub id: String,

    /// Free-text description
    pub description: String,

    /// Free-text note
    pub note: String,

    /// Names of applications associated with the task
    pub applications: Vec<String>,
}

/// In-memory store mapping task id to task record.
///
/// Cloning is cheap; clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Arc<RwLock<HashMap<String, Task>>>,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the two records every fresh process
    /// starts with.
    pub fn seeded() -> Self {
        let seeds = [
            Task {
                id: "1".to_string(),
                description: "Finish the REST API exercise".to_string(),
                note: "If it ships today, tomorrow is a free day".to_string(),
                applications: vec![
                    "VS Code".to_string(),
                    "Terminal".to_string(),
                    "git".to_string(),
                ],
            },
            Task {
                id: "2".to_string(),
                description: "Test the REST API with Postman".to_string(),
                note: "Best done during development, each time the server restarts".to_string(),
                applications: vec![
                    "VS Code".to_string(),
                    "Terminal".to_string(),
                    "git".to_string(),
                    "Postman".to_string(),
                ],
            },
        ];

        let tasks = seeds.into_iter().map(|t| (t.id.clone(), t)).collect();
        Self {
            tasks: Arc::new(RwLock::new(tasks)),
        }
    }

    /// Snapshot of all current (id, task) pairs. Empty map if no tasks exist.
    pub async fn list(&self) -> HashMap<String, Task> {
        self.tasks.read().await.clone()
    }

    /// Get a single task by id.
    pub async fn get(&self, id: &str) -> Result<Task, StoreError> {
        self.tasks
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Insert or overwrite the record at `task.id`. Last write wins; an
    /// existing record with the same id is replaced wholesale.
    pub async fn put(&self, task: Task) {
        self.tasks.write().await.insert(task.id.clone(), task);
    }

    /// Remove the record with the given id.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.tasks
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
