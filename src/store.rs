use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TaskdeckError};
use crate::model::{Task, TaskId};

/// Persistence boundary: one JSON file holding the whole task collection.
/// Every operation round-trips through the file, so the persisted form is
/// always the source of truth. Single-process, last-write-wins.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full collection. An absent file is an empty list; a file
    /// that exists but does not parse is an error, never silently empty,
    /// since the next save would overwrite it.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|e| {
            TaskdeckError::Storage(format!(
                "{} is not a valid task list: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(tasks)
    }

    /// Overwrites the whole collection. Writes to a sibling temp file and
    /// renames over, so a crash mid-write cannot truncate the store.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(tasks)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    /// Removes the store file entirely rather than writing an empty list.
    /// Used only by delete-all. A missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Appends one task and persists. Insertion order is display order.
    pub fn append(&self, task: Task) -> Result<()> {
        let mut tasks = self.load()?;
        tasks.push(task);
        self.save(&tasks)
    }

    /// Flips `completed` on the matching task. Returns whether a task with
    /// that id existed; an absent id leaves the store untouched.
    pub fn toggle(&self, id: TaskId) -> Result<bool> {
        let mut tasks = self.load()?;
        match tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.save(&tasks)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes the matching task, keeping the relative order of the rest.
    /// Returns whether anything was removed.
    pub fn remove(&self, id: TaskId) -> Result<bool> {
        let mut tasks = self.load()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Ok(false);
        }
        self.save(&tasks)?;
        Ok(true)
    }
}
