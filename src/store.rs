use chrono::NaiveDateTime;
use tracing::debug;
use crate::error::{BotError, BotResult};
use crate::models::Task;

/// In-memory, insertion-ordered task collection.
///
/// Lives exactly as long as the session that owns it; nothing is written
/// to disk.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new, uncompleted task. Callers reject blank titles first.
    pub fn add(&mut self, title: &str, description: &str, reminder_at: Option<NaiveDateTime>) -> Task {
        self.next_id += 1;
        let task = Task {
            id: self.next_id,
            title: title.to_string(),
            description: description.to_string(),
            reminder_at,
            completed: false,
            reminder_notified: false,
        };
        self.tasks.push(task.clone());
        debug!(id = task.id, title = %task.title, "task added to store");
        task
    }

    /// First task whose title matches `name`, ignoring case.
    pub fn find_by_title(&self, name: &str) -> BotResult<&Task> {
        self.position(name)
            .map(|i| &self.tasks[i])
            .ok_or_else(|| BotError::NotFound(name.trim().to_string()))
    }

    /// Marks the first matching task completed and returns its stored title.
    pub fn mark_completed(&mut self, name: &str) -> BotResult<String> {
        let i = self
            .position(name)
            .ok_or_else(|| BotError::NotFound(name.trim().to_string()))?;
        self.complete_index(i)
    }

    /// Removes the first matching task and returns it.
    pub fn delete(&mut self, name: &str) -> BotResult<Task> {
        let i = self
            .position(name)
            .ok_or_else(|| BotError::NotFound(name.trim().to_string()))?;
        Ok(self.tasks.remove(i))
    }

    /// Completes the task at list position `index`.
    pub fn complete_at(&mut self, index: usize) -> BotResult<String> {
        if index >= self.tasks.len() {
            return Err(BotError::NoSuchPosition(index + 1));
        }
        self.complete_index(index)
    }

    /// Removes the task at list position `index`.
    pub fn delete_at(&mut self, index: usize) -> BotResult<Task> {
        if index >= self.tasks.len() {
            return Err(BotError::NoSuchPosition(index + 1));
        }
        Ok(self.tasks.remove(index))
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks whose reminder is due at `now` and has not yet been surfaced,
    /// in insertion order. Does not mark anything; see [`TaskStore::mark_notified`].
    pub fn due_reminders(&self, now: NaiveDateTime) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| !t.completed && !t.reminder_notified)
            .filter(|t| t.reminder_at.is_some_and(|at| at <= now))
            .cloned()
            .collect()
    }

    /// Records that the reminder for task `id` has been shown.
    pub fn mark_notified(&mut self, id: u64) {
        if let Some(t) = self.tasks.iter_mut().find(|t| t.id == id) {
            t.reminder_notified = true;
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.tasks.iter().position(|t| t.title.to_lowercase() == wanted)
    }

    fn complete_index(&mut self, i: usize) -> BotResult<String> {
        let t = &mut self.tasks[i];
        if t.completed {
            return Err(BotError::AlreadyCompleted(t.title.clone()));
        }
        t.completed = true;
        Ok(t.title.clone())
    }
}
