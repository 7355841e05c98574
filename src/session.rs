use chrono::{Local, NaiveDateTime};
use crate::conversation::ConversationState;
use crate::models::{LogEntry, Topic};
use crate::quiz::QuizSession;
use crate::store::TaskStore;

/// All mutable state of one running conversation.
///
/// Passed explicitly into every interpreter call; nothing here is global.
#[derive(Debug, Default)]
pub struct Session {
    pub last_topic: Option<Topic>,
    pub favorite_topic: Option<Topic>,
    pub state: ConversationState,
    pub quiz: Option<QuizSession>,
    pub tasks: TaskStore,
    activity_log: Vec<LogEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry stamped with the current local time.
    pub fn log(&mut self, message: impl Into<String>) {
        self.log_at(Local::now().naive_local(), message);
    }

    pub fn log_at(&mut self, at: NaiveDateTime, message: impl Into<String>) {
        self.activity_log.push(LogEntry { at, message: message.into() });
    }

    pub fn activity_log(&self) -> &[LogEntry] {
        &self.activity_log
    }

    pub fn quiz_in_progress(&self) -> bool {
        self.quiz.is_some()
    }
}
