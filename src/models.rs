use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::schedule::format_reminder;

/// Represents a single task captured by the assistant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique identifier, assigned by the store in insertion order.
    pub id: u64,
    /// The user-supplied title. Lookups compare it case-insensitively.
    pub title: String,
    /// Free-text description, empty when the user skipped it.
    #[serde(default)]
    pub description: String,
    /// When the reminder for this task falls due, if one was set.
    #[serde(default)]
    pub reminder_at: Option<NaiveDateTime>,
    /// Whether the task has been completed.
    #[serde(default)]
    pub completed: bool,
    /// Set once a due reminder has been surfaced to the user.
    #[serde(default)]
    pub reminder_notified: bool,
}

impl Task {
    /// One-line rendering used by the task list panes.
    pub fn summary(&self) -> String {
        let desc = if self.description.trim().is_empty() {
            String::new()
        } else {
            format!(" - {}", self.description)
        };
        let reminder = match self.reminder_at {
            Some(at) => format!(" (Reminder: {})", format_reminder(at)),
            None => String::new(),
        };
        let status = if self.completed { "✅ " } else { "" };
        format!("{}{}{}{}", status, self.title, desc, reminder)
    }
}

/// The three subject areas the assistant can talk about.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Password,
    Phishing,
    Browsing,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Password, Topic::Phishing, Topic::Browsing];

    /// Human-readable name, as shown when echoing a favourite topic back.
    pub fn name(self) -> &'static str {
        match self {
            Topic::Password => "password safety",
            Topic::Phishing => "phishing",
            Topic::Browsing => "safe browsing",
        }
    }

    /// Resolves a topic key or alias ("password", "safe browsing", ...).
    pub fn from_key(key: &str) -> Option<Topic> {
        match key.trim().to_lowercase().as_str() {
            "password" | "password safety" => Some(Topic::Password),
            "phishing" => Some(Topic::Phishing),
            "browsing" | "safe browsing" => Some(Topic::Browsing),
            _ => None,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Emotional cue picked up from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Anxious,
    Curious,
    Frustrated,
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub prompt: String,
    /// Labeled choices in display order, e.g. "A) Reply with your password".
    pub options: Vec<String>,
    /// Single letter, always upper-cased.
    pub correct_answer: String,
}

impl QuizQuestion {
    pub fn new(prompt: impl Into<String>, options: &[&str], correct_answer: &str) -> Self {
        QuizQuestion {
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct_answer.trim().to_uppercase(),
        }
    }
}

/// A timestamped entry in the user-visible activity log.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub at: NaiveDateTime,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.at.format("%Y-%m-%d %H:%M:%S"), self.message)
    }
}
