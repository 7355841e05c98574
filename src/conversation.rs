//! Multi-turn task dialogues.
//!
//! Each pending step is one variant of [`ConversationState`]; the data the
//! wizard has collected so far travels inside the variant, so finishing or
//! abandoning a wizard drops it along with the state.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info};
use crate::error::BotError;
use crate::schedule::{default_reminder_time, format_reminder, parse_date, parse_time};
use crate::session::Session;

pub const ASK_TITLE: &str = "What task would you like to add? Please specify the task title.";
pub const ASK_DESCRIPTION_CHOICE: &str = "Got it. Would you like to add a description? (yes/no)";
pub const ASK_DESCRIPTION_TEXT: &str = "Please enter the task description.";
pub const ASK_REMINDER_CHOICE: &str = "Would you like to add a reminder? (yes/no)";
pub const ASK_REMINDER_DATE: &str = "Please enter the reminder date in format yyyy-MM-dd (e.g., 2025-07-01):";
pub const ASK_REMINDER_TIME: &str = "Great! Now please enter the reminder time in 24-hour format HH:mm (e.g., 14:30):";
pub const ASK_COMPLETE_NAME: &str = "Please specify the exact task title you want to mark as completed.";
pub const ASK_DELETE_NAME: &str = "Please specify the exact task title you want to delete.";

/// Title and description gathered before the reminder step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTask {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    None,
    AwaitingTaskTitle,
    AwaitingDescriptionChoice { title: String },
    AwaitingDescriptionText { title: String },
    AwaitingReminderChoice(PendingTask),
    AwaitingReminderDate(PendingTask),
    AwaitingReminderTime { task: PendingTask, date: NaiveDate },
    AwaitingMarkCompleteName,
    AwaitingDeleteName,
}

impl ConversationState {
    pub fn is_idle(&self) -> bool {
        matches!(self, ConversationState::None)
    }
}

/// Feeds one line to the pending dialogue and returns the reply lines.
///
/// Must only be called while `session.state` is not `None`.
pub fn handle(session: &mut Session, input: &str) -> Vec<String> {
    let trimmed = input.trim();
    let answer = trimmed.to_lowercase();
    let state = std::mem::take(&mut session.state);
    debug!(?state, "conversation step");

    let (next, lines) = match state {
        ConversationState::None => (ConversationState::None, Vec::new()),

        ConversationState::AwaitingTaskTitle => {
            if trimmed.is_empty() {
                (ConversationState::AwaitingTaskTitle, vec!["Please specify the task title.".to_string()])
            } else {
                (
                    ConversationState::AwaitingDescriptionChoice { title: trimmed.to_string() },
                    vec![ASK_DESCRIPTION_CHOICE.to_string()],
                )
            }
        }

        ConversationState::AwaitingDescriptionChoice { title } => match answer.as_str() {
            "yes" => (
                ConversationState::AwaitingDescriptionText { title },
                vec![ASK_DESCRIPTION_TEXT.to_string()],
            ),
            "no" => skip_description(title),
            _ => (
                ConversationState::AwaitingDescriptionChoice { title },
                vec!["Please reply 'yes' or 'no'. Would you like to add a description?".to_string()],
            ),
        },

        ConversationState::AwaitingDescriptionText { title } => match answer.as_str() {
            "yes" => (
                ConversationState::AwaitingDescriptionText { title },
                vec![ASK_DESCRIPTION_TEXT.to_string()],
            ),
            "no" => skip_description(title),
            _ => (
                ConversationState::AwaitingReminderChoice(PendingTask {
                    title,
                    description: trimmed.to_string(),
                }),
                vec![ASK_REMINDER_CHOICE.to_string()],
            ),
        },

        ConversationState::AwaitingReminderChoice(task) => reminder_date_step(session, task, trimmed, &answer, false),
        ConversationState::AwaitingReminderDate(task) => reminder_date_step(session, task, trimmed, &answer, true),

        ConversationState::AwaitingReminderTime { task, date } => {
            if answer == "no" {
                let lines = finalize(session, task, Some(date.and_time(default_reminder_time())));
                (ConversationState::None, lines)
            } else {
                match parse_time(trimmed) {
                    Ok(time) => {
                        let lines = finalize(session, task, Some(date.and_time(time)));
                        (ConversationState::None, lines)
                    }
                    Err(_) => (
                        ConversationState::AwaitingReminderTime { task, date },
                        vec!["That doesn't look like a valid time. Please enter the time in 24-hour format HH:mm (e.g., 14:30), or type 'no' to skip setting the reminder time.".to_string()],
                    ),
                }
            }
        }

        ConversationState::AwaitingMarkCompleteName => {
            if trimmed.is_empty() {
                (
                    ConversationState::AwaitingMarkCompleteName,
                    vec!["Please specify the task name you want to mark as completed.".to_string()],
                )
            } else {
                let line = match session.tasks.mark_completed(trimmed) {
                    Ok(title) => {
                        info!(%title, "task marked completed");
                        session.log(format!("Task '{}' marked as completed.", title));
                        format!("Task '{}' marked as completed.", title)
                    }
                    Err(e) => e.to_string(),
                };
                (ConversationState::None, vec![line])
            }
        }

        ConversationState::AwaitingDeleteName => {
            if trimmed.is_empty() {
                (
                    ConversationState::AwaitingDeleteName,
                    vec!["Please specify the task name you want to delete.".to_string()],
                )
            } else {
                let line = match session.tasks.delete(trimmed) {
                    Ok(task) => {
                        info!(title = %task.title, "task deleted");
                        session.log(format!("Task '{}' deleted.", task.title));
                        format!("Task '{}' deleted.", task.title)
                    }
                    Err(e) => e.to_string(),
                };
                (ConversationState::None, vec![line])
            }
        }
    };

    session.state = next;
    lines
}

fn skip_description(title: String) -> (ConversationState, Vec<String>) {
    (
        ConversationState::AwaitingReminderChoice(PendingTask { title, description: String::new() }),
        vec![ASK_REMINDER_CHOICE.to_string()],
    )
}

/// Shared handling for the two steps that accept yes/no or a date.
fn reminder_date_step(
    session: &mut Session,
    task: PendingTask,
    trimmed: &str,
    answer: &str,
    date_requested: bool,
) -> (ConversationState, Vec<String>) {
    match answer {
        "yes" => (ConversationState::AwaitingReminderDate(task), vec![ASK_REMINDER_DATE.to_string()]),
        "no" => {
            let lines = finalize(session, task, None);
            (ConversationState::None, lines)
        }
        _ => match parse_date(trimmed) {
            Ok(date) => (
                ConversationState::AwaitingReminderTime { task, date },
                vec![ASK_REMINDER_TIME.to_string()],
            ),
            Err(BotError::InvalidFormat { .. }) if date_requested => (
                ConversationState::AwaitingReminderDate(task),
                vec!["That doesn't look like a valid date. Please enter the reminder date in yyyy-MM-dd format (e.g., 2025-07-01), or type 'no' to skip the reminder.".to_string()],
            ),
            Err(_) => (
                ConversationState::AwaitingReminderChoice(task),
                vec!["I didn't understand that. Please reply 'yes' to set a reminder, 'no' to skip, or enter the reminder date in yyyy-MM-dd format.".to_string()],
            ),
        },
    }
}

/// Stores the collected task and reports it.
fn finalize(session: &mut Session, task: PendingTask, reminder_at: Option<NaiveDateTime>) -> Vec<String> {
    let stored = session.tasks.add(&task.title, &task.description, reminder_at);
    info!(id = stored.id, title = %stored.title, reminder = ?reminder_at, "task created by wizard");

    let mut lines = vec![format!("Task '{}' added successfully!", stored.title)];
    session.log(format!("Task '{}' added.", stored.title));
    if let Some(at) = reminder_at {
        let when = format_reminder(at);
        lines.push(format!("Reminder set for {}.", when));
        session.log(format!("Reminder set for task '{}' at {}.", stored.title, when));
    }
    lines
}
