//! Top-level dispatch for one line of user input.
//!
//! Order matters: activity-log commands, then a running quiz, then a pending
//! wizard step, then the static rule table. The first rule that matches
//! produces the reply.

use std::sync::LazyLock;
use chrono::NaiveDateTime;
use regex::Regex;
use tracing::{debug, info};
use crate::conversation::{self, ConversationState, ASK_COMPLETE_NAME, ASK_DELETE_NAME, ASK_TITLE};
use crate::error::{BotError, BotResult};
use crate::models::{QuizQuestion, Sentiment, Topic};
use crate::quiz::{default_questions, QuizProgress, QuizSession};
use crate::schedule::format_reminder;
use crate::sentiment;
use crate::session::Session;
use crate::tips::{self, TipCatalog};

pub const FAREWELL: &str = "Goodbye! Stay safe online!";
pub const FALLBACK: &str = "I didn't quite understand that. Could you rephrase your question or ask something related to cybersecurity?";
pub const DEFAULT_RECENT_LOG_LEN: usize = 10;

/// Topic keys in scan order. Multi-word aliases come first so the shorter
/// key they contain does not claim the match.
const TOPIC_KEYS: &[(&str, Topic)] = &[
    ("password safety", Topic::Password),
    ("safe browsing", Topic::Browsing),
    ("password", Topic::Password),
    ("phishing", Topic::Phishing),
    ("browsing", Topic::Browsing),
];

const RECENT_LOG_COMMANDS: &[&str] = &["show activity log", "what have you done for me?", "show my activity log"];
const FULL_LOG_COMMAND: &str = "show all logs";
const QUIZ_COMMANDS: &[&str] = &["start quiz", "start the quiz", "take quiz", "take the quiz", "quiz me"];
const FOLLOW_UP_KEYWORDS: &[&str] = &["another", "more", "explain", "tell me again", "i'm confused"];
const ADD_TASK_KEYWORDS: &[&str] = &["add task", "add a task", "create task", "new task"];
const REMINDER_KEYWORDS: &[&str] = &["remind me to", "set reminder to"];
/// Case-insensitive matchers for the title-bearing keywords, in priority order.
static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ADD_TASK_KEYWORDS
        .iter()
        .chain(REMINDER_KEYWORDS.iter())
        .map(|kw| Regex::new(&format!("(?i){}", regex::escape(kw))).expect("escaped keyword is a valid pattern"))
        .collect()
});
const COMPLETE_PREFIXES: &[&str] = &["mark completed", "complete task", "finish task", "done with task", "mark task"];
const DELETE_PREFIXES: &[&str] = &["delete task", "remove task", "delete a task"];

/// The rule engine. Holds only the collaborators that outlive a single
/// conversation; everything conversational lives in the [`Session`].
pub struct DialogueInterpreter {
    tips: TipCatalog,
    questions: Vec<QuizQuestion>,
    recent_log_len: usize,
}

impl DialogueInterpreter {
    pub fn new(tips: TipCatalog) -> Self {
        DialogueInterpreter {
            tips,
            questions: default_questions(),
            recent_log_len: DEFAULT_RECENT_LOG_LEN,
        }
    }

    /// Replaces the quiz question bank used by future quiz starts.
    pub fn with_questions(mut self, questions: Vec<QuizQuestion>) -> Self {
        self.questions = questions;
        self
    }

    /// Sets how many entries "show activity log" lists (at least one).
    pub fn with_recent_log_len(mut self, len: usize) -> Self {
        self.recent_log_len = len.max(1);
        self
    }

    /// Interprets one line of input against `session` and returns the
    /// reply lines in display order.
    pub fn process(&mut self, session: &mut Session, input: &str) -> Vec<String> {
        let lowered = input.trim().to_lowercase();
        debug!(input = %lowered, "processing input");

        if RECENT_LOG_COMMANDS.contains(&lowered.as_str()) {
            return self.recent_log(session);
        }
        if lowered == FULL_LOG_COMMAND {
            return full_log(session);
        }

        if let Some(quiz) = session.quiz.as_mut() {
            return match quiz.submit_answer(input) {
                QuizProgress::Next(lines) => lines,
                QuizProgress::Finished { score, total, lines } => {
                    session.quiz = None;
                    session.log(format!("Quiz completed with score {}/{}.", score, total));
                    lines
                }
            };
        }

        if !session.state.is_idle() {
            return conversation::handle(session, input);
        }

        self.apply_rules(session, input, &lowered)
    }

    fn apply_rules(&mut self, session: &mut Session, input: &str, lowered: &str) -> Vec<String> {
        if lowered.contains("exit") || lowered.contains("bye") {
            return vec![FAREWELL.to_string()];
        }

        if QUIZ_COMMANDS.iter().any(|c| lowered.contains(c)) {
            return self.start_quiz(session);
        }

        if lowered.contains("i'm interested in") || lowered.contains("my favorite topic is") {
            return match scan_topic(lowered) {
                Some(topic) => {
                    session.favorite_topic = Some(topic);
                    info!(%topic, "favorite topic set");
                    session.log(format!("User favorite topic set to '{}'.", topic));
                    vec![format!(
                        "Great! I'll remember that you're interested in {}. It's a crucial part of staying safe online.",
                        topic
                    )]
                }
                None => vec!["Thanks for sharing! I'll try to remember that.".to_string()],
            };
        }

        if lowered.contains("remind me my topic") || lowered.contains("what's my favorite") {
            return vec![match session.favorite_topic {
                Some(topic) => format!("You told me you're interested in {}. That's a smart choice!", topic),
                None => "You haven't told me your favorite topic yet. Feel free to share it!".to_string(),
            }];
        }

        if let Some(feeling) = sentiment::classify(lowered) {
            let mut lines = vec![sentiment::response(feeling).to_string()];
            if feeling == Sentiment::Anxious {
                session.last_topic = Some(Topic::Phishing);
                lines.push(self.tips.tip(Topic::Phishing));
            }
            return lines;
        }

        if let Some(reply) = small_talk(lowered) {
            return vec![reply.to_string()];
        }

        if let Some(rest) = lowered.strip_prefix("what is ") {
            return vec![match Topic::from_key(rest) {
                Some(topic) => tips::definition(topic).to_string(),
                None => "I'm not sure what that topic is. You can ask me about phishing, password safety, or safe browsing.".to_string(),
            }];
        }

        if FOLLOW_UP_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            return vec![match session.last_topic {
                Some(topic) => self.tips.tip(topic),
                None => "Could you clarify what topic you're referring to? You can ask about password safety, phishing, or safe browsing.".to_string(),
            }];
        }

        if is_task_command(lowered) {
            return begin_task_wizard(session, extract_task_title(input));
        }

        if COMPLETE_PREFIXES.iter().any(|p| lowered.starts_with(p)) {
            session.state = ConversationState::AwaitingMarkCompleteName;
            return vec![ASK_COMPLETE_NAME.to_string()];
        }

        if DELETE_PREFIXES.iter().any(|p| lowered.starts_with(p)) {
            session.state = ConversationState::AwaitingDeleteName;
            return vec![ASK_DELETE_NAME.to_string()];
        }

        if let Some(topic) = scan_topic(lowered) {
            session.last_topic = Some(topic);
            return vec![self.tips.tip(topic)];
        }

        vec![FALLBACK.to_string()]
    }

    /// Starts a fresh quiz over the configured bank, replacing any quiz in
    /// progress.
    pub fn start_quiz(&self, session: &mut Session) -> Vec<String> {
        let (quiz, lines) = QuizSession::start(self.questions.clone());
        session.log("Quiz started.");
        if quiz.is_finished() {
            session.quiz = None;
            session.log(format!("Quiz completed with score {}/{}.", quiz.score(), quiz.total()));
        } else {
            session.quiz = Some(quiz);
        }
        lines
    }

    /// Surfaces every reminder due at `now` exactly once.
    pub fn poll_reminders(&self, session: &mut Session, now: NaiveDateTime) -> Vec<String> {
        let due = session.tasks.due_reminders(now);
        let mut lines = Vec::with_capacity(due.len());
        for task in due {
            info!(id = task.id, title = %task.title, "reminder due");
            lines.push(format!("[Reminder] Task '{}' is due now or soon!", task.title));
            session.log(format!("Reminder triggered for task '{}'.", task.title));
            session.tasks.mark_notified(task.id);
        }
        lines
    }

    /// Adds a task without going through the wizard, as the task panel does.
    pub fn add_task_direct(
        &self,
        session: &mut Session,
        title: &str,
        description: &str,
        reminder_at: Option<NaiveDateTime>,
    ) -> BotResult<Vec<String>> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BotError::EmptyInput);
        }
        let task = session.tasks.add(title, description.trim(), reminder_at);
        info!(id = task.id, title = %task.title, "task added directly");
        let mut lines = vec![format!("Task added: '{}'.", task.title)];
        session.log(format!("Task '{}' added via UI.", task.title));
        if let Some(at) = reminder_at {
            let when = format_reminder(at);
            lines.push(format!("Reminder set for {}.", when));
            session.log(format!("Reminder set for task '{}' at {}.", task.title, when));
        }
        Ok(lines)
    }

    /// Completes the task at list position `index` (panel selection).
    pub fn complete_task_at(&self, session: &mut Session, index: usize) -> Vec<String> {
        match session.tasks.complete_at(index) {
            Ok(title) => {
                session.log(format!("Task '{}' marked as completed via UI.", title));
                vec![format!("Task marked as completed: {}", title)]
            }
            Err(e) => vec![e.to_string()],
        }
    }

    /// Deletes the task at list position `index` (panel selection).
    pub fn delete_task_at(&self, session: &mut Session, index: usize) -> Vec<String> {
        match session.tasks.delete_at(index) {
            Ok(task) => {
                session.log(format!("Task '{}' deleted via UI.", task.title));
                vec![format!("Task deleted: {}", task.title)]
            }
            Err(e) => vec![e.to_string()],
        }
    }

    fn recent_log(&self, session: &Session) -> Vec<String> {
        let log = session.activity_log();
        if log.is_empty() {
            return vec!["Activity log is empty.".to_string()];
        }
        let mut lines = vec![format!(
            "📋 Here's what I've done recently (showing latest {} actions):",
            self.recent_log_len
        )];
        let start = log.len().saturating_sub(self.recent_log_len);
        lines.extend(
            log[start..]
                .iter()
                .rev()
                .enumerate()
                .map(|(i, entry)| format!("{}. {}", i + 1, entry)),
        );
        if log.len() > self.recent_log_len {
            lines.push(format!("Type '{}' to see the full history.", FULL_LOG_COMMAND));
        }
        lines
    }
}

fn full_log(session: &Session) -> Vec<String> {
    let log = session.activity_log();
    if log.is_empty() {
        return vec!["Activity log is empty.".to_string()];
    }
    let mut lines = vec!["📋 Full activity log:".to_string()];
    lines.extend(log.iter().enumerate().map(|(i, entry)| format!("{}. {}", i + 1, entry)));
    lines
}

/// First topic key contained in `lowered`, in scan order.
fn scan_topic(lowered: &str) -> Option<Topic> {
    TOPIC_KEYS
        .iter()
        .find(|(key, _)| lowered.contains(key))
        .map(|(_, topic)| *topic)
}

fn small_talk(lowered: &str) -> Option<&'static str> {
    if lowered.contains("how are you") {
        Some("I'm just a chatbot, but I'm doing great! Thanks for asking. How can I help you with cybersecurity today?")
    } else if lowered.contains("what's your purpose") || lowered.contains("what do you do") {
        Some("I'm here to help you stay safe online! I can provide tips on password safety, phishing prevention, and safe browsing.")
    } else if lowered.contains("what can i ask you about") {
        Some("You can ask me about:\n- Password Safety\n- Phishing\n- Safe Browsing")
    } else {
        None
    }
}

fn is_task_command(lowered: &str) -> bool {
    lowered.starts_with("add task")
        || ["add a task", "create task", "new task", "remind me to", "set reminder"]
            .iter()
            .any(|kw| lowered.contains(kw))
}

/// Pulls a title out of phrases like "add task Buy milk" or
/// "remind me to renew my VPN", keeping the user's casing.
///
/// The first keyword present decides, even if nothing follows it.
fn extract_task_title(input: &str) -> Option<String> {
    TITLE_PATTERNS
        .iter()
        .find_map(|re| re.find(input))
        .map(|m| input[m.end()..].trim().to_string())
        .filter(|title| !title.is_empty())
}

fn begin_task_wizard(session: &mut Session, title: Option<String>) -> Vec<String> {
    match title {
        Some(title) => {
            debug!(%title, "task title taken from command");
            let line = format!(
                "Got it. You want to add task: '{}'. Would you like to add a description? (yes/no)",
                title
            );
            session.state = ConversationState::AwaitingDescriptionChoice { title };
            vec![line]
        }
        None => {
            session.state = ConversationState::AwaitingTaskTitle;
            vec![ASK_TITLE.to_string()]
        }
    }
}
