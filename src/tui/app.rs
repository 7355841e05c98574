use std::time::{Duration, Instant};
use chrono::{Local, NaiveDateTime};
use ratatui::widgets::TableState;
use tracing::debug;
use crate::commands::{build_interpreter, greeting};
use crate::config::Config;
use crate::interpreter::DialogueInterpreter;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Tasks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

pub struct App {
    pub interpreter: DialogueInterpreter,
    pub session: Session,
    pub transcript: Vec<(Speaker, String)>,
    pub input_buffer: String,
    pub focus: Focus,
    pub task_state: TableState,
    pub should_quit: bool,
    reminder_interval: Duration,
    last_poll: Instant,
}

impl App {
    /// Creates a new App with an empty session and the greeting shown.
    pub fn new(config: &Config) -> App {
        let mut app = App {
            interpreter: build_interpreter(config),
            session: Session::new(),
            transcript: Vec::new(),
            input_buffer: String::new(),
            focus: Focus::Input,
            task_state: TableState::default(),
            should_quit: false,
            reminder_interval: Duration::from_secs(config.reminder_interval_secs),
            last_poll: Instant::now(),
        };
        app.push_bot(greeting(config));
        app
    }

    /// Time left until the next reminder scan is due.
    pub fn until_next_poll(&self) -> Duration {
        self.reminder_interval.saturating_sub(self.last_poll.elapsed())
    }

    /// Runs a reminder scan if the interval has elapsed.
    pub fn tick(&mut self) {
        if self.last_poll.elapsed() >= self.reminder_interval {
            self.last_poll = Instant::now();
            self.poll_reminders(Local::now().naive_local());
        }
    }

    pub fn poll_reminders(&mut self, now: NaiveDateTime) {
        let lines = self.interpreter.poll_reminders(&mut self.session, now);
        self.push_bot(lines);
    }

    /// Sends the input line to the interpreter.
    pub fn submit(&mut self) {
        let message = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        if message.is_empty() {
            return;
        }
        self.transcript.push((Speaker::User, message.clone()));
        let replies = self.interpreter.process(&mut self.session, &message);
        debug!(count = replies.len(), "replies produced");
        self.push_bot(replies);
        self.clamp_selection();
    }

    pub fn start_quiz(&mut self) {
        let lines = self.interpreter.start_quiz(&mut self.session);
        self.push_bot(lines);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Tasks,
            Focus::Tasks => Focus::Input,
        };
        self.clamp_selection();
    }

    /// Selects the next task in the list.
    pub fn next(&mut self) {
        let len = self.session.tasks.len();
        if len == 0 {
            return;
        }
        let i = match self.task_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.task_state.select(Some(i));
    }

    /// Selects the previous task in the list.
    pub fn previous(&mut self) {
        let len = self.session.tasks.len();
        if len == 0 {
            return;
        }
        let i = match self.task_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.task_state.select(Some(i));
    }

    /// Marks the currently selected task as complete.
    pub fn complete_selected(&mut self) {
        if let Some(i) = self.task_state.selected() {
            let lines = self.interpreter.complete_task_at(&mut self.session, i);
            self.push_bot(lines);
        }
    }

    /// Deletes the currently selected task.
    pub fn delete_selected(&mut self) {
        if let Some(i) = self.task_state.selected() {
            let lines = self.interpreter.delete_task_at(&mut self.session, i);
            self.push_bot(lines);
            self.clamp_selection();
        }
    }

    fn push_bot(&mut self, lines: Vec<String>) {
        for line in lines {
            for part in line.lines() {
                self.transcript.push((Speaker::Bot, part.to_string()));
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.session.tasks.len();
        if len == 0 {
            self.task_state.select(None);
        } else if let Some(i) = self.task_state.selected() {
            if i >= len {
                self.task_state.select(Some(len - 1));
            }
        } else {
            self.task_state.select(Some(0));
        }
    }
}
