use std::io::{BufRead, Write};
use std::time::{Duration, Instant};
use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use tracing::{debug, info};
use crate::config::Config;
use crate::error::{BotError, BotResult};
use crate::interpreter::{DialogueInterpreter, FAREWELL};
use crate::models::{Task, Topic};
use crate::schedule::{default_reminder_time, format_reminder, parse_date, parse_time};
use crate::session::Session;
use crate::tips::TipCatalog;

/// Builds the interpreter described by `config`.
pub fn build_interpreter(config: &Config) -> DialogueInterpreter {
    let tips = match config.seed {
        Some(seed) => TipCatalog::seeded(seed),
        None => TipCatalog::new(),
    };
    DialogueInterpreter::new(tips).with_recent_log_len(config.recent_log_len)
}

/// Opening lines shown by both front-ends.
pub fn greeting(config: &Config) -> Vec<String> {
    let hello = match &config.user_name {
        Some(name) => format!("Hello, {}! I'm C.A.B, your Cybersecurity Awareness Bot.", name),
        None => "Hello! I'm C.A.B, your Cybersecurity Awareness Bot.".to_string(),
    };
    vec![
        hello,
        "Ask me about password safety, phishing, or safe browsing, add tasks and reminders, or say 'start quiz'.".to_string(),
    ]
}

/// Parses the argument of `/add`: `<title> [--due YYYY-MM-DD [HH:MM]]`.
///
/// A due date without a time defaults to 09:00.
pub fn parse_add_args(args: &str) -> BotResult<(String, Option<NaiveDateTime>)> {
    let (title, due) = match args.split_once("--due") {
        Some((title, due)) => (title.trim(), Some(due.trim())),
        None => (args.trim(), None),
    };
    if title.is_empty() {
        return Err(BotError::EmptyInput);
    }
    let reminder = match due {
        None => None,
        Some(due) => {
            let mut parts = due.split_whitespace();
            let date = parse_date(parts.next().unwrap_or(""))?;
            let time = match parts.next() {
                Some(t) => parse_time(t)?,
                None => default_reminder_time(),
            };
            Some(date.and_time(time))
        }
    };
    Ok((title.to_string(), reminder))
}

/// Renders the session's tasks as a table.
pub fn render_task_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks yet.".to_string();
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Description").add_attribute(Attribute::Bold),
            Cell::new("Reminder").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for (i, t) in tasks.iter().enumerate() {
        let reminder = t.reminder_at.map(format_reminder).unwrap_or_else(|| "-".into());
        let (status, color) = if t.completed {
            ("Done", Color::Green)
        } else if t.reminder_notified {
            ("Reminded", Color::Red)
        } else {
            ("Pending", Color::Yellow)
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&t.title),
            Cell::new(&t.description),
            Cell::new(reminder),
            Cell::new(status).fg(color),
        ]);
    }
    table.to_string()
}

/// Prints one tip for `topic` and returns.
pub fn cmd_tip(topic: &str, config: &Config) {
    match Topic::from_key(topic) {
        Some(t) => {
            let mut tips = match config.seed {
                Some(seed) => TipCatalog::seeded(seed),
                None => TipCatalog::new(),
            };
            println!("{}", tips.tip(t));
        }
        None => eprintln!("Unknown topic '{}'. Supported: password, phishing, browsing.", topic),
    }
}

/// Line-based chat loop.
///
/// Reads one message per line from `input` until EOF, `/quit`, or a
/// farewell, and polls due reminders before every prompt once the
/// configured interval has passed.
pub fn run_chat<R: BufRead, W: Write>(config: &Config, input: R, mut out: W) -> anyhow::Result<()> {
    let mut interpreter = build_interpreter(config);
    let mut session = Session::new();
    let interval = Duration::from_secs(config.reminder_interval_secs);
    let mut last_poll = Instant::now();

    for line in greeting(config) {
        writeln!(out, "Bot: {}", line)?;
    }

    let mut lines = input.lines();
    loop {
        if last_poll.elapsed() >= interval {
            last_poll = Instant::now();
            for reminder in interpreter.poll_reminders(&mut session, Local::now().naive_local()) {
                writeln!(out, "Bot: {}", reminder)?;
            }
        }

        write!(out, "You: ")?;
        out.flush()?;
        let Some(line) = lines.next() else { break };
        let line = line.context("failed to read input")?;
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        let replies = match message.split_once(' ').map_or((message, ""), |(c, rest)| (c, rest)) {
            ("/quit", _) => break,
            ("/tasks", _) => {
                writeln!(out, "{}", render_task_table(session.tasks.list()))?;
                continue;
            }
            ("/quiz", _) => interpreter.start_quiz(&mut session),
            ("/add", args) => match parse_add_args(args)
                .and_then(|(title, at)| interpreter.add_task_direct(&mut session, &title, "", at))
            {
                Ok(lines) => lines,
                Err(BotError::EmptyInput) => vec!["Please enter a task title.".to_string()],
                Err(e) => vec![format!("Could not add task: {}", e)],
            },
            _ => interpreter.process(&mut session, message),
        };
        debug!(count = replies.len(), "replies produced");

        for reply in &replies {
            for part in reply.lines() {
                writeln!(out, "Bot: {}", part)?;
            }
        }
        if replies.len() == 1 && replies[0] == FAREWELL {
            info!("farewell received, leaving chat");
            break;
        }
    }
    Ok(())
}
