use std::io::Cursor;
use chrono::NaiveDate;
use cyberbot::commands::{greeting, parse_add_args, render_task_table, run_chat};
use cyberbot::config::Config;
use cyberbot::error::BotError;
use cyberbot::store::TaskStore;

fn chat(script: &str) -> String {
    let config = Config { seed: Some(5), ..Config::default() };
    let mut out = Vec::new();
    run_chat(&config, Cursor::new(script.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_parse_add_args() {
    assert_eq!(parse_add_args("Backup files").unwrap(), ("Backup files".to_string(), None));

    let (title, at) = parse_add_args("Patch server --due 2025-07-01 14:30").unwrap();
    assert_eq!(title, "Patch server");
    assert_eq!(at, Some(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap().and_hms_opt(14, 30, 0).unwrap()));

    let (_, at) = parse_add_args("Patch server --due 2025-07-01").unwrap();
    assert_eq!(at, Some(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap().and_hms_opt(9, 0, 0).unwrap()));

    assert_eq!(parse_add_args("  "), Err(BotError::EmptyInput));
    assert!(matches!(parse_add_args("x --due tomorrow"), Err(BotError::InvalidFormat { .. })));
}

#[test]
fn test_render_task_table() {
    let mut store = TaskStore::new();
    assert_eq!(render_task_table(store.list()), "No tasks yet.");
    store.add("Backup Files", "external drive", None);
    let table = render_task_table(store.list());
    assert!(table.contains("Backup Files"));
    assert!(table.contains("Pending"));
}

#[test]
fn test_greeting_uses_name() {
    let config = Config { user_name: Some("Ada".into()), ..Config::default() };
    assert!(greeting(&config)[0].contains("Hello, Ada!"));
}

#[test]
fn test_chat_session_end_to_end() {
    let out = chat("add task Buy milk\nno\nno\n/tasks\nasdkjh\nbye\nthis is never read\n");
    assert!(out.contains("Bot: Task 'Buy milk' added successfully!"));
    assert!(out.contains("Buy milk"));
    assert!(out.contains("Bot: I didn't quite understand that."));
    assert!(out.contains("Bot: Goodbye! Stay safe online!"));
    assert!(!out.contains("this is never read"));
}

#[test]
fn test_chat_shell_commands() {
    let out = chat("/add Rotate keys --due 2025-07-01\n/quiz\nC\n/quit\n");
    assert!(out.contains("Bot: Task added: 'Rotate keys'."));
    assert!(out.contains("Bot: Reminder set for Tuesday, 01 July 2025 09:00."));
    assert!(out.contains("Bot: 🎯 Cybersecurity Quiz Started!"));
    assert!(out.contains("Bot: ✅ Correct!"));
}
