use std::env;
use std::fs;
use std::sync::Mutex;
use cyberbot::config::{config_path, Config, ConfigError};

// Environment variables are process-wide; tests touching them take this lock.
static TEST_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env() {
    env::remove_var("CYBERBOT_CONFIG");
    env::remove_var("CYBERBOT_SEED");
    env::remove_var("CYBERBOT_REMINDER_SECS");
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::from_file(&dir.path().join("nope.json")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.reminder_interval_secs, 60);
    assert_eq!(config.recent_log_len, 10);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "user_name": "Sam", "seed": 9 }"#).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.user_name.as_deref(), Some("Sam"));
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.reminder_interval_secs, 60);
}

#[test]
fn test_bad_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(Config::from_file(&path), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_zero_interval_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "reminder_interval_secs": 0 }"#).unwrap();
    assert!(matches!(Config::from_file(&path), Err(ConfigError::InvalidValue(..))));
}

#[test]
fn test_zero_recent_log_len_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "recent_log_len": 0 }"#).unwrap();
    match Config::from_file(&path) {
        Err(ConfigError::InvalidValue(key, _)) => assert_eq!(key, "recent_log_len"),
        other => panic!("expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_config_env_var_redirects_path() {
    let _guard = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.json");
    fs::write(&path, r#"{ "user_name": "Ada" }"#).unwrap();

    env::set_var("CYBERBOT_CONFIG", &path);
    assert_eq!(config_path(), path);
    let config = Config::load();
    clear_env();

    assert_eq!(config.unwrap().user_name.as_deref(), Some("Ada"));
}

#[test]
fn test_env_overrides_file_values() {
    let _guard = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "seed": 1, "reminder_interval_secs": 30 }"#).unwrap();

    env::set_var("CYBERBOT_CONFIG", &path);
    env::set_var("CYBERBOT_SEED", "7");
    env::set_var("CYBERBOT_REMINDER_SECS", " 5 ");
    let config = Config::load();
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.reminder_interval_secs, 5);
}

#[test]
fn test_bad_seed_env_is_invalid_value() {
    let _guard = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    env::set_var("CYBERBOT_CONFIG", dir.path().join("missing.json"));
    env::set_var("CYBERBOT_SEED", "abc");
    let result = Config::load();
    clear_env();

    match result {
        Err(ConfigError::InvalidValue(key, msg)) => {
            assert_eq!(key, "CYBERBOT_SEED");
            assert!(msg.contains("'abc'"));
        }
        other => panic!("expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_zero_interval_env_rejected() {
    let _guard = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    env::set_var("CYBERBOT_CONFIG", dir.path().join("missing.json"));
    env::set_var("CYBERBOT_REMINDER_SECS", "0");
    let result = Config::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::InvalidValue(..))));
}
