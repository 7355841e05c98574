pub mod commands;
pub mod config;
pub mod conversation;
pub mod error;
pub mod interpreter;
pub mod models;
pub mod quiz;
pub mod schedule;
pub mod sentiment;
pub mod session;
pub mod store;
pub mod tips;
pub mod tui;
