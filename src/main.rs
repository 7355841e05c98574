//! # C.A.B - Cybersecurity Awareness Bot
//!
//! A terminal chat assistant that answers cybersecurity-awareness questions,
//! remembers a favourite topic, reacts to how you are feeling, captures tasks
//! and reminders through a short guided dialogue, and runs a quick quiz.
//!
//! ## Usage
//!
//! ### Interactive Mode (TUI)
//!
//! ```bash
//! cyberbot
//! # or explicitly
//! cyberbot ui
//! ```
//!
//! *   `Enter`: Send message
//! *   `Tab`: Switch between the chat input and the task list
//! *   `F2`: Start the quiz
//! *   `Space` / `d` (task list): Complete / delete the selected task
//! *   `Esc`: Quit
//!
//! ### Line Mode
//!
//! ```bash
//! cyberbot chat
//! ```
//!
//! Besides free text, the line mode understands `/tasks`, `/quiz`,
//! `/add <title> [--due YYYY-MM-DD [HH:MM]]` and `/quit`.
//!
//! ## Things to say
//!
//! *   `tell me about phishing`, `what is safe browsing`, `another tip`
//! *   `my favorite topic is password safety`, `remind me my topic`
//! *   `add task Backup files`, `remind me to update my router`
//! *   `mark completed`, `delete task`, `show activity log`
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/cyberbot/config.json` (override the path
//! with `CYBERBOT_CONFIG`). `CYBERBOT_SEED` and `CYBERBOT_REMINDER_SECS`
//! override the file; `CYBERBOT_LOG` sets the log filter. Nothing said in a
//! conversation is kept once the program exits.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing::info;
use tracing_subscriber::EnvFilter;
use cyberbot::commands::{cmd_tip, run_chat};
use cyberbot::config::Config;
use cyberbot::tui::run_tui;

#[derive(Parser)]
#[command(name = "cyberbot")]
#[command(about = "Cybersecurity awareness chat assistant", long_about = None)]
struct Cli {
    /// Seed for tip selection (reproducible answers)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
    /// Seconds between reminder checks
    #[arg(short, long, global = true)]
    interval: Option<u64>,
    /// Write diagnostic logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the full-screen chat
    Ui,
    /// Chat line by line on stdin/stdout
    Chat,
    /// Print one tip (password, phishing, browsing)
    Tip {
        topic: String,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

fn init_logging(log_file: Option<&PathBuf>, to_stderr: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("CYBERBOT_LOG").unwrap_or_else(|_| "cyberbot=info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339());

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if to_stderr => builder.with_writer(io::stderr).init(),
        None => {}
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(secs) = cli.interval {
        config.reminder_interval_secs = secs.max(1);
    }
    if cli.log_file.is_some() {
        config.log_file = cli.log_file.clone();
    }

    let full_screen = matches!(cli.command, Some(Commands::Ui) | None);
    init_logging(config.log_file.as_ref(), !full_screen)?;
    info!(?config, "configuration loaded");

    match cli.command {
        Some(Commands::Chat) => {
            let stdin = io::stdin();
            run_chat(&config, stdin.lock(), io::stdout())?;
        }
        Some(Commands::Tip { topic }) => cmd_tip(&topic, &config),
        Some(Commands::Completions { shell }) => {
            let shell_enum = match shell.as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "powershell" => Shell::PowerShell,
                "elvish" => Shell::Elvish,
                _ => {
                    eprintln!("Unsupported shell: {}", shell);
                    return Ok(());
                }
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "cyberbot", &mut io::stdout());
        }
        Some(Commands::Ui) | None => run_tui(&config)?,
    }
    Ok(())
}
