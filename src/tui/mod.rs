pub mod app;
pub mod ui;

use std::io;
use anyhow::Context;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::info;
use app::{App, Focus};
use ui::ui;
use crate::config::Config;

pub fn run_tui(config: &Config) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    info!("chat interface started");

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.context("chat interface failed")
}

/// Single-threaded loop: input handling and reminder scans never interleave.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(app.until_next_poll())? {
            app.tick();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match (app.focus, key.code) {
                (Focus::Input, KeyCode::Esc) => app.should_quit = true,
                (_, KeyCode::Tab) | (Focus::Tasks, KeyCode::Esc) => app.toggle_focus(),
                (_, KeyCode::F(2)) => app.start_quiz(),
                (Focus::Input, KeyCode::Enter) => app.submit(),
                (Focus::Input, KeyCode::Char(c)) => app.input_buffer.push(c),
                (Focus::Input, KeyCode::Backspace) => {
                    app.input_buffer.pop();
                }
                (Focus::Tasks, KeyCode::Down | KeyCode::Char('j')) => app.next(),
                (Focus::Tasks, KeyCode::Up | KeyCode::Char('k')) => app.previous(),
                (Focus::Tasks, KeyCode::Char(' ')) => app.complete_selected(),
                (Focus::Tasks, KeyCode::Char('d') | KeyCode::Delete) => app.delete_selected(),
                _ => {}
            }
        }
        app.tick();
    }
    Ok(())
}
