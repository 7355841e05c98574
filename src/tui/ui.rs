use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};
use super::app::{App, Focus, Speaker};

const BANNER: &str = "C.A.B - Cybersecurity Awareness Bot";

pub fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Chat + tasks
            Constraint::Length(3), // Input
            Constraint::Length(3), // Help
        ].as_ref())
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
        .split(rows[0]);

    // Transcript, pinned to the newest messages
    let lines: Vec<Line> = app
        .transcript
        .iter()
        .map(|(speaker, text)| match speaker {
            Speaker::User => Line::from(vec![
                Span::styled("You: ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::raw(text.clone()),
            ]),
            Speaker::Bot => Line::from(vec![
                Span::styled("Bot: ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw(text.clone()),
            ]),
        })
        .collect();
    let visible = columns[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;
    let chat = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(BANNER));
    f.render_widget(chat, columns[0]);

    // Task list
    let task_rows: Vec<Row> = app
        .session
        .tasks
        .list()
        .iter()
        .map(|t| {
            let style = if t.completed {
                Style::default().fg(Color::DarkGray)
            } else if t.reminder_notified {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Yellow)
            };
            Row::new(vec![Cell::from(t.summary())]).style(style)
        })
        .collect();

    let widths = [Constraint::Min(12)];
    let border_style = if app.focus == Focus::Tasks {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let table = Table::new(task_rows, widths)
        .block(Block::default().borders(Borders::ALL).border_style(border_style).title("Tasks"))
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
        .highlight_symbol(">> ");
    f.render_stateful_widget(table, columns[1], &mut app.task_state);

    // Input line
    let title = if app.session.quiz_in_progress() {
        "Your answer"
    } else if !app.session.state.is_idle() {
        "Your reply"
    } else {
        "Message"
    };
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(input, rows[1]);

    let help_text = match app.focus {
        Focus::Input => "Enter: Send | Tab: Tasks | F2: Start Quiz | Esc: Quit",
        Focus::Tasks => "j/k: Move | Space: Done | d: Del | Tab/Esc: Back to Chat",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, rows[2]);
}
