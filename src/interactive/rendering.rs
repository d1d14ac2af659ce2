//! TUI rendering with ratatui
//!
//! Visualizations for the hangman assistant interface.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{format_letters, lives_bar, spaced_state};
use crate::solver::Tier;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Board
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("✈️  AIRLINE HANGMAN - Interactive Assistant")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let lines = app.session.as_ref().map_or_else(
        || vec![Line::from("Enter the phrase shape to begin")],
        |session| {
            vec![
                Line::from(Span::styled(
                    spaced_state(session.state()),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!(
                    "Guessed: {}",
                    format_letters(&session.guessed().sorted())
                )),
            ]
        },
    );

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Current suggestion
            Constraint::Percentage(35), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Suggestion ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(guess) = app.current_guess.filter(|_| app.input_mode == InputMode::Feedback) else {
        f.render_widget(Paragraph::new("No suggestion yet").block(block), area);
        return;
    };

    let source = match guess.tier {
        Tier::Domain => "airline corpus",
        Tier::General => "general corpus",
        Tier::Fallback => "letter frequency order",
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Suggested: "),
            Span::styled(
                guess.letter.to_uppercase().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Source:    {source}")),
        Line::from(format!("Matches:   {} phrases", guess.candidates)),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let total = app.current_guess.map_or(0, |guess| guess.candidates);

    let content: Vec<Line> = if app.top_candidates.is_empty() {
        vec![Line::from("No matching phrases")]
    } else {
        let mut lines: Vec<Line> = app
            .top_candidates
            .iter()
            .map(|phrase| {
                Line::from(vec![
                    Span::raw("  • "),
                    Span::styled(phrase.to_uppercase(), Style::default().fg(Color::Green)),
                ])
            })
            .collect();
        if total > app.top_candidates.len() {
            lines.push(Line::from(format!(
                "  … and {} more",
                total - app.top_candidates.len()
            )));
        }
        lines
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.history();
    let history_items: Vec<ListItem> = history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, (letter, tier, hit))| {
            let (mark, color) = if *hit {
                ("✓", Color::Green)
            } else {
                ("✗", Color::Red)
            };
            ListItem::new(format!(
                "{}: {} {mark} [{tier}]",
                history.len() - i,
                letter.to_uppercase()
            ))
            .style(Style::default().fg(color))
        })
        .collect();

    let list =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Lives gauge
            Constraint::Percentage(50), // Messages
            Constraint::Min(4),         // Statistics
        ])
        .split(area);

    render_lives(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_statistics(f, app, chunks[2]);
}

fn render_lives(f: &mut Frame, app: &App, area: Rect) {
    let (remaining, max) = app
        .session
        .as_ref()
        .map_or((0, 0), |s| (s.lives_remaining(), s.max_lives()));
    let percent = if max == 0 {
        0
    } else {
        u16::try_from(remaining * 100 / max).unwrap_or(100)
    };
    let color = match remaining {
        0 | 1 => Color::Red,
        2 | 3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{} {remaining}/{max}", lives_bar(remaining, max)));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let win_rate = if stats.total_games > 0 {
        stats.games_won as f64 / stats.total_games as f64 * 100.0
    } else {
        0.0
    };

    let mut lines = vec![Line::from(format!(
        "Games: {} | Won: {} | Win Rate: {win_rate:.0}%",
        stats.total_games, stats.games_won
    ))];
    let max_count = stats.miss_distribution.iter().copied().max().unwrap_or(0).max(1);
    for (misses, &count) in stats.miss_distribution.iter().enumerate() {
        if count > 0 {
            let width = count * 12 / max_count;
            lines.push(Line::from(format!(
                "{misses} misses: {} {count}",
                "█".repeat(width.max(1))
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Session Stats ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " Game over | 'n' new game, 'u' undo, 'q' quit ",
            "",
            Color::Green,
        ),
        InputMode::Shape => (
            " Phrase shape: word lengths ('3 5') or board ('_ _ _   _ _') | ESC to quit ",
            app.input_buffer.as_str(),
            Color::Cyan,
        ),
        InputMode::Feedback => (
            " Positions of the letter (e.g. '1 4'), '-' or empty for a miss ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Shape => "Enter: Start | Esc: Quit",
        InputMode::Feedback => "Enter: Submit | u: Undo | n: New Game | q: Quit",
        InputMode::Finished => "n: New Game | u: Undo | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
