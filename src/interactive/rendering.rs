//! TUI rendering with ratatui
//!
//! Turn-by-turn view of the solver narrowing the code space.

use super::app::{App, MessageStyle};
use crate::game::GameState;
use crate::output::formatters::{bits_remaining, feedback_pegs};
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
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🎯 MASTERMIND MINIMAX - {}",
        app.solver.space().config()
    );
    let header = Paragraph::new(title)
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(5)])
        .split(area);

    render_answer(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_answer(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.candidates_count();
    let state = match app.game.state() {
        GameState::InProgress => Span::styled("in progress", Style::default().fg(Color::Yellow)),
        GameState::Solved => Span::styled(
            "solved",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let mut content = vec![
        Line::from(vec![
            Span::raw("Answer:     "),
            Span::styled(
                app.game.answer().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![Span::raw("State:      "), state]),
        Line::from(format!("Moves:      {}", app.moves())),
    ];

    // Few enough to list
    if (2..=6).contains(&candidates) {
        let listed: Vec<String> = app.game.bag().iter().map(ToString::to_string).collect();
        content.push(Line::from(format!("Candidates: {}", listed.join(" "))));
    } else {
        content.push(Line::from(format!("Candidates: {candidates}")));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Game ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let pegs = app.game.answer().pegs();
    let turns = app.game.turns();

    let items: Vec<ListItem> = turns
        .iter()
        .enumerate()
        .map(|(i, turn)| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:2}: ", i + 1)),
                Span::styled(
                    turn.guess.to_string(),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(" "),
                Span::styled(
                    feedback_pegs(turn.feedback, pegs),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("  worst {:>5} → {:>5} left", turn.worst_case, turn.remaining),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(" History ")
            .borders(Borders::ALL),
    );

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = bits_remaining(app.solver.space().len());
    let bits_left = bits_remaining(app.candidates_count());
    let bits_gained = total_bits - bits_left;
    let progress_pct = if total_bits > 0.0 {
        ((bits_gained / total_bits * 100.0).clamp(0.0, 100.0)) as u16
    } else {
        100
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{bits_gained:.1}/{total_bits:.1} bits"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let pool = Paragraph::new(format!("Pool: {}", app.solver.pool())).alignment(Alignment::Center);
    f.render_widget(pool, chunks[0]);

    let stats_text = format!(
        "Solved: {} | Avg: {:.2}",
        app.stats.games_solved,
        app.stats.average_moves()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.game.state() {
        GameState::InProgress => "Enter/Space: Step | r: Run | n: New | q: Quit",
        GameState::Solved => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
