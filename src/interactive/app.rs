//! TUI application state and logic

use crate::core::Code;
use crate::game::{Game, GameState, SolveError};
use crate::solver::Solver;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'s, 'a> {
    pub solver: &'s Solver<'a>,
    pub game: Game<'s, 'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_solved: usize,
    pub total_moves: usize,
}

impl Statistics {
    #[must_use]
    pub fn average_moves(&self) -> f64 {
        if self.games_solved == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games_solved as f64
        }
    }
}

impl<'s, 'a> App<'s, 'a> {
    /// Create the app with a first game against `answer`
    ///
    /// # Errors
    ///
    /// Returns an error if `answer` is not in the solver's code space.
    pub fn new(solver: &'s Solver<'a>, answer: &Code, rng: StdRng) -> Result<Self, SolveError> {
        let game = Game::new(solver, answer)?;

        let mut app = Self {
            solver,
            game,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message(
            "Press Enter or Space to let the solver make its next guess.",
            MessageStyle::Info,
        );
        app.record_if_solved();
        Ok(app)
    }

    /// Play one solver turn
    pub fn step(&mut self) {
        if self.game.state() == GameState::Solved {
            self.add_message("Already solved. Press 'n' for a new game.", MessageStyle::Info);
            return;
        }

        match self.game.step() {
            Ok(_) => {
                if let Some(turn) = self.game.turns().last() {
                    let text = format!(
                        "{} → {} ({} left)",
                        turn.guess, turn.feedback, turn.remaining
                    );
                    self.add_message(&text, MessageStyle::Info);
                }
                self.record_if_solved();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Play until the game is solved
    pub fn run_to_end(&mut self) {
        while self.game.state() == GameState::InProgress {
            let before = self.game.turns().len();
            self.step();
            if self.game.turns().len() == before {
                break;
            }
        }
    }

    pub fn new_game(&mut self) {
        let answer = self.solver.space().choose_random(&mut self.rng);
        match Game::new(self.solver, answer) {
            Ok(game) => {
                self.game = game;
                self.messages.clear();
                self.add_message("New game started with a random answer.", MessageStyle::Info);
                self.record_if_solved();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Number of codes the answer has been narrowed down to
    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.game.bag().len()
    }

    /// Moves used so far, counting the final code once solved
    #[must_use]
    pub fn moves(&self) -> usize {
        match self.game.state() {
            GameState::InProgress => self.game.turns().len(),
            GameState::Solved => self.game.turn_count(),
        }
    }

    fn record_if_solved(&mut self) {
        if self.game.state() == GameState::Solved {
            self.stats.games_solved += 1;
            self.stats.total_moves += self.moves();
            let text = format!(
                "🎯 Solved {} in {} moves! Press 'n' for a new game or 'q' to quit.",
                self.game.answer(),
                self.moves()
            );
            self.add_message(&text, MessageStyle::Success);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Enter | KeyCode::Char(' ' | 's') => app.step(),
                KeyCode::Char('r') => app.run_to_end(),
                KeyCode::Char('n') => app.new_game(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::solver::GuessPool;
    use crate::space::CodeSpace;
    use rand::SeedableRng;

    fn small_space() -> CodeSpace {
        CodeSpace::new(GameConfig::new(3, 3).unwrap())
    }

    #[test]
    fn stepping_narrows_candidates() {
        let space = small_space();
        let solver = Solver::new(&space, GuessPool::FullSpace);
        let answer = Code::new([2, 1, 0], space.config()).unwrap();
        let mut app = App::new(&solver, &answer, StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(app.candidates_count(), 27);
        app.step();
        assert!(app.candidates_count() < 27);
        assert_eq!(app.game.turns().len(), 1);
    }

    #[test]
    fn run_to_end_solves_and_records_stats() {
        let space = small_space();
        let solver = Solver::new(&space, GuessPool::FullSpace);
        let answer = Code::new([2, 1, 0], space.config()).unwrap();
        let mut app = App::new(&solver, &answer, StdRng::seed_from_u64(1)).unwrap();

        app.run_to_end();

        assert_eq!(app.game.state(), GameState::Solved);
        assert_eq!(app.candidates_count(), 1);
        assert_eq!(app.stats.games_solved, 1);
        assert!(app.stats.average_moves() >= 1.0);

        // Stepping a solved game changes nothing
        app.step();
        assert_eq!(app.stats.games_solved, 1);
    }

    #[test]
    fn new_game_resets_state() {
        let space = small_space();
        let solver = Solver::new(&space, GuessPool::FullSpace);
        let answer = Code::new([0, 0, 1], space.config()).unwrap();
        let mut app = App::new(&solver, &answer, StdRng::seed_from_u64(4)).unwrap();

        app.run_to_end();
        app.new_game();

        assert!(app.game.turns().is_empty() || app.game.state() == GameState::Solved);
        assert!(app.messages.len() <= 8);
    }

    #[test]
    fn moves_match_game_record() {
        let space = small_space();
        let solver = Solver::new(&space, GuessPool::FullSpace);

        for answer in space.codes() {
            let mut app = App::new(&solver, answer, StdRng::seed_from_u64(0)).unwrap();
            app.run_to_end();
            let record = crate::game::play(&solver, answer).unwrap();
            assert_eq!(app.moves(), record.turn_count());
        }
    }
}
