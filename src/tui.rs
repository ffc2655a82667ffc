//! TUI (Terminal User Interface) module for MLB Wordle
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Architecture
//! - `TuiModel`: what is on screen and how keys map to game actions
//! - `TuiInterface`: owns the terminal, draws the model and feeds it events
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `Instructions` → `Searching` (first run only)
//! - `Searching` → `GameOver` → back to `Searching` on a new game

use crate::catalog::Player;
use crate::game_state::{GameInterface, GameState, UserAction};
use crate::hint::{Attribute, Hint, evaluate_guess};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};
use std::io;

const MAX_SUGGESTIONS_DISPLAY: usize = 6;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const TABLE_CHROME_ROWS: u16 = 3;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const MATCH_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green);
const MISS_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
const HIGHLIGHT_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiState {
    Instructions,
    Searching,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CellView {
    text: String,
    matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GuessRowView {
    name: String,
    cells: Vec<CellView>,
}

impl GuessRowView {
    fn new(guess: &Player, mystery: &Player) -> Self {
        let feedback = evaluate_guess(guess, mystery);
        let cells = feedback
            .cells
            .iter()
            .map(|cell| {
                let mut text = cell.attribute.display_value(guess);
                if let Some(hint) = cell.hint.filter(|h| *h != Hint::Equal) {
                    text.push(' ');
                    text.push_str(hint.arrow());
                }
                CellView {
                    text,
                    matched: cell.matched,
                }
            })
            .collect();
        Self {
            name: guess.name.clone(),
            cells,
        }
    }
}

/// Everything the screen shows, independent of the terminal.
#[derive(Debug)]
pub struct TuiModel {
    state: TuiState,
    rows: Vec<GuessRowView>,
    query: String,
    suggestions: Vec<String>,
    highlighted: usize,
    guess_count: usize,
    max_guesses: usize,
    message: String,
    error_message: String,
    status: String,
}

impl Default for TuiModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiModel {
    pub fn new() -> Self {
        Self {
            state: TuiState::Searching,
            rows: Vec::new(),
            query: String::new(),
            suggestions: Vec::new(),
            highlighted: 0,
            guess_count: 0,
            max_guesses: 0,
            message: String::new(),
            error_message: String::new(),
            status: "Loading...".to_string(),
        }
    }

    pub fn state(&self) -> TuiState {
        self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Index of the first suggestion drawn; the list scrolls to keep the
    /// highlighted entry on screen.
    fn suggestion_offset(&self) -> usize {
        (self.highlighted + 1).saturating_sub(MAX_SUGGESTIONS_DISPLAY)
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Maps a key press to a game action, updating local UI state on the way.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        debug_log!("handle_key() - {:?} in {:?}", key.code, self.state);
        match self.state {
            TuiState::Instructions => self.handle_instructions_input(key),
            TuiState::Searching => self.handle_search_input(key),
            TuiState::GameOver => Self::handle_game_over_input(key),
        }
    }

    fn handle_instructions_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.code == KeyCode::Esc {
            return Some(UserAction::Exit);
        }
        self.state = TuiState::Searching;
        self.status = "Start typing to guess a player".to_string();
        Some(UserAction::DismissInstructions)
    }

    fn handle_search_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(UserAction::Exit),
                KeyCode::Char('g') => Some(UserAction::GiveUp),
                KeyCode::Char('n') => Some(UserAction::NewGame),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(UserAction::Exit),
            KeyCode::Char(c) if !Self::has_modifier_keys(&key) && !c.is_control() => {
                self.query.push(c);
                self.highlighted = 0;
                Some(UserAction::Search(self.query.clone()))
            }
            KeyCode::Backspace if !self.query.is_empty() => {
                self.query.pop();
                self.highlighted = 0;
                Some(UserAction::Search(self.query.clone()))
            }
            KeyCode::Up => {
                self.highlighted = self.highlighted.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                if self.highlighted + 1 < self.suggestions.len() {
                    self.highlighted += 1;
                }
                None
            }
            KeyCode::Enter if !self.suggestions.is_empty() => {
                let index = self.highlighted;
                self.query.clear();
                self.highlighted = 0;
                info_log!("handle_search_input() - guessing suggestion {}", index);
                Some(UserAction::Pick(index))
            }
            KeyCode::Enter => {
                self.error_message = "No matching players. Keep typing a name.".to_string();
                None
            }
            _ => None,
        }
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('s' | 'S') => Some(UserAction::Share),
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn show_instructions(&mut self, max_guesses: usize) {
        self.state = TuiState::Instructions;
        self.max_guesses = max_guesses;
        self.status = "Press any key to start".to_string();
    }

    fn set_suggestions(&mut self, suggestions: &[&Player]) {
        self.suggestions = suggestions.iter().map(|p| p.name.clone()).collect();
        if self.highlighted >= self.suggestions.len() {
            self.highlighted = 0;
        }
    }

    fn set_board(&mut self, state: &GameState<'_>) {
        self.guess_count = state.guesses().len();
        self.max_guesses = state.max_guesses();
        self.rows = match state.mystery_player() {
            Some(mystery) => state
                .guesses()
                .iter()
                .map(|guess| GuessRowView::new(guess, mystery))
                .collect(),
            None => Vec::new(),
        };
        if state.is_playing() && self.state != TuiState::Instructions {
            self.state = TuiState::Searching;
        }
        if self.state != TuiState::Instructions {
            self.status = format!("Guesses: {}/{}", self.guess_count, self.max_guesses);
        }
    }

    fn set_game_over(&mut self, state: &GameState<'_>) {
        self.state = TuiState::GameOver;
        self.query.clear();
        self.suggestions.clear();
        let reveal = state
            .mystery_player()
            .map(|p| p.name.clone())
            .unwrap_or_default();
        let summary = state.summary().unwrap_or_default();
        self.message = format!("The mystery player was: {reveal}. {summary}");
        self.status = "Game over".to_string();
    }

    fn reset(&mut self, player_count: usize) {
        self.rows.clear();
        self.query.clear();
        self.suggestions.clear();
        self.highlighted = 0;
        self.error_message.clear();
        self.state = TuiState::Searching;
        self.message = format!("New game started. {player_count} players in the catalog.");
    }
}

/// Render the complete UI layout for `model`.
pub fn render(f: &mut Frame, model: &TuiModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(6),     // Guess table or instructions
            Constraint::Length(3),  // Search box
            Constraint::Length(8),  // Suggestions
            Constraint::Length(4),  // Messages
            Constraint::Length(3),  // Status line
            Constraint::Length(3),  // Key help
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    if model.state == TuiState::Instructions {
        render_instructions_panel(f, chunks[1], model.max_guesses);
    } else {
        render_board(f, chunks[1], &model.rows);
    }
    render_search(f, chunks[2], model);
    render_suggestions(f, chunks[3], model);
    render_messages(f, chunks[4], model);
    render_status(f, chunks[5], &model.status);
    render_key_help(f, chunks[6], model.state);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("MLB WORDLE")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_instructions_panel(f: &mut Frame, area: Rect, max_guesses: usize) {
    let lines = vec![
        Line::from(format!(
            "Guess the mystery MLB player in {max_guesses} tries or less!"
        )),
        Line::from(vec![
            Span::styled(" Green ", MATCH_STYLE),
            Span::raw(" cells indicate a match with the mystery player."),
        ]),
        Line::from(
            "For numbers, arrows show if the mystery player's value is higher (↑) or lower (↓).",
        ),
        Line::from(""),
        Line::from(Span::styled("Press any key: Got it!", SUCCESS_STYLE)),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("How to play").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, area: Rect, rows: &[GuessRowView]) {
    // Keep the most recent guesses visible when the table overflows.
    let available_rows = area.height.saturating_sub(TABLE_CHROME_ROWS) as usize;
    let skip_count = rows.len().saturating_sub(available_rows);

    let header = Row::new(
        std::iter::once("Name")
            .chain(Attribute::ALL.iter().map(|a| a.label()))
            .map(|label| Cell::from(label).style(HEADER_STYLE)),
    );
    let body = rows.iter().skip(skip_count).map(|row| {
        let mut cells = vec![Cell::from(row.name.clone())];
        cells.extend(row.cells.iter().map(|cell| {
            let style = if cell.matched { MATCH_STYLE } else { MISS_STYLE };
            Cell::from(cell.text.clone()).style(style)
        }));
        Row::new(cells)
    });
    let widths = [
        Constraint::Min(18),
        Constraint::Length(12),
        Constraint::Length(6),
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Length(13),
    ];
    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().title("Guesses").borders(Borders::ALL));
    f.render_widget(table, area);
}

fn render_search(f: &mut Frame, area: Rect, model: &TuiModel) {
    let text = if model.state == TuiState::Searching {
        format!("{}_", model.query)
    } else {
        String::new()
    };
    let paragraph =
        Paragraph::new(text).block(Block::default().title("Search").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_suggestions(f: &mut Frame, area: Rect, model: &TuiModel) {
    let offset = model.suggestion_offset();
    let mut lines: Vec<Line> = model
        .suggestions
        .iter()
        .enumerate()
        .skip(offset)
        .take(MAX_SUGGESTIONS_DISPLAY)
        .map(|(i, name)| {
            if i == model.highlighted {
                Line::from(Span::styled(format!("> {name}"), HIGHLIGHT_STYLE))
            } else {
                Line::from(format!("  {name}"))
            }
        })
        .collect();
    let below = model
        .suggestions
        .len()
        .saturating_sub(offset + MAX_SUGGESTIONS_DISPLAY);
    if below > 0 {
        lines.push(Line::from(format!("  ... and {below} more")));
    }
    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Suggestions").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, area: Rect, model: &TuiModel) {
    let mut lines = Vec::new();
    if !model.message.is_empty() {
        lines.push(Line::from(Span::styled(model.message.as_str(), MESSAGE_STYLE)));
    }
    if !model.error_message.is_empty() {
        lines.push(Line::from(Span::styled(
            model.error_message.as_str(),
            ERROR_STYLE,
        )));
    }
    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Information").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, status: &str) {
    let paragraph = Paragraph::new(status)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

fn render_key_help(f: &mut Frame, area: Rect, state: TuiState) {
    let text = match state {
        TuiState::Instructions => "Any key: Start | ESC: Quit",
        TuiState::Searching => concat!(
            "Type a name | ↑/↓: Choose | ENTER: Guess | ",
            "Ctrl-G: Give up | Ctrl-N: New game | ESC: Quit"
        ),
        TuiState::GameOver => "S: Share results | N: New game | Q/ESC: Quit",
    };
    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// Main TUI interface component.
///
/// Manages terminal setup and teardown and turns crossterm events into actions.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    model: TuiModel,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            model: TuiModel::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let model = &self.model;
        self.terminal.draw(|f| render(f, model))?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }
                if let KeyCode::Char('\u{FFFD}') = key.code {
                    debug_log!("handle_input() - Ignoring replacement character");
                    return Ok(None);
                }
                Ok(self.model.handle_key(key))
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_instructions(&mut self, max_guesses: usize) {
        self.model.show_instructions(max_guesses);
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_suggestions(&mut self, suggestions: &[&Player]) {
        self.model.set_suggestions(suggestions);
        self.draw_or_log();
    }

    fn display_board(&mut self, state: &GameState<'_>) {
        self.model.set_board(state);
        self.draw_or_log();
    }

    fn display_game_over(&mut self, state: &GameState<'_>) {
        self.model.set_game_over(state);
        self.draw_or_log();
    }

    fn display_message(&mut self, message: &str) {
        self.model.message = message.to_string();
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self, player_count: usize) {
        self.model.reset(player_count);
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.model.message = "Exiting...".to_string();
        self.model.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EMBEDDED_CATALOG, load_catalog_from_str};
    use crate::game_state::FixedSource;
    use crate::search::filter_players;
    use ratatui::backend::TestBackend;

    const DATA: &str = "Name,Position,Age,Team,AllStar,WorldSeries\n\
        Mike Trout,Outfielder,32,Angels,10,0\n\
        Aaron Judge,Outfielder,32,Yankees,5,0\n\
        Juan Soto,Outfielder,25,Yankees,3,1\n";

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn screen_text(model: &TuiModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
        terminal.draw(|f| render(f, model)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_builds_query() {
        let mut model = TuiModel::new();
        assert_eq!(
            model.handle_key(key(KeyCode::Char('T'))),
            Some(UserAction::Search("T".to_string()))
        );
        assert_eq!(
            model.handle_key(key(KeyCode::Char('r'))),
            Some(UserAction::Search("Tr".to_string()))
        );
        assert_eq!(
            model.handle_key(key(KeyCode::Backspace)),
            Some(UserAction::Search("T".to_string()))
        );
        assert_eq!(model.query(), "T");
    }

    #[test]
    fn test_spaces_allowed_in_names() {
        let mut model = TuiModel::new();
        model.handle_key(key(KeyCode::Char('J')));
        assert_eq!(
            model.handle_key(key(KeyCode::Char(' '))),
            Some(UserAction::Search("J ".to_string()))
        );
    }

    #[test]
    fn test_backspace_on_empty_query_does_nothing() {
        let mut model = TuiModel::new();
        assert_eq!(model.handle_key(key(KeyCode::Backspace)), None);
    }

    #[test]
    fn test_highlight_and_pick() {
        let catalog = load_catalog_from_str(DATA).unwrap();
        let suggestions: Vec<&Player> = catalog.iter().collect();
        let mut model = TuiModel::new();
        model.handle_key(key(KeyCode::Char('o')));
        model.set_suggestions(&suggestions);

        assert_eq!(model.handle_key(key(KeyCode::Down)), None);
        assert_eq!(model.handle_key(key(KeyCode::Down)), None);
        assert_eq!(model.handle_key(key(KeyCode::Down)), None);
        assert_eq!(model.highlighted(), 2);
        assert_eq!(model.handle_key(key(KeyCode::Up)), None);
        assert_eq!(model.handle_key(key(KeyCode::Enter)), Some(UserAction::Pick(1)));
        assert_eq!(model.query(), "");
    }

    #[test]
    fn test_suggestion_list_scrolls_to_highlight() {
        let catalog = load_catalog_from_str(EMBEDDED_CATALOG).unwrap();
        let suggestions = filter_players(catalog.players(), "e", &[]);
        assert_eq!(suggestions.len(), 7);
        let mut model = TuiModel::new();
        model.handle_key(key(KeyCode::Char('e')));
        model.set_suggestions(&suggestions);

        let screen = screen_text(&model);
        assert!(screen.contains("> Mike Trout"));
        assert!(screen.contains("... and 1 more"));
        assert!(!screen.contains("Gerrit Cole"));

        for _ in 0..10 {
            model.handle_key(key(KeyCode::Down));
        }
        assert_eq!(model.highlighted(), 6);
        let screen = screen_text(&model);
        assert!(screen.contains("> Gerrit Cole"));
        assert!(!screen.contains("Mike Trout"));
        assert!(!screen.contains("more"));

        assert_eq!(model.handle_key(key(KeyCode::Enter)), Some(UserAction::Pick(6)));
    }

    #[test]
    fn test_enter_without_suggestions_shows_error() {
        let mut model = TuiModel::new();
        assert_eq!(model.handle_key(key(KeyCode::Enter)), None);
        assert!(screen_text(&model).contains("No matching players"));
    }

    #[test]
    fn test_control_shortcuts() {
        let mut model = TuiModel::new();
        assert_eq!(model.handle_key(ctrl('g')), Some(UserAction::GiveUp));
        assert_eq!(model.handle_key(ctrl('n')), Some(UserAction::NewGame));
        assert_eq!(model.handle_key(ctrl('c')), Some(UserAction::Exit));
        assert_eq!(model.handle_key(key(KeyCode::Esc)), Some(UserAction::Exit));
        assert_eq!(model.query(), "");
    }

    #[test]
    fn test_instructions_dismissed_by_any_key() {
        let mut model = TuiModel::new();
        model.show_instructions(8);
        assert!(screen_text(&model).contains("Guess the mystery MLB player in 8 tries or less!"));
        assert_eq!(
            model.handle_key(key(KeyCode::Char('x'))),
            Some(UserAction::DismissInstructions)
        );
        assert_eq!(model.state(), TuiState::Searching);
        assert_eq!(model.query(), "");
    }

    #[test]
    fn test_board_and_game_over() {
        let catalog = load_catalog_from_str(DATA).unwrap();
        let mut state = GameState::start(&catalog, &mut FixedSource(0), 8).unwrap();
        state.submit_guess(catalog.find("Juan Soto").unwrap());

        let mut model = TuiModel::new();
        model.set_board(&state);
        let screen = screen_text(&model);
        assert!(screen.contains("MLB WORDLE"));
        assert!(screen.contains("Juan Soto"));
        assert!(screen.contains("25 ↑"));
        assert!(screen.contains("Guesses: 1/8"));

        state.submit_guess(catalog.find("Mike Trout").unwrap());
        model.set_board(&state);
        model.set_game_over(&state);
        assert_eq!(model.state(), TuiState::GameOver);
        assert!(
            model
                .message()
                .contains("The mystery player was: Mike Trout. You got it in 2 tries!")
        );
        assert_eq!(model.handle_key(key(KeyCode::Char('s'))), Some(UserAction::Share));
        assert_eq!(model.handle_key(key(KeyCode::Char('n'))), Some(UserAction::NewGame));
        assert_eq!(model.handle_key(key(KeyCode::Char('x'))), None);

        model.reset(catalog.len());
        assert_eq!(model.state(), TuiState::Searching);
        assert!(!screen_text(&model).contains("Juan Soto"));
    }
}
