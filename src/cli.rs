use crate::catalog::Player;
use crate::game_state::{GameInterface, GameState, MAX_GUESSES, UserAction};
use crate::hint::{Attribute, Hint, evaluate_guess};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Guess the mystery MLB player
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a player CSV (Name,Position,Age,Team,AllStar,WorldSeries)
    #[arg(short = 'i', long = "input")]
    pub catalog_path: Option<PathBuf>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Seed for choosing the mystery player
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of guesses allowed per game
    #[arg(
        long,
        default_value_t = MAX_GUESSES as u8,
        value_parser = clap::value_parser!(u8).range(1..)
    )]
    pub max_guesses: u8,

    /// Directory for the "has played" flag and shared results
    #[arg(long)]
    pub state_dir: Option<PathBuf>,

    /// Append analytics events to this file as JSON lines
    #[arg(long)]
    pub analytics_log: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub fn display_instructions(max_guesses: usize) {
    println!("Guess the mystery MLB player in {max_guesses} tries or less!");
    println!("Matching attributes are marked with *.");
    println!(
        "For numbers, arrows show if the mystery player's value is higher (↑) or lower (↓)."
    );
    println!(
        "Type part of a name to search, then the number of a suggestion to guess it. \
         Commands: giveup, share, new, exit."
    );
}

/// One guess row as plain text: `Name | Position* | Age ↑ | ...`.
pub fn format_guess_row(guess: &Player, mystery: &Player) -> String {
    let feedback = evaluate_guess(guess, mystery);
    let mut cells = vec![guess.name.clone()];
    for cell in &feedback.cells {
        let mut text = cell.attribute.display_value(guess);
        if cell.matched {
            text.push('*');
        } else if let Some(hint) = cell.hint.filter(|h| *h != Hint::Equal) {
            text.push(' ');
            text.push_str(hint.arrow());
        }
        cells.push(text);
    }
    cells.join(" | ")
}

fn header_row() -> String {
    let mut labels = vec!["Name"];
    labels.extend(Attribute::ALL.iter().map(|a| a.label()));
    labels.join(" | ")
}

pub fn display_board(state: &GameState<'_>) {
    println!("Guesses: {}/{}", state.guesses().len(), state.max_guesses());
    let Some(mystery) = state.mystery_player() else {
        return;
    };
    if state.guesses().is_empty() {
        return;
    }
    println!("{}", header_row());
    for guess in state.guesses() {
        println!("{}", format_guess_row(guess, mystery));
    }
}

pub fn display_suggestions(suggestions: &[&Player]) {
    if suggestions.is_empty() {
        return;
    }
    println!("Suggestions ({}):", suggestions.len());
    for (i, player) in suggestions.iter().enumerate() {
        println!("{}. {}", i + 1, player.name);
    }
}

pub fn display_game_over(state: &GameState<'_>) {
    if let Some(mystery) = state.mystery_player() {
        println!("The mystery player was: {}", mystery.name);
    }
    if let Some(summary) = state.summary() {
        println!("{summary}");
    }
    println!("Type 'share' to share your results or 'new' to play again.");
}

/// Parses one line of input into an action.
pub fn parse_action(line: &str) -> Option<UserAction> {
    let input = line.trim();
    match input.to_lowercase().as_str() {
        "" => None,
        "exit" | "quit" => Some(UserAction::Exit),
        "new" | "next" => Some(UserAction::NewGame),
        "giveup" | "give up" => Some(UserAction::GiveUp),
        "share" => Some(UserAction::Share),
        "ok" | "got it" => Some(UserAction::DismissInstructions),
        _ => match input.parse::<usize>() {
            Ok(0) => None,
            Ok(n) => Some(UserAction::Pick(n - 1)),
            Err(_) => Some(UserAction::Search(input.to_string())),
        },
    }
}

pub fn read_action<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!("\nSearch for a player (or a suggestion number, giveup, share, new, exit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        // End of input ends the session.
        Ok(0) | Err(_) => Some(UserAction::Exit),
        Ok(_) => {
            let action = parse_action(&input);
            if action.is_none() {
                println!("Please type part of a player's name or a command.");
            }
            action
        }
    }
}

/// CLI implementation of the `GameInterface` trait
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_instructions(&mut self, max_guesses: usize) {
        display_instructions(max_guesses);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        read_action(&mut self.reader)
    }

    fn display_suggestions(&mut self, suggestions: &[&Player]) {
        display_suggestions(suggestions);
    }

    fn display_board(&mut self, state: &GameState<'_>) {
        display_board(state);
    }

    fn display_game_over(&mut self, state: &GameState<'_>) {
        display_game_over(state);
    }

    fn display_message(&mut self, message: &str) {
        println!("{message}");
    }

    fn display_new_game_message(&mut self, player_count: usize) {
        println!("New game started. {player_count} players in the catalog.");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}
