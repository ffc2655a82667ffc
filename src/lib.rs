// Library interface for mlb-wordle
// This allows integration tests to access internal modules

pub mod analytics;
pub mod catalog;
pub mod cli;
pub mod game_state;
pub mod hint;
pub mod logging;
pub mod search;
pub mod session;
pub mod share;
pub mod tui;

// Re-export commonly used items for easier testing
pub use catalog::{
    Catalog, DataFormatError, EMBEDDED_CATALOG, Player, load_catalog_from_file,
    load_catalog_from_reader, load_catalog_from_str,
};
pub use game_state::{
    Collaborators, FixedSource, Game, GameError, GameEvent, GameInterface, GameState,
    MAX_GUESSES, MysterySource, Outcome, Phase, RandomSource, SubmitResult, UserAction, game_loop,
};
pub use hint::{Attribute, Hint, directional_hint, evaluate_guess, is_match};
pub use search::filter_players;
pub use share::share_text;
