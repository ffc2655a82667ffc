use crate::analytics::{AnalyticsEvent, CATEGORY_ENGAGEMENT, CATEGORY_GAMEPLAY, EventTracker};
use crate::catalog::{Catalog, DataFormatError, Player};
use crate::search::filter_players;
use crate::share::{ShareSink, share_results};
use crate::{debug_log, info_log};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;
use thiserror::Error;

pub const MAX_GUESSES: usize = 8;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("the player catalog is empty, so no mystery player can be chosen")]
    EmptyCatalog,

    #[error("could not load the player catalog")]
    DataFormat(#[from] DataFormatError),

    #[error("terminal I/O error")]
    Io(#[from] io::Error),
}

/// Picks the mystery player's index.
pub trait MysterySource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform selection backed by `rand`.
pub struct RandomSource<R: Rng = StdRng> {
    rng: R,
}

impl RandomSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> MysterySource for RandomSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same index (wrapped into range).
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub usize);

impl MysterySource for FixedSource {
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    GaveUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Playing,
    GameOver(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    Recorded,
    AlreadyGuessed,
    NotPlaying,
}

/// One game: the mystery player, the guesses so far, and how it ended.
///
/// Players are borrowed from the catalog the game was started from.
#[derive(Debug, Clone)]
pub struct GameState<'c> {
    mystery_player: Option<&'c Player>,
    guesses: Vec<&'c Player>,
    game_over: bool,
    won: bool,
    gave_up: bool,
    max_guesses: usize,
}

impl<'c> GameState<'c> {
    /// A state with no mystery player yet.
    pub fn loading(max_guesses: usize) -> Self {
        Self {
            mystery_player: None,
            guesses: Vec::new(),
            game_over: false,
            won: false,
            gave_up: false,
            max_guesses: max_guesses.max(1),
        }
    }

    pub fn start(
        catalog: &'c Catalog,
        source: &mut dyn MysterySource,
        max_guesses: usize,
    ) -> Result<Self, GameError> {
        if catalog.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        let index = source.pick(catalog.len());
        let mystery = catalog.get(index).ok_or(GameError::EmptyCatalog)?;
        debug_log!("Mystery player chosen at index {}", index);
        Ok(Self {
            mystery_player: Some(mystery),
            ..Self::loading(max_guesses)
        })
    }

    pub fn mystery_player(&self) -> Option<&'c Player> {
        self.mystery_player
    }

    pub fn guesses(&self) -> &[&'c Player] {
        &self.guesses
    }

    pub fn guessed_names(&self) -> Vec<&'c str> {
        self.guesses.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn gave_up(&self) -> bool {
        self.gave_up
    }

    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses.len())
    }

    pub fn phase(&self) -> Phase {
        match self.mystery_player {
            None => Phase::Loading,
            Some(_) if self.won => Phase::GameOver(Outcome::Won),
            Some(_) if self.gave_up => Phase::GameOver(Outcome::GaveUp),
            Some(_) if self.game_over => Phase::GameOver(Outcome::Lost),
            Some(_) => Phase::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase() == Phase::Playing
    }

    /// Records a guess. Repeats and guesses outside play are ignored.
    pub fn submit_guess(&mut self, player: &'c Player) -> SubmitResult {
        let Some(mystery) = self.mystery_player else {
            return SubmitResult::NotPlaying;
        };
        if self.game_over {
            return SubmitResult::NotPlaying;
        }
        if self.guesses.iter().any(|g| g.name == player.name) {
            debug_log!("Ignoring repeated guess '{}'", player.name);
            return SubmitResult::AlreadyGuessed;
        }

        self.guesses.push(player);
        // Correctness wins over running out of guesses.
        self.won = player.name == mystery.name;
        self.game_over = self.won || self.guesses.len() >= self.max_guesses;
        info_log!(
            "Guess {}/{}: '{}' (correct: {})",
            self.guesses.len(),
            self.max_guesses,
            player.name,
            self.won
        );
        SubmitResult::Recorded
    }

    /// Forfeits the game. Only allowed while playing with at least one guess
    /// made; returns whether the game was ended.
    pub fn give_up(&mut self) -> bool {
        if !self.is_playing() || self.guesses.is_empty() {
            return false;
        }
        self.game_over = true;
        self.gave_up = true;
        self.won = false;
        true
    }

    /// The line shown once the game is over.
    pub fn summary(&self) -> Option<String> {
        let count = self.guesses.len();
        match self.phase() {
            Phase::GameOver(Outcome::Won) => Some(format!("You got it in {count} tries!")),
            Phase::GameOver(Outcome::GaveUp) => {
                Some(format!("You gave up after {count} guesses."))
            }
            Phase::GameOver(Outcome::Lost) => {
                Some(format!("You ran out of guesses after {count} guesses."))
            }
            Phase::Loading | Phase::Playing => None,
        }
    }
}

/// Commands accepted by [`Game::apply`].
#[derive(Debug, Clone, Copy)]
pub enum GameEvent<'c> {
    NewGame,
    Guess(&'c Player),
    GiveUp,
}

/// The state machine together with what it needs to start new games.
pub struct Game<'c, S: MysterySource> {
    catalog: &'c Catalog,
    source: S,
    state: GameState<'c>,
}

impl<'c, S: MysterySource> Game<'c, S> {
    /// A game in the loading phase; call [`Game::start_new_game`] to play.
    pub fn new(catalog: &'c Catalog, source: S, max_guesses: usize) -> Self {
        Self {
            catalog,
            source,
            state: GameState::loading(max_guesses),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn state(&self) -> &GameState<'c> {
        &self.state
    }

    /// Replaces the current state with a fresh game. Works from any phase.
    pub fn start_new_game(&mut self) -> Result<&GameState<'c>, GameError> {
        let max_guesses = self.state.max_guesses;
        self.state = GameState::start(self.catalog, &mut self.source, max_guesses)?;
        Ok(&self.state)
    }

    pub fn reset(&mut self) -> Result<&GameState<'c>, GameError> {
        self.start_new_game()
    }

    pub fn submit_guess(&mut self, player: &'c Player) -> SubmitResult {
        self.state.submit_guess(player)
    }

    pub fn give_up(&mut self) -> bool {
        self.state.give_up()
    }

    pub fn apply(&mut self, event: GameEvent<'c>) -> Result<&GameState<'c>, GameError> {
        match event {
            GameEvent::NewGame => return self.start_new_game(),
            GameEvent::Guess(player) => {
                self.state.submit_guess(player);
            }
            GameEvent::GiveUp => {
                self.state.give_up();
            }
        }
        Ok(&self.state)
    }

    /// Suggestions for `query`, leaving out players already guessed.
    pub fn suggestions(&self, query: &str) -> Vec<&'c Player> {
        filter_players(self.catalog.players(), query, &self.state.guessed_names())
    }
}

// Front-end plumbing

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// The search text changed.
    Search(String),
    /// Guess the suggestion at this index.
    Pick(usize),
    GiveUp,
    Share,
    NewGame,
    DismissInstructions,
    Exit,
}

/// What a front-end must provide to host a game.
pub trait GameInterface {
    fn display_instructions(&mut self, max_guesses: usize);
    /// Returns `None` when the input could not be turned into an action.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_suggestions(&mut self, suggestions: &[&Player]);
    fn display_board(&mut self, state: &GameState<'_>);
    fn display_game_over(&mut self, state: &GameState<'_>);
    fn display_message(&mut self, message: &str);
    fn display_new_game_message(&mut self, player_count: usize);
    fn display_exit_message(&mut self);
}

/// Side channels the game reports to.
pub struct Collaborators<'a> {
    pub tracker: &'a mut dyn EventTracker,
    pub share: &'a mut dyn ShareSink,
}

fn outcome_event(state: &GameState<'_>) -> Option<AnalyticsEvent> {
    let count = i64::try_from(state.guesses().len()).unwrap_or(i64::MAX);
    let action = match state.phase() {
        Phase::GameOver(Outcome::Won) => "game_won",
        Phase::GameOver(Outcome::Lost) => "game_lost",
        Phase::GameOver(Outcome::GaveUp) => "give_up",
        Phase::Loading | Phase::Playing => return None,
    };
    let mut event = AnalyticsEvent::new(action)
        .category(CATEGORY_GAMEPLAY)
        .value(count);
    if let Some(mystery) = state.mystery_player() {
        event = event.label(&mystery.name);
    }
    Some(event)
}

pub fn game_loop<S, I>(
    game: &mut Game<'_, S>,
    interface: &mut I,
    collaborators: &mut Collaborators<'_>,
    show_instructions: bool,
) -> Result<(), GameError>
where
    S: MysterySource,
    I: GameInterface + ?Sized,
{
    if show_instructions {
        interface.display_instructions(game.state().max_guesses());
    }

    game.start_new_game()?;
    collaborators
        .tracker
        .track(&AnalyticsEvent::new("game_start").category(CATEGORY_GAMEPLAY));
    interface.display_board(game.state());

    let mut suggestions: Vec<&Player> = Vec::new();

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::DismissInstructions => {}
            UserAction::NewGame => {
                game.apply(GameEvent::NewGame)?;
                suggestions.clear();
                collaborators
                    .tracker
                    .track(&AnalyticsEvent::new("new_game").category(CATEGORY_GAMEPLAY));
                interface.display_new_game_message(game.catalog().len());
                interface.display_board(game.state());
            }
            UserAction::Search(query) => {
                if !game.state().is_playing() {
                    continue;
                }
                suggestions = game.suggestions(&query);
                interface.display_suggestions(&suggestions);
            }
            UserAction::Pick(index) => {
                if !game.state().is_playing() {
                    interface.display_message(
                        "The game is over. Start a new game to keep playing.",
                    );
                    continue;
                }
                let Some(&player) = suggestions.get(index) else {
                    interface.display_message("No such suggestion. Search for a player first.");
                    continue;
                };
                suggestions.clear();
                interface.display_suggestions(&suggestions);

                if game.submit_guess(player) == SubmitResult::AlreadyGuessed {
                    continue;
                }
                let guess_number = i64::try_from(game.state().guesses().len()).unwrap_or(i64::MAX);
                collaborators.tracker.track(
                    &AnalyticsEvent::new("guess")
                        .category(CATEGORY_GAMEPLAY)
                        .label(&player.name)
                        .value(guess_number),
                );
                interface.display_board(game.state());

                if let Some(event) = outcome_event(game.state()) {
                    collaborators.tracker.track(&event);
                    interface.display_game_over(game.state());
                }
            }
            UserAction::GiveUp => {
                if game.give_up() {
                    if let Some(event) = outcome_event(game.state()) {
                        collaborators.tracker.track(&event);
                    }
                    interface.display_game_over(game.state());
                } else if game.state().is_playing() {
                    interface.display_message("Make at least one guess before giving up.");
                }
            }
            UserAction::Share => {
                if !game.state().game_over() {
                    interface.display_message("Finish the game before sharing your results.");
                    continue;
                }
                let message = share_results(game.state(), collaborators.share);
                collaborators.tracker.track(
                    &AnalyticsEvent::new("share")
                        .category(CATEGORY_ENGAGEMENT)
                        .value(i64::try_from(game.state().guesses().len()).unwrap_or(i64::MAX)),
                );
                interface.display_message(&message);
            }
        }
    }
    Ok(())
}
