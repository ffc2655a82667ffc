// Integration tests for the mlb-wordle application
// These tests verify that all modules work together correctly

use mlb_wordle::analytics::RecordingTracker;
use mlb_wordle::cli::CliInterface;
use mlb_wordle::session::{MemorySessionStore, check_first_run};
use mlb_wordle::share::WriterShareSink;
use mlb_wordle::*;
use std::io::Cursor;

const TWO_PLAYERS: &str = "Name,Position,Age,Team,AllStar,WorldSeries\n\
    A,P1,30,T1,1,0\n\
    B,P2,25,T2,3,1\n";

fn embedded() -> Catalog {
    load_catalog_from_str(EMBEDDED_CATALOG).unwrap()
}

fn index_of(catalog: &Catalog, name: &str) -> usize {
    catalog.iter().position(|p| p.name == name).unwrap()
}

/// Runs a scripted CLI session and returns the tracker and whatever was "copied".
fn play(catalog: &Catalog, mystery: &str, input: &str) -> (RecordingTracker, String) {
    let mut game = Game::new(catalog, FixedSource(index_of(catalog, mystery)), MAX_GUESSES);
    let mut interface = CliInterface::new(Cursor::new(input.to_string()));
    let mut tracker = RecordingTracker::default();
    let mut sink = WriterShareSink::new(Vec::new(), "clipboard");
    {
        let mut collaborators = Collaborators {
            tracker: &mut tracker,
            share: &mut sink,
        };
        game_loop(&mut game, &mut interface, &mut collaborators, true).unwrap();
    }
    (tracker, String::from_utf8(sink.into_inner()).unwrap())
}

#[test]
fn test_two_player_scenario() {
    let catalog = load_catalog_from_str(TWO_PLAYERS).unwrap();
    let mut game = Game::new(&catalog, FixedSource(0), MAX_GUESSES);
    game.start_new_game().unwrap();

    let mystery = game.state().mystery_player().unwrap();
    assert_eq!(mystery.name, "A");

    let b = catalog.find("B").unwrap();
    for attribute in Attribute::ALL {
        assert!(!is_match(b, mystery, attribute));
    }
    assert_eq!(directional_hint(b, mystery, Attribute::Age), Some(Hint::Higher));
    assert_eq!(directional_hint(b, mystery, Attribute::AllStar), Some(Hint::Lower));
    assert_eq!(directional_hint(b, mystery, Attribute::WorldSeries), Some(Hint::Lower));

    let state = game.apply(GameEvent::Guess(b)).unwrap();
    assert!(!state.game_over());
    assert_eq!(state.guessed_names(), vec!["B"]);
}

#[test]
fn test_filter_scenario_on_embedded_data() {
    let catalog = embedded();
    let players: Vec<Player> = catalog
        .iter()
        .filter(|p| p.name == "Mike Trout" || p.name == "Aaron Judge")
        .cloned()
        .collect();
    let result = filter_players(&players, "tr", &[]);
    let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Mike Trout"]);
}

#[test]
fn test_mystery_always_from_catalog() {
    let catalog = embedded();
    let mut game = Game::new(&catalog, RandomSource::seeded(2024), MAX_GUESSES);
    for _ in 0..50 {
        let state = game.start_new_game().unwrap();
        let mystery = state.mystery_player().unwrap();
        assert!(catalog.iter().any(|p| p.name == mystery.name));
    }
}

#[test]
fn test_guess_budget_never_exceeded() {
    let catalog = embedded();
    let mystery = "Gerrit Cole";
    let mut game = Game::new(&catalog, FixedSource(index_of(&catalog, mystery)), MAX_GUESSES);
    game.start_new_game().unwrap();

    for player in catalog.iter().filter(|p| p.name != mystery) {
        game.apply(GameEvent::Guess(player)).unwrap();
        assert!(game.state().guesses().len() <= MAX_GUESSES);
    }
    let state = game.state();
    assert_eq!(state.guesses().len(), MAX_GUESSES);
    assert_eq!(state.phase(), Phase::GameOver(Outcome::Lost));
    assert!(!state.won());
    assert!(!state.gave_up());
}

#[test]
fn test_cli_session_win_and_share() {
    let catalog = embedded();
    // "betts" -> 1 suggestion, guess it; then find Soto and guess him.
    let input = "betts\n1\nsoto\n1\nshare\nexit\n";
    let (tracker, shared) = play(&catalog, "Juan Soto", input);

    assert_eq!(
        tracker.actions(),
        vec!["game_start", "guess", "guess", "game_won", "share"]
    );
    let lines: Vec<&str> = shared.lines().collect();
    assert_eq!(lines[0], "MLB Wordle - Juan Soto");
    assert_eq!(lines[1], "I got it in 2/8 guesses!");
    assert_eq!(lines[3], "🟩⬜⬜⬜⬜");
    assert_eq!(lines[4], "🟩🟩🟩🟩🟩");
    assert_eq!(lines[6], "Play at: https://mlbwordle.me");
}

#[test]
fn test_cli_session_give_up_then_new_game() {
    let catalog = embedded();
    let input = "giveup\nfree\n1\ngiveup\nnew\nexit\n";
    let (tracker, shared) = play(&catalog, "Mike Trout", input);
    assert_eq!(
        tracker.actions(),
        vec!["game_start", "guess", "give_up", "new_game"]
    );
    assert!(shared.is_empty());
}

#[test]
fn test_cli_session_duplicate_pick_is_ignored() {
    let catalog = embedded();
    // The second "judge" search yields nothing, so "1" picks nothing.
    let input = "judge\n1\njudge\n1\nexit\n";
    let (tracker, _) = play(&catalog, "Mike Trout", input);
    assert_eq!(tracker.actions(), vec!["game_start", "guess"]);
}

#[test]
fn test_cli_session_ends_at_end_of_input() {
    let catalog = embedded();
    let (tracker, _) = play(&catalog, "Mike Trout", "trout\n");
    assert_eq!(tracker.actions(), vec!["game_start"]);
}

#[test]
fn test_first_run_flag_with_injected_store() {
    let mut store = MemorySessionStore::default();
    assert!(check_first_run(&mut store));
    assert!(!check_first_run(&mut store));
}

#[test]
fn test_bad_catalog_is_reported() {
    let data = "Name,Position,Age,Team,AllStar,WorldSeries\nA,P1,old,T1,1,0\n";
    let err = load_catalog_from_str(data).unwrap_err();
    assert_eq!(
        err.to_string(),
        "line 2: column \"Age\" expects a whole number, found \"old\""
    );
    let game_err: GameError = err.into();
    assert!(matches!(game_err, GameError::DataFormat(_)));
}
