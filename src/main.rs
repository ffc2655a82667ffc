use mlb_wordle::analytics::{EventTracker, JsonLinesTracker, LogTracker};
use mlb_wordle::catalog::{
    Catalog, EMBEDDED_CATALOG, load_catalog_from_file, load_catalog_from_str,
};
use mlb_wordle::cli::{CliInterface, parse_cli};
use mlb_wordle::game_state::{
    Collaborators, Game, GameError, GameInterface, RandomSource, game_loop,
};
use mlb_wordle::logging::init_logging;
use mlb_wordle::session::{
    FileSessionStore, MemorySessionStore, SessionStore, check_first_run, default_state_dir,
};
use mlb_wordle::share::{FileShareSink, ShareSink, WriterShareSink};
use mlb_wordle::tui::TuiInterface;
use std::io;
use std::process::ExitCode;

const SHARE_FILE: &str = "last_share.txt";

fn main() -> ExitCode {
    let cli = parse_cli();
    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Failed to open log file: {e}");
        return ExitCode::FAILURE;
    }

    let loaded = match &cli.catalog_path {
        Some(path) => load_catalog_from_file(path).map_err(|e| (path.display().to_string(), e)),
        None => {
            load_catalog_from_str(EMBEDDED_CATALOG).map_err(|e| ("built-in data".to_string(), e))
        }
    };
    let catalog: Catalog = match loaded {
        Ok(catalog) => catalog,
        Err((source, e)) => {
            eprintln!("Failed to load players from '{source}': {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Loaded {} players", catalog.len());

    let state_dir = cli.state_dir.clone().or_else(default_state_dir);
    let mut store: Box<dyn SessionStore> = match &state_dir {
        Some(dir) => Box::new(FileSessionStore::new(dir.clone())),
        None => {
            log::warn!("No data directory available; the first-run flag will not persist");
            Box::new(MemorySessionStore::default())
        }
    };
    let show_instructions = check_first_run(store.as_mut());

    let mut tracker: Box<dyn EventTracker> = match &cli.analytics_log {
        Some(path) => match JsonLinesTracker::open(path) {
            Ok(tracker) => Box::new(tracker),
            Err(e) => {
                log::warn!("Cannot open analytics log '{}': {e}", path.display());
                Box::new(LogTracker)
            }
        },
        None => Box::new(LogTracker),
    };

    let source = match cli.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_entropy(),
    };
    let mut game = Game::new(&catalog, source, usize::from(cli.max_guesses));

    let result = if cli.tui {
        // Stdout belongs to the TUI, so shared results go to a file.
        let share_path = state_dir
            .unwrap_or_else(std::env::temp_dir)
            .join(SHARE_FILE);
        let mut share = FileShareSink::new(share_path);
        TuiInterface::new()
            .map_err(GameError::from)
            .and_then(|mut interface| {
                run(&mut game, &mut interface, tracker.as_mut(), &mut share, show_instructions)
            })
    } else {
        let mut share = WriterShareSink::new(io::stdout(), "stdout");
        let mut interface = CliInterface::new(io::stdin().lock());
        run(&mut game, &mut interface, tracker.as_mut(), &mut share, show_instructions)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    game: &mut Game<'_, RandomSource>,
    interface: &mut dyn GameInterface,
    tracker: &mut dyn EventTracker,
    share: &mut dyn ShareSink,
    show_instructions: bool,
) -> Result<(), GameError> {
    let mut collaborators = Collaborators { tracker, share };
    game_loop(game, interface, &mut collaborators, show_instructions)
}
