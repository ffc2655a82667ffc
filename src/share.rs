use crate::game_state::GameState;
use crate::hint::evaluate_guess;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

pub const SHARE_TITLE: &str = "MLB Wordle";
pub const SHARE_FOOTER: &str = "Play at: https://mlbwordle.me";

#[derive(Debug, Error)]
#[error("could not copy results to {target}")]
pub struct ShareError {
    pub target: String,
    #[source]
    pub source: io::Error,
}

/// Receives the finished share text, standing in for a clipboard.
pub trait ShareSink {
    /// Human-readable destination, used in the confirmation message.
    fn target(&self) -> String;

    fn copy(&mut self, text: &str) -> Result<(), ShareError>;
}

/// Writes share text to any writer (stdout in the line interface).
pub struct WriterShareSink<W: Write> {
    writer: W,
    name: String,
}

impl<W: Write> WriterShareSink<W> {
    pub fn new(writer: W, name: &str) -> Self {
        Self {
            writer,
            name: name.to_string(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ShareSink for WriterShareSink<W> {
    fn target(&self) -> String {
        self.name.clone()
    }

    fn copy(&mut self, text: &str) -> Result<(), ShareError> {
        writeln!(self.writer, "{text}")
            .and_then(|()| self.writer.flush())
            .map_err(|source| ShareError {
                target: self.name.clone(),
                source,
            })
    }
}

/// Replaces the contents of a file with the share text.
pub struct FileShareSink {
    path: PathBuf,
}

impl FileShareSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ShareSink for FileShareSink {
    fn target(&self) -> String {
        self.path.display().to_string()
    }

    fn copy(&mut self, text: &str) -> Result<(), ShareError> {
        fs::write(&self.path, text).map_err(|source| ShareError {
            target: self.target(),
            source,
        })
    }
}

/// Builds the spoiler-free result grid. `None` until a mystery player exists.
pub fn share_text(state: &GameState<'_>) -> Option<String> {
    let mystery = state.mystery_player()?;
    let mut text = format!("{SHARE_TITLE} - {}\n", mystery.name);
    if state.won() {
        text.push_str(&format!(
            "I got it in {}/{} guesses!",
            state.guesses().len(),
            state.max_guesses()
        ));
    } else {
        text.push_str("I gave up!");
    }
    text.push_str("\n\n");
    for guess in state.guesses() {
        text.push_str(&evaluate_guess(guess, mystery).glyphs());
        text.push('\n');
    }
    text.push('\n');
    text.push_str(SHARE_FOOTER);
    Some(text)
}

/// Hands the share text to `sink` and returns the message to show the user.
pub fn share_results(state: &GameState<'_>, sink: &mut dyn ShareSink) -> String {
    let Some(text) = share_text(state) else {
        return "Nothing to share yet.".to_string();
    };
    match sink.copy(&text) {
        Ok(()) => format!("Results copied to {}!", sink.target()),
        Err(e) => {
            log::warn!("{e}: {}", e.source);
            "Failed to copy results. Please try again.".to_string()
        }
    }
}
