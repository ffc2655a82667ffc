//! The one piece of state kept between runs: whether the user has played.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const HAS_PLAYED_KEY: &str = "mlbWordleHasPlayed";
const APP_DIR: &str = "mlb-wordle";

#[derive(Debug, Error)]
#[error("session store error for key \"{key}\"")]
pub struct SessionError {
    pub key: String,
    #[source]
    pub source: io::Error,
}

/// Minimal string key-value storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError>;
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key inside a directory.
#[derive(Debug)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(self.key_path(key), value))
            .map_err(|source| SessionError {
                key: key.to_string(),
                source,
            })
    }
}

/// Default location for session data, e.g. `~/.local/share/mlb-wordle`.
pub fn default_state_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR))
}

/// Returns `true` on the first run (show the instructions) and records that
/// the user has now played. A failed write only costs a repeat of the
/// instructions next time.
pub fn check_first_run(store: &mut dyn SessionStore) -> bool {
    if store.get(HAS_PLAYED_KEY).is_some() {
        return false;
    }
    let stamp = chrono::Utc::now().to_rfc3339();
    if let Err(e) = store.set(HAS_PLAYED_KEY, &stamp) {
        log::warn!("{e}: {}", e.source);
    }
    true
}
