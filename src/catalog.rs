use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

pub const EMBEDDED_CATALOG: &str = include_str!("resources/players.csv");

const NAME: &str = "Name";
const POSITION: &str = "Position";
const AGE: &str = "Age";
const TEAM: &str = "Team";
const ALL_STAR: &str = "AllStar";
const WORLD_SERIES: &str = "WorldSeries";

/// One row of the player dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub position: String,
    pub age: u32,
    pub team: String,
    pub all_star: u32,
    pub world_series: u32,
}

/// Errors raised while reading the player dataset.
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("required column \"{0}\" is missing from the header")]
    MissingColumn(&'static str),

    #[error("line {line}: column \"{column}\" expects a whole number, found \"{value}\"")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("line {line}: player \"{name}\" appears more than once")]
    DuplicateName { line: u64, name: String },

    #[error("malformed player data")]
    Csv(#[from] csv::Error),

    #[error("could not read player data")]
    Io(#[from] io::Error),
}

/// The immutable, ordered set of players a session draws from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    players: Vec<Player>,
}

impl Catalog {
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Exact, case-insensitive lookup by player name.
    pub fn find(&self, name: &str) -> Option<&Player> {
        let wanted = name.trim().to_lowercase();
        self.players.iter().find(|p| p.name.to_lowercase() == wanted)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

/// Column positions resolved from the header row.
struct Columns {
    name: usize,
    position: usize,
    age: usize,
    team: usize,
    all_star: usize,
    world_series: usize,
}

impl Columns {
    fn from_header(header: &StringRecord) -> Result<Self, DataFormatError> {
        let find = |column: &'static str| {
            header
                .iter()
                .position(|h| h == column)
                .ok_or(DataFormatError::MissingColumn(column))
        };
        Ok(Self {
            name: find(NAME)?,
            position: find(POSITION)?,
            age: find(AGE)?,
            team: find(TEAM)?,
            all_star: find(ALL_STAR)?,
            world_series: find(WORLD_SERIES)?,
        })
    }
}

fn text_field(record: &StringRecord, index: usize) -> String {
    record.get(index).unwrap_or_default().to_string()
}

fn number_field(
    record: &StringRecord,
    index: usize,
    column: &'static str,
) -> Result<u32, DataFormatError> {
    let raw = record.get(index).unwrap_or_default();
    raw.parse::<u32>().map_err(|_| DataFormatError::InvalidNumber {
        line: record.position().map_or(0, csv::Position::line),
        column,
        value: raw.to_string(),
    })
}

pub fn load_catalog_from_reader<R: Read>(reader: R) -> Result<Catalog, DataFormatError> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let columns = Columns::from_header(csv_reader.headers()?)?;

    let mut players = Vec::new();
    let mut seen = HashSet::new();
    for record in csv_reader.records() {
        let record = record?;
        let player = Player {
            name: text_field(&record, columns.name),
            position: text_field(&record, columns.position),
            age: number_field(&record, columns.age, AGE)?,
            team: text_field(&record, columns.team),
            all_star: number_field(&record, columns.all_star, ALL_STAR)?,
            world_series: number_field(&record, columns.world_series, WORLD_SERIES)?,
        };
        if !seen.insert(player.name.clone()) {
            return Err(DataFormatError::DuplicateName {
                line: record.position().map_or(0, csv::Position::line),
                name: player.name,
            });
        }
        players.push(player);
    }
    crate::debug_log!("Loaded {} players", players.len());
    Ok(Catalog { players })
}

pub fn load_catalog_from_str(data: &str) -> Result<Catalog, DataFormatError> {
    load_catalog_from_reader(data.as_bytes())
}

pub fn load_catalog_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, DataFormatError> {
    let file = File::open(path)?;
    load_catalog_from_reader(io::BufReader::new(file))
}
