use crate::catalog::Player;

/// The player attributes compared against the mystery player, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Position,
    Age,
    Team,
    AllStar,
    WorldSeries,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Position,
        Attribute::Age,
        Attribute::Team,
        Attribute::AllStar,
        Attribute::WorldSeries,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Position => "Position",
            Self::Age => "Age",
            Self::Team => "Team",
            Self::AllStar => "All Star",
            Self::WorldSeries => "World Series",
        }
    }

    /// Ordinal attributes get a higher/lower hint when they don't match.
    pub fn is_ordinal(self) -> bool {
        matches!(self, Self::Age | Self::AllStar | Self::WorldSeries)
    }

    fn ordinal_value(self, player: &Player) -> Option<u32> {
        match self {
            Self::Age => Some(player.age),
            Self::AllStar => Some(player.all_star),
            Self::WorldSeries => Some(player.world_series),
            Self::Position | Self::Team => None,
        }
    }

    /// The attribute rendered as text, as shown in a guess row.
    pub fn display_value(self, player: &Player) -> String {
        match self {
            Self::Position => player.position.clone(),
            Self::Team => player.team.clone(),
            Self::Age | Self::AllStar | Self::WorldSeries => self
                .ordinal_value(player)
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Where the mystery player's value lies relative to the guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Equal,
    /// The mystery value is greater than the guessed one.
    Higher,
    /// The mystery value is smaller than the guessed one.
    Lower,
}

impl Hint {
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Equal => "",
            Self::Higher => "↑",
            Self::Lower => "↓",
        }
    }
}

pub fn is_match(guess: &Player, mystery: &Player, attribute: Attribute) -> bool {
    match attribute {
        Attribute::Position => guess.position == mystery.position,
        Attribute::Age => guess.age == mystery.age,
        Attribute::Team => guess.team == mystery.team,
        Attribute::AllStar => guess.all_star == mystery.all_star,
        Attribute::WorldSeries => guess.world_series == mystery.world_series,
    }
}

/// Directional hint for an ordinal attribute; `None` for categorical ones.
pub fn directional_hint(guess: &Player, mystery: &Player, attribute: Attribute) -> Option<Hint> {
    let guessed = attribute.ordinal_value(guess)?;
    let target = attribute.ordinal_value(mystery)?;
    Some(match guessed.cmp(&target) {
        std::cmp::Ordering::Equal => Hint::Equal,
        std::cmp::Ordering::Less => Hint::Higher,
        std::cmp::Ordering::Greater => Hint::Lower,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeFeedback {
    pub attribute: Attribute,
    pub matched: bool,
    pub hint: Option<Hint>,
}

impl AttributeFeedback {
    /// Share-grid glyph for this cell.
    pub fn glyph(&self) -> &'static str {
        if self.matched { "🟩" } else { "⬜" }
    }
}

/// Feedback for one guess, one entry per [`Attribute::ALL`] in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessFeedback {
    pub cells: [AttributeFeedback; 5],
}

impl GuessFeedback {
    pub fn glyphs(&self) -> String {
        self.cells.iter().map(AttributeFeedback::glyph).collect()
    }

    pub fn all_matched(&self) -> bool {
        self.cells.iter().all(|c| c.matched)
    }
}

pub fn evaluate_guess(guess: &Player, mystery: &Player) -> GuessFeedback {
    GuessFeedback {
        cells: Attribute::ALL.map(|attribute| AttributeFeedback {
            attribute,
            matched: is_match(guess, mystery, attribute),
            hint: directional_hint(guess, mystery, attribute),
        }),
    }
}
