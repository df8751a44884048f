use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Question difficulty grade, ordered easiest to hardest.
///
/// Wire names follow the external question bank, where the hardest grade is
/// spelled `VERYHARD` with no separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Beginner,
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    /// All grades in ascending order, as reports enumerate them.
    pub const ALL: [Difficulty; 5] = [
        Self::Beginner,
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::VeryHard,
    ];

    /// Returns the wire name for this grade.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
            Self::VeryHard => "VERYHARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}' (expected BEGINNER, EASY, MEDIUM, HARD, or VERYHARD)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BEGINNER" => Ok(Self::Beginner),
            "EASY" => Ok(Self::Easy),
            "MEDIUM" => Ok(Self::Medium),
            "HARD" => Ok(Self::Hard),
            "VERYHARD" => Ok(Self::VeryHard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}
