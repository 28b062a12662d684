use std::fmt;
use super::types::CellIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    IndexOutOfRange { sponsor: String, index: i64 },
    DuplicateSponsor(String),
    Overlap { index: CellIndex, first: String, second: String },
    UnknownMode(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { sponsor, index } => {
                write!(f, "sponsor '{}' claims out-of-range cell {}", sponsor, index)
            }
            Self::DuplicateSponsor(name) => write!(f, "duplicate sponsor: {}", name),
            Self::Overlap { index, first, second } => {
                write!(f, "cell {} claimed by both '{}' and '{}'", index, first, second)
            }
            Self::UnknownMode(mode) => write!(f, "unknown fit mode: {}", mode),
        }
    }
}

impl std::error::Error for GridError {}

pub type Result<T> = std::result::Result<T, GridError>;
