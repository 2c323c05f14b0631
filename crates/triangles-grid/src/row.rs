//! Row identifiers.
//!
//! Rows are labelled `A` through `F` and map to the numeric indices 0-5 used
//! by the coordinate math. A row token from a caller may be either form.

use std::str::FromStr;
use thiserror::Error;

/// One of the six grid rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Row {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
}

/// Why a row token could not be turned into a [`Row`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowParseError {
    /// Nothing but whitespace was supplied.
    #[error("row token is empty")]
    Empty,

    /// A number was supplied but it names no row.
    #[error("row index {0} is outside A-F")]
    OutOfRange(i64),

    /// Neither a row letter nor a number.
    #[error("unrecognized row token `{0}`")]
    Unrecognized(String),
}

impl Row {
    /// All rows in index order.
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Zero-based numeric index of the row.
    pub const fn index(self) -> i32 {
        self as i32
    }

    /// Look up a row by its numeric index.
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// The row letter.
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }
}

impl FromStr for Row {
    type Err = RowParseError;

    /// Case-insensitive; accepts `A`-`F` or `0`-`5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(RowParseError::Empty);
        }

        if let Ok(index) = token.parse::<i64>() {
            return i32::try_from(index)
                .ok()
                .and_then(Self::from_index)
                .ok_or(RowParseError::OutOfRange(index));
        }

        Self::ALL
            .into_iter()
            .find(|row| row.label().eq_ignore_ascii_case(token))
            .ok_or_else(|| RowParseError::Unrecognized(token.to_string()))
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
