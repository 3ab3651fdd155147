use thiserror::Error;

/// Failure modes of puzzle generation.
///
/// Skipping an individual word that ran out of placement attempts is not an
/// error; it is reported by the word's absence from the placed-word list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("invalid grid dimensions, word count, or empty word list")]
    InvalidConfig,

    #[error("no word in the list fits within a {width}x{height} grid")]
    NoFittableWords { width: usize, height: usize },

    #[error("failed to place any words into the grid")]
    NoWordsPlaced,
}

/// Failure modes of parsing a grid from its textual form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("empty grid input")]
    Empty,

    #[error("invalid dimensions header: {0:?}")]
    InvalidHeader(String),

    #[error("expected {expected} rows, found only {found}")]
    MissingRows { expected: usize, found: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid character {ch:?} at row {row}, column {col}")]
    InvalidCharacter { row: usize, col: usize, ch: char },
}
