use serde::{Deserialize, Serialize};

use crate::error::ParseGridError;

/// A zero-based (row, col) cell address, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular matrix of ASCII uppercase letters, stored as equal-length
/// rows. Constructors validate, so a `Grid` value is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<String>,
}

impl Grid {
    /// Build a grid from rows already known to be rectangular and uppercase.
    pub(crate) fn from_parts(rows: Vec<String>) -> Self {
        Self { rows }
    }

    /// Build a grid from its rows, validating shape and alphabet.
    pub fn from_rows(rows: Vec<String>) -> Result<Self, ParseGridError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(ParseGridError::Empty);
        }
        let width = rows[0].len();
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ParseGridError::RowWidth {
                    row: row_idx,
                    expected: width,
                    found: row.len(),
                });
            }
            for (col, ch) in row.chars().enumerate() {
                if !ch.is_ascii_uppercase() {
                    return Err(ParseGridError::InvalidCharacter {
                        row: row_idx,
                        col,
                        ch,
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Parse the plain-text form: a `"rows cols"` header line followed by
    /// exactly `rows` lines of exactly `cols` uppercase letters. Trailing
    /// lines beyond the declared row count are ignored.
    pub fn from_text(input: &str) -> Result<Self, ParseGridError> {
        let mut lines = input.lines();
        let header = lines.next().ok_or(ParseGridError::Empty)?;

        let mut fields = header.split_whitespace();
        let height: usize = fields
            .next()
            .and_then(|f| f.parse().ok())
            .filter(|&n| n > 0)
            .ok_or_else(|| ParseGridError::InvalidHeader(header.to_string()))?;
        let width: usize = fields
            .next()
            .and_then(|f| f.parse().ok())
            .filter(|&n| n > 0)
            .ok_or_else(|| ParseGridError::InvalidHeader(header.to_string()))?;

        let mut rows = Vec::with_capacity(height);
        for row_idx in 0..height {
            let line = lines.next().ok_or(ParseGridError::MissingRows {
                expected: height,
                found: row_idx,
            })?;
            if line.len() != width {
                return Err(ParseGridError::RowWidth {
                    row: row_idx,
                    expected: width,
                    found: line.len(),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                if !ch.is_ascii_uppercase() {
                    return Err(ParseGridError::InvalidCharacter {
                        row: row_idx,
                        col,
                        ch,
                    });
                }
            }
            rows.push(line.to_string());
        }
        Ok(Self { rows })
    }

    /// Render the plain-text form accepted by [`Grid::from_text`].
    pub fn to_text(&self) -> String {
        let mut out = format!("{} {}\n", self.height(), self.width());
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out
    }

    pub fn width(&self) -> usize {
        self.rows.first().map(|row| row.len()).unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Letter at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<char> {
        self.rows
            .get(pos.row)
            .and_then(|row| row.as_bytes().get(pos.col))
            .map(|&b| b as char)
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Boolean grid marking the cells occupied by placed words. Same dimensions
/// as the grid it was generated with; never mutated after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightMask {
    cells: Vec<Vec<bool>>,
}

impl HighlightMask {
    pub(crate) fn from_cells(cells: Vec<Vec<bool>>) -> Self {
        Self { cells }
    }

    pub fn width(&self) -> usize {
        self.cells.first().map(|row| row.len()).unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, pos: Position) -> Option<bool> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    /// Whether a placed word occupies `pos`; out-of-bounds reads are `false`.
    pub fn is_set(&self, pos: Position) -> bool {
        self.get(pos).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_form_and_round_trips() {
        let text = "3 3\nCAT\nABA\nTAC\n";
        let grid = Grid::from_text(text).unwrap();
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(Position::new(0, 0)), Some('C'));
        assert_eq!(grid.get(Position::new(2, 2)), Some('C'));
        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert_eq!(grid.to_text(), text);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(Grid::from_text(""), Err(ParseGridError::Empty));
        assert_eq!(Grid::from_rows(Vec::new()), Err(ParseGridError::Empty));
    }

    #[test]
    fn rejects_bad_header() {
        assert!(matches!(
            Grid::from_text("x 3\nAAA\n"),
            Err(ParseGridError::InvalidHeader(_))
        ));
        assert!(matches!(
            Grid::from_text("0 3\n"),
            Err(ParseGridError::InvalidHeader(_))
        ));
        assert!(matches!(
            Grid::from_text("3\nAAA\n"),
            Err(ParseGridError::InvalidHeader(_))
        ));
    }

    #[test]
    fn rejects_missing_rows() {
        assert_eq!(
            Grid::from_text("2 3\nAAA\n"),
            Err(ParseGridError::MissingRows {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn rejects_wrong_row_width() {
        assert_eq!(
            Grid::from_text("1 3\nAAAA\n"),
            Err(ParseGridError::RowWidth {
                row: 0,
                expected: 3,
                found: 4
            })
        );
        assert_eq!(
            Grid::from_rows(vec!["AB".to_string(), "A".to_string()]),
            Err(ParseGridError::RowWidth {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn rejects_non_uppercase_characters() {
        assert_eq!(
            Grid::from_text("1 3\nAbA\n"),
            Err(ParseGridError::InvalidCharacter {
                row: 0,
                col: 1,
                ch: 'b'
            })
        );
    }

    #[test]
    fn display_prints_one_row_per_line() {
        let grid = Grid::from_rows(vec!["AB".to_string(), "CD".to_string()]).unwrap();
        assert_eq!(grid.to_string(), "AB\nCD\n");
    }
}
