//! Pattern occurrence resolver.
//!
//! Scans a grid for every overlapping horizontal and vertical occurrence of a
//! pattern, then reduces them to a disjoint set by a greedy pass in reading
//! order. The greedy pass is first-in-reading-order-wins, not a maximum
//! packing.

use serde::{Deserialize, Serialize};

use crate::grid::Position;

/// Direction a pattern occurrence runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccurrenceDirection {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for OccurrenceDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OccurrenceDirection::Horizontal => write!(f, "horizontal"),
            OccurrenceDirection::Vertical => write!(f, "vertical"),
        }
    }
}

/// One raw match of the pattern, before disjoint selection. The anchor
/// (row, col) is the first cell of the match in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternOccurrence {
    pub row: usize,
    pub col: usize,
    pub direction: OccurrenceDirection,
    pub len: usize,
}

impl PatternOccurrence {
    /// Cells covered by this occurrence, anchor first.
    pub fn cells(&self) -> Vec<Position> {
        (0..self.len)
            .map(|i| match self.direction {
                OccurrenceDirection::Horizontal => Position::new(self.row, self.col + i),
                OccurrenceDirection::Vertical => Position::new(self.row + i, self.col),
            })
            .collect()
    }
}

/// An occurrence that survived disjoint selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOccurrence {
    /// 1-based sequence index, assigned in acceptance order
    pub index: usize,
    pub occurrence: PatternOccurrence,
}

/// Unit struct resolver — stateless, all state is per-call.
///
/// Operates on plain rows rather than a validated grid so that malformed
/// input (ragged rows, oversized patterns) degrades to zero matches instead
/// of failing.
pub struct Resolver;

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Create a new resolver.
    pub fn new() -> Self {
        Self
    }

    /// Find every overlapping horizontal and vertical match of `pattern`.
    ///
    /// After a match at position `p` the scan resumes at `p + 1`, so "AA" in
    /// "AAA" reports two matches. Horizontal matches are collected before
    /// vertical ones.
    pub fn find_occurrences(&self, rows: &[String], pattern: &str) -> Vec<PatternOccurrence> {
        let mut occurrences = Vec::new();
        if pattern.is_empty() || rows.is_empty() || rows[0].is_empty() {
            return occurrences;
        }

        let pattern: Vec<char> = pattern.chars().collect();

        for (row_idx, row) in rows.iter().enumerate() {
            let line: Vec<char> = row.chars().collect();
            for col in overlapping_matches(&line, &pattern) {
                occurrences.push(PatternOccurrence {
                    row: row_idx,
                    col,
                    direction: OccurrenceDirection::Horizontal,
                    len: pattern.len(),
                });
            }
        }

        let width = rows[0].chars().count();
        for col in 0..width {
            // Column text top to bottom. A ragged row that does not reach
            // this column leaves the whole column out of the scan.
            let column: Option<Vec<char>> = rows
                .iter()
                .map(|row| row.chars().nth(col))
                .collect();
            let Some(column) = column else { continue };
            for row_idx in overlapping_matches(&column, &pattern) {
                occurrences.push(PatternOccurrence {
                    row: row_idx,
                    col,
                    direction: OccurrenceDirection::Vertical,
                    len: pattern.len(),
                });
            }
        }

        occurrences
    }

    /// Reduce the raw matches to a disjoint set.
    ///
    /// Matches are ordered by (row, col) ascending and accepted greedily:
    /// an occurrence is kept iff none of its cells belongs to an already
    /// accepted occurrence. The sort is stable, so a horizontal and a
    /// vertical match sharing an anchor keep their collection order and the
    /// horizontal one wins.
    pub fn resolve(&self, rows: &[String], pattern: &str) -> Vec<ResolvedOccurrence> {
        let mut raw = self.find_occurrences(rows, pattern);
        raw.sort_by(|a, b| (a.row, a.col).cmp(&(b.row, b.col)));

        let height = rows.len();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        let mut occupied = vec![false; width * height];
        let mut accepted: Vec<ResolvedOccurrence> = Vec::new();

        for occurrence in raw {
            let cells = occurrence.cells();
            let free = cells.iter().all(|pos| {
                pos.row < height && pos.col < width && !occupied[pos.row * width + pos.col]
            });
            if free {
                for pos in &cells {
                    occupied[pos.row * width + pos.col] = true;
                }
                accepted.push(ResolvedOccurrence {
                    index: accepted.len() + 1,
                    occurrence,
                });
            }
        }

        accepted
    }

    /// Number of disjoint occurrences of `pattern` in the grid.
    pub fn count_occurrences(&self, rows: &[String], pattern: &str) -> usize {
        self.resolve(rows, pattern).len()
    }

    /// Copy of the grid with every accepted occurrence overwritten by its
    /// sequence symbol: indices 1-9 become '1'..'9', 10-35 become 'A'..'Z',
    /// and anything past that collapses to '*'. Untouched cells keep their
    /// original letter.
    pub fn numbered_grid(&self, rows: &[String], pattern: &str) -> Vec<String> {
        let mut annotated: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();

        for resolved in self.resolve(rows, pattern) {
            let symbol = index_symbol(resolved.index);
            for pos in resolved.occurrence.cells() {
                if let Some(cell) = annotated.get_mut(pos.row).and_then(|row| row.get_mut(pos.col))
                {
                    *cell = symbol;
                }
            }
        }

        annotated
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect()
    }
}

/// Start positions of every (possibly overlapping) occurrence of `pattern`
/// in `text`.
fn overlapping_matches(text: &[char], pattern: &[char]) -> Vec<usize> {
    let mut starts = Vec::new();
    if pattern.is_empty() || text.len() < pattern.len() {
        return starts;
    }
    for start in 0..=text.len() - pattern.len() {
        if &text[start..start + pattern.len()] == pattern {
            starts.push(start);
        }
    }
    starts
}

/// Display symbol for a 1-based occurrence index.
fn index_symbol(index: usize) -> char {
    match index {
        1..=9 => (b'0' + index as u8) as char,
        10..=35 => (b'A' + (index - 10) as u8) as char,
        _ => '*',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn overlapping_horizontal_matches_are_all_reported() {
        let grid = rows(&["AAA"]);
        let raw = Resolver::new().find_occurrences(&grid, "AA");

        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].col, 0);
        assert_eq!(raw[1].col, 1);
        assert!(raw
            .iter()
            .all(|o| o.direction == OccurrenceDirection::Horizontal));
    }

    #[test]
    fn vertical_occurrences_are_found() {
        let grid = rows(&["AX", "AX", "BX"]);
        let resolver = Resolver::new();

        let raw = resolver.find_occurrences(&grid, "AA");
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].direction, OccurrenceDirection::Vertical);
        assert_eq!((raw[0].row, raw[0].col), (0, 0));

        assert_eq!(resolver.numbered_grid(&grid, "AA"), rows(&["1X", "1X", "BX"]));
    }

    #[test]
    fn anchor_tie_prefers_the_horizontal_occurrence() {
        // "CAT" runs across row 0 and down column 0; both anchor at (0, 0).
        let grid = rows(&["CAT", "ABA", "TAC"]);
        let resolver = Resolver::new();

        let raw = resolver.find_occurrences(&grid, "CAT");
        assert_eq!(raw.len(), 2);

        let resolved = resolver.resolve(&grid, "CAT");
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].index, 1);
        assert_eq!(
            resolved[0].occurrence.direction,
            OccurrenceDirection::Horizontal
        );
        assert_eq!(resolver.count_occurrences(&grid, "CAT"), 1);
    }

    #[test]
    fn numbered_grid_marks_only_accepted_cells() {
        let grid = rows(&["CAT", "ABA", "TAC"]);
        let annotated = Resolver::new().numbered_grid(&grid, "CAT");

        assert_eq!(annotated, rows(&["111", "ABA", "TAC"]));
    }

    #[test]
    fn earlier_reading_order_wins_on_overlap() {
        let grid = rows(&["AAA"]);
        let resolved = Resolver::new().resolve(&grid, "AA");

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].occurrence.col, 0);
    }

    #[test]
    fn greedy_selection_packs_in_reading_order() {
        let grid = rows(&["AAAA"]);
        let resolver = Resolver::new();

        assert_eq!(resolver.count_occurrences(&grid, "AA"), 2);
        assert_eq!(resolver.numbered_grid(&grid, "AA"), rows(&["1122"]));
    }

    #[test]
    fn resolution_is_deterministic_and_idempotent() {
        let grid = rows(&["CAT", "ABA", "TAC"]);
        let resolver = Resolver::new();

        let first = resolver.resolve(&grid, "CAT");
        let second = resolver.resolve(&grid, "CAT");
        assert_eq!(first, second);
        assert_eq!(resolver.count_occurrences(&grid, "CAT"), first.len());
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        let resolver = Resolver::new();
        let grid = rows(&["CAT"]);

        assert_eq!(resolver.count_occurrences(&grid, ""), 0);
        assert_eq!(resolver.numbered_grid(&grid, ""), grid);

        assert_eq!(resolver.count_occurrences(&[], "CAT"), 0);
        assert!(resolver.numbered_grid(&[], "CAT").is_empty());

        let blank = rows(&[""]);
        assert_eq!(resolver.count_occurrences(&blank, "CAT"), 0);
    }

    #[test]
    fn pattern_longer_than_the_grid_matches_nothing() {
        let resolver = Resolver::new();
        let grid = rows(&["AB", "AB"]);

        assert_eq!(resolver.count_occurrences(&grid, "ABC"), 0);
        assert_eq!(resolver.count_occurrences(&grid, "AAA"), 0);
        assert_eq!(resolver.numbered_grid(&grid, "ABC"), grid);
    }

    #[test]
    fn ragged_rows_do_not_panic() {
        let grid = rows(&["AB", "A"]);
        let resolver = Resolver::new();

        // Column 1 never fully exists, so only the horizontal match counts.
        assert_eq!(resolver.count_occurrences(&grid, "AB"), 1);
        assert_eq!(resolver.numbered_grid(&grid, "AB"), rows(&["11", "A"]));
    }

    #[test]
    fn index_symbols_cover_digit_letter_and_overflow_bands() {
        // 36 single-cell occurrences: 1-9 digits, 10-35 letters, 36 -> '*'.
        let grid = rows(&["AAAAAA"; 6]);
        let annotated = Resolver::new().numbered_grid(&grid, "A");

        assert_eq!(annotated[0], "123456");
        assert_eq!(annotated[1], "789ABC");
        assert_eq!(annotated[5], "VWXYZ*");
    }

    #[test]
    fn occurrences_round_trip_through_json() {
        let grid = rows(&["CAT", "ABA", "TAC"]);
        let resolved = Resolver::new().resolve(&grid, "CAT");

        let json = serde_json::to_string(&resolved).unwrap();
        let back: Vec<ResolvedOccurrence> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resolved);
    }
}
