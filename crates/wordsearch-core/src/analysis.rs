//! Character-frequency analysis over grid rows.

use std::collections::BTreeMap;

/// Count how often each character appears across the rows.
pub fn character_counts(rows: &[String]) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        for ch in row.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
    }
    counts
}

/// Characters tied for the highest count.
pub fn max_count_chars(counts: &BTreeMap<char, usize>) -> Vec<char> {
    let Some(&max) = counts.values().max() else {
        return Vec::new();
    };
    counts
        .iter()
        .filter(|(_, &count)| count == max)
        .map(|(&ch, _)| ch)
        .collect()
}

/// Characters tied for the lowest nonzero count.
pub fn min_count_chars(counts: &BTreeMap<char, usize>) -> Vec<char> {
    let Some(&min) = counts.values().filter(|&&count| count > 0).min() else {
        return Vec::new();
    };
    counts
        .iter()
        .filter(|(_, &count)| count == min)
        .map(|(&ch, _)| ch)
        .collect()
}

/// Number of characters that appear at least once.
pub fn distinct_characters(counts: &BTreeMap<char, usize>) -> usize {
    counts.values().filter(|&&count| count > 0).count()
}

/// Mean occurrences per distinct character, or `None` for an empty map.
pub fn average_frequency(counts: &BTreeMap<char, usize>) -> Option<f64> {
    if counts.is_empty() {
        return None;
    }
    let total: usize = counts.values().sum();
    Some(total as f64 / counts.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counts_every_character() {
        let counts = character_counts(&rows(&["CAT", "ABA"]));

        assert_eq!(counts[&'A'], 3);
        assert_eq!(counts[&'B'], 1);
        assert_eq!(counts[&'C'], 1);
        assert_eq!(counts[&'T'], 1);
        assert_eq!(distinct_characters(&counts), 4);
    }

    #[test]
    fn reports_all_ties_for_max_and_min() {
        let counts = character_counts(&rows(&["AABB", "CD"]));

        assert_eq!(max_count_chars(&counts), vec!['A', 'B']);
        assert_eq!(min_count_chars(&counts), vec!['C', 'D']);
    }

    #[test]
    fn empty_rows_have_no_extremes() {
        let counts = character_counts(&[]);

        assert!(max_count_chars(&counts).is_empty());
        assert!(min_count_chars(&counts).is_empty());
        assert_eq!(average_frequency(&counts), None);
    }

    #[test]
    fn average_is_total_over_distinct() {
        let counts = character_counts(&rows(&["AAB"]));

        assert_eq!(average_frequency(&counts), Some(1.5));
    }
}
