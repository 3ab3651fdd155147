//! Basic example of using the word search engine

use wordsearch_core::{Generator, GeneratorConfig, Resolver};

fn main() {
    // Generate a puzzle
    println!("Generating a 10x10 word search puzzle...\n");
    let words: Vec<String> = ["HELLO", "WORLD", "PUZZLE", "SEARCH", "GRID", "CODE"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    let config = GeneratorConfig {
        word_count: 4,
        width: 10,
        height: 10,
        allow_vertical: true,
        allow_reverse: true,
        ..Default::default()
    };
    let mut generator = Generator::with_config(config);

    let puzzle = match generator.generate(&words) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("Generation failed: {err}");
            return;
        }
    };

    println!("Generated puzzle:");
    println!("{}", puzzle.grid);

    println!("Placed words ({} total):", puzzle.placed_words.len());
    for placed in &puzzle.placed_words {
        println!(
            "- {} at ({}, {}) going {}",
            placed.word, placed.row, placed.col, placed.direction
        );
    }

    // Resolve occurrences of a pattern in a fixed grid
    println!("\n--- Resolving a pattern in a fixed grid ---\n");
    let grid: Vec<String> = ["CAT", "ABA", "TAC"].iter().map(|s| s.to_string()).collect();
    let resolver = Resolver::new();

    let count = resolver.count_occurrences(&grid, "CAT");
    println!("Disjoint occurrences of CAT: {count}");

    println!("Numbered grid:");
    for row in resolver.numbered_grid(&grid, "CAT") {
        println!("{row}");
    }
}
