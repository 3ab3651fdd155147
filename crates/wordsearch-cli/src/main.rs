mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use wordsearch_core::{analysis, Generator, GeneratorConfig, Grid, Resolver};

#[derive(Parser)]
#[command(
    name = "wordsearch",
    version,
    about = "Generate word search puzzles and resolve pattern occurrences"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a puzzle from a word list
    Generate(GenerateArgs),
    /// Count and number the disjoint occurrences of a pattern in a grid file
    Solve(SolveArgs),
    /// Show character frequency statistics for a grid file
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Words to place (letters only; lowercase is accepted and uppercased)
    words: Vec<String>,

    /// Read additional words from a file, one per line
    #[arg(long, value_name = "FILE")]
    words_file: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long, default_value_t = 12)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 12)]
    height: usize,

    /// Number of words to place
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Disable vertical placement
    #[arg(long)]
    no_vertical: bool,

    /// Allow reversed (right-to-left, bottom-to-top) placement
    #[arg(long)]
    reverse: bool,

    /// Seed the generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Placement attempts per word before it is skipped
    #[arg(long, default_value_t = 100)]
    attempts: usize,

    /// Highlight placed-word cells and list the placed words
    #[arg(long)]
    solution: bool,

    /// Emit the full puzzle as JSON
    #[arg(long)]
    json: bool,

    /// Also write the grid in its textual form to a file
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct SolveArgs {
    /// Grid file: a "rows cols" header line, then one line per row
    grid_file: PathBuf,

    /// Pattern to search for
    pattern: String,

    /// Print the grid with accepted occurrences replaced by their index
    #[arg(long)]
    numbered: bool,

    /// Emit the resolved occurrences as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Grid file: a "rows cols" header line, then one line per row
    grid_file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => generate(args),
        Command::Solve(args) => solve(args),
        Command::Analyze(args) => analyze(args),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let mut words = args.words.clone();
    if let Some(path) = &args.words_file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading word list {}", path.display()))?;
        words.extend(
            contents
                .lines()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty()),
        );
    }
    let words = normalize_words(&words)?;

    let config = GeneratorConfig {
        word_count: args.count,
        width: args.width,
        height: args.height,
        allow_vertical: !args.no_vertical,
        allow_reverse: args.reverse,
        max_placement_attempts: args.attempts,
    };
    let mut generator = match args.seed {
        Some(seed) => Generator::with_config_and_seed(config, seed),
        None => Generator::with_config(config),
    };

    let puzzle = generator.generate(&words)?;
    log::info!(
        "placed {} of {} requested words",
        puzzle.placed_words.len(),
        args.count.min(words.len())
    );

    if let Some(path) = &args.output {
        fs::write(path, puzzle.grid.to_text())
            .with_context(|| format!("writing grid to {}", path.display()))?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&puzzle)?);
    } else if args.solution {
        render::print_solution(&puzzle)?;
    } else {
        print!("{}", puzzle.grid);
    }
    Ok(())
}

fn solve(args: SolveArgs) -> Result<()> {
    let grid = read_grid(&args.grid_file)?;
    let pattern = args.pattern.to_ascii_uppercase();
    let resolver = Resolver::new();

    let resolved = resolver.resolve(grid.rows(), &pattern);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    println!("{} disjoint occurrence(s) of {pattern}", resolved.len());
    for entry in &resolved {
        println!(
            "{:>3}. ({}, {}) {}",
            entry.index,
            entry.occurrence.row,
            entry.occurrence.col,
            entry.occurrence.direction
        );
    }

    if args.numbered {
        println!();
        for row in resolver.numbered_grid(grid.rows(), &pattern) {
            println!("{row}");
        }
    }
    Ok(())
}

fn analyze(args: AnalyzeArgs) -> Result<()> {
    let grid = read_grid(&args.grid_file)?;
    let counts = analysis::character_counts(grid.rows());

    println!("Character counts:");
    for (ch, count) in &counts {
        println!("  {ch}: {count}");
    }
    println!(
        "Distinct characters: {}",
        analysis::distinct_characters(&counts)
    );
    if let Some(average) = analysis::average_frequency(&counts) {
        println!("Average frequency: {average:.2}");
    }
    println!("Most frequent: {}", char_list(analysis::max_count_chars(&counts)));
    println!("Least frequent: {}", char_list(analysis::min_count_chars(&counts)));
    Ok(())
}

/// Uppercase the words, rejecting anything that is not purely alphabetic.
fn normalize_words(words: &[String]) -> Result<Vec<String>> {
    if words.is_empty() {
        bail!("no words given; pass them as arguments or with --words-file");
    }
    let mut normalized = Vec::with_capacity(words.len());
    for word in words {
        if !word.chars().all(|ch| ch.is_ascii_alphabetic()) {
            bail!("word {word:?} contains non-alphabetic characters");
        }
        normalized.push(word.to_ascii_uppercase());
    }
    Ok(normalized)
}

fn read_grid(path: &Path) -> Result<Grid> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading grid file {}", path.display()))?;
    Grid::from_text(&contents).with_context(|| format!("parsing grid file {}", path.display()))
}

fn char_list(chars: Vec<char>) -> String {
    chars
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_words_to_uppercase() {
        let words = vec!["hello".to_string(), "World".to_string()];
        assert_eq!(
            normalize_words(&words).unwrap(),
            vec!["HELLO".to_string(), "WORLD".to_string()]
        );
    }

    #[test]
    fn rejects_non_alphabetic_words() {
        assert!(normalize_words(&["ok".to_string(), "no-good".to_string()]).is_err());
        assert!(normalize_words(&[]).is_err());
    }
}
