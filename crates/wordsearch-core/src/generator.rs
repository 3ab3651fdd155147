use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::grid::{Grid, HighlightMask};

/// Direction a word runs through the grid, as a unit (row, col) step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right (0, +1)
    Right,
    /// Right to left (0, -1)
    Left,
    /// Top to bottom (+1, 0)
    Down,
    /// Bottom to top (-1, 0)
    Up,
}

impl Direction {
    /// Unit (Δrow, Δcol) step for this direction.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Right => write!(f, "right"),
            Direction::Left => write!(f, "left"),
            Direction::Down => write!(f, "down"),
            Direction::Up => write!(f, "up"),
        }
    }
}

/// Configuration for puzzle generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Target number of words to place
    pub word_count: usize,
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Allow downward placement
    pub allow_vertical: bool,
    /// Allow reversed placement (leftward, and upward when combined with
    /// vertical)
    pub allow_reverse: bool,
    /// Random anchor attempts per word before the word is skipped
    pub max_placement_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            word_count: 10,
            width: 12,
            height: 12,
            allow_vertical: true,
            allow_reverse: false,
            max_placement_attempts: 100,
        }
    }
}

/// A word that made it into the grid, with the anchor cell and direction it
/// can be read back from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

/// The result of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// The filled letter grid
    pub grid: Grid,
    /// Marks the cells occupied by placed words
    pub highlight: HighlightMask,
    /// The words that were actually placed, in placement order
    pub placed_words: Vec<PlacedWord>,
}

/// Word search puzzle generator
pub struct Generator {
    config: GeneratorConfig,
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Create a seeded generator with custom configuration
    pub fn with_config_and_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Generate a puzzle from the candidate word list.
    ///
    /// Words are attempted in shuffled order until `word_count` of them have
    /// been placed or the list runs out. A word whose attempt budget runs dry
    /// is skipped, not fatal; it simply does not appear in `placed_words`.
    /// Cells no word reached are filled with random letters.
    pub fn generate(&mut self, words: &[String]) -> Result<Puzzle, GenerateError> {
        let word_count = self.config.word_count;
        let width = self.config.width;
        let height = self.config.height;

        if width == 0 || height == 0 || word_count == 0 || words.is_empty() {
            return Err(GenerateError::InvalidConfig);
        }

        // Blank entries and words longer than the longest dimension can
        // never be placed in any orientation.
        let max_dim = width.max(height);
        let mut candidates: Vec<String> = words
            .iter()
            .filter(|word| !word.is_empty() && word.len() <= max_dim)
            .cloned()
            .collect();
        if candidates.is_empty() {
            return Err(GenerateError::NoFittableWords { width, height });
        }

        // Shuffling decides attempt order only; the generator is a
        // best-effort packer, not a solver.
        self.shuffle(&mut candidates);

        let mut directions = vec![Direction::Right];
        if self.config.allow_reverse {
            directions.push(Direction::Left);
        }
        if self.config.allow_vertical {
            directions.push(Direction::Down);
        }
        if self.config.allow_vertical && self.config.allow_reverse {
            directions.push(Direction::Up);
        }

        let mut cells: Vec<Vec<Option<char>>> = vec![vec![None; width]; height];
        let mut mask = vec![vec![false; width]; height];
        let mut placed_words: Vec<PlacedWord> = Vec::new();

        let target = word_count.min(candidates.len());
        for word in &candidates {
            if placed_words.len() >= target {
                break;
            }
            match self.try_place_word(&mut cells, &mut mask, word, &mut directions) {
                Some(placed) => placed_words.push(placed),
                None => log::warn!("could not find a position for word {word:?}, skipping"),
            }
        }

        if placed_words.is_empty() {
            return Err(GenerateError::NoWordsPlaced);
        }

        let mut rows: Vec<String> = Vec::with_capacity(height);
        for cell_row in cells {
            let mut line = String::with_capacity(width);
            for cell in cell_row {
                line.push(match cell {
                    Some(ch) => ch,
                    None => self.random_letter(),
                });
            }
            rows.push(line);
        }

        Ok(Puzzle {
            grid: Grid::from_parts(rows),
            highlight: HighlightMask::from_cells(mask),
            placed_words,
        })
    }

    /// Attempt to place one word: random anchors, each tried against the
    /// shuffled direction set, until the attempt budget runs out. The word is
    /// only written once a full placement is known to fit.
    fn try_place_word(
        &mut self,
        cells: &mut [Vec<Option<char>>],
        mask: &mut [Vec<bool>],
        word: &str,
        directions: &mut [Direction],
    ) -> Option<PlacedWord> {
        let height = cells.len();
        let width = cells[0].len();
        let letters: Vec<char> = word.chars().collect();

        self.shuffle(directions);

        for _ in 0..self.config.max_placement_attempts {
            let row = self.rng.next_usize(height);
            let col = self.rng.next_usize(width);
            for &direction in directions.iter() {
                if !can_place(cells, &letters, row, col, direction) {
                    continue;
                }
                let (dr, dc) = direction.delta();
                for (i, &ch) in letters.iter().enumerate() {
                    let r = (row as isize + i as isize * dr) as usize;
                    let c = (col as isize + i as isize * dc) as usize;
                    cells[r][c] = Some(ch);
                    mask[r][c] = true;
                }
                return Some(PlacedWord {
                    word: word.to_string(),
                    row,
                    col,
                    direction,
                });
            }
        }
        None
    }

    /// Shuffle a slice using Fisher-Yates
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.rng.next_usize(i + 1);
            slice.swap(i, j);
        }
    }

    fn random_letter(&mut self) -> char {
        (b'A' + self.rng.next_usize(26) as u8) as char
    }
}

/// Check that every letter lands in bounds on a cell that is either empty or
/// already holds the same letter. Words may cross where letters agree.
fn can_place(
    cells: &[Vec<Option<char>>],
    letters: &[char],
    row: usize,
    col: usize,
    direction: Direction,
) -> bool {
    let height = cells.len() as isize;
    let width = cells[0].len() as isize;
    let (dr, dc) = direction.delta();

    for (i, &ch) in letters.iter().enumerate() {
        let r = row as isize + i as isize * dr;
        let c = col as isize + i as isize * dc;
        if r < 0 || r >= height || c < 0 || c >= width {
            return false;
        }
        if let Some(existing) = cells[r as usize][c as usize] {
            if existing != ch {
                return false;
            }
        }
    }
    true
}

/// Simple PRNG for no-std compatibility
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        // Use getrandom for WASM-compatible random seeding
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        let seed = u64::from_le_bytes(seed_bytes);
        Self::with_seed(seed)
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // PCG-like PRNG
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}
