//! Core word search engine.
//!
//! Two independent pieces that share no state: a randomized [`Generator`]
//! that packs words into a letter grid under directional constraints, and a
//! [`Resolver`] that finds every horizontal/vertical occurrence of a pattern
//! in an existing grid and reduces them to a numbered disjoint set.
//!
//! The crate is pure computation: callers own all I/O and rendering.

pub mod analysis;
mod error;
mod generator;
mod grid;
mod resolver;

pub use error::{GenerateError, ParseGridError};
pub use generator::{Direction, Generator, GeneratorConfig, PlacedWord, Puzzle};
pub use grid::{Grid, HighlightMask, Position};
pub use resolver::{OccurrenceDirection, PatternOccurrence, ResolvedOccurrence, Resolver};
