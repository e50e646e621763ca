//! Centralized error types for the maze-chase engine.
//!
//! Maze parsing is the only fallible initialization step; everything inside
//! the simulation step is a total function over the bounded grid. An empty
//! pathfinder result is a normal outcome, not an error.

/// Main error type for the engine.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Maze parsing error: {0}")]
    MazeParse(#[from] ParseError),
}

/// Error type for maze parsing operations.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Unknown character in maze: {0:?}")]
    UnknownCharacter(char),

    #[error("Maze layout has no rows")]
    EmptyBoard,

    #[error("Row {row} has width {found}, expected {expected}")]
    RaggedRow { row: usize, found: usize, expected: usize },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
