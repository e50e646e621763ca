//! Parsing of raw character layouts into tile grids.

use crate::error::ParseError;

/// An enum representing the different types of tiles in the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// A solid wall.
    Wall,
    /// The house door, passable only by pursuers.
    Door,
    /// Plain walkable floor.
    Floor,
    /// Floor that spawns a pellet.
    Pellet,
    /// Floor that spawns a power pellet.
    PowerPellet,
}

impl TileKind {
    /// Maps a layout symbol to its tile kind.
    pub fn from_char(symbol: char) -> Result<TileKind, ParseError> {
        match symbol {
            '#' => Ok(TileKind::Wall),
            '=' => Ok(TileKind::Door),
            ' ' => Ok(TileKind::Floor),
            '.' => Ok(TileKind::Pellet),
            'o' => Ok(TileKind::PowerPellet),
            other => Err(ParseError::UnknownCharacter(other)),
        }
    }
}

/// The result of parsing a raw layout: a row-major tile grid.
#[derive(Debug)]
pub(crate) struct ParsedMaze {
    pub tiles: Vec<TileKind>,
    pub cols: i32,
    pub rows: i32,
}

/// Parses a rectangular character layout into tiles.
///
/// Every row must have the same width as the first.
pub(crate) fn parse_board(raw: &[&str]) -> Result<ParsedMaze, ParseError> {
    let first = raw.first().ok_or(ParseError::EmptyBoard)?;
    let cols = first.chars().count();

    let mut tiles = Vec::with_capacity(cols * raw.len());
    for (row, line) in raw.iter().enumerate() {
        let width = line.chars().count();
        if width != cols {
            return Err(ParseError::RaggedRow {
                row,
                found: width,
                expected: cols,
            });
        }
        for symbol in line.chars() {
            tiles.push(TileKind::from_char(symbol)?);
        }
    }

    Ok(ParsedMaze {
        tiles,
        cols: cols as i32,
        rows: raw.len() as i32,
    })
}
