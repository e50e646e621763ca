//! Maze model: tile classification and coordinate transforms.
//!
//! The grid never mutates after parsing; pellet presence is tracked outside
//! the maze, in the game state's collectible sets.

pub mod parser;

use glam::{IVec2, Vec2};

use crate::constants::{RAW_MAZE, TILE_SIZE};
use crate::entity::EntityKind;
use crate::error::GameResult;

pub use parser::TileKind;

/// The static maze: a rectangular, immutable grid of tiles.
pub struct Maze {
    tiles: Vec<TileKind>,
    cols: i32,
    rows: i32,
}

impl Maze {
    /// Parses a maze from rows of tile symbols.
    pub fn parse(raw: &[&str]) -> GameResult<Maze> {
        let parsed = parser::parse_board(raw)?;
        Ok(Maze {
            tiles: parsed.tiles,
            cols: parsed.cols,
            rows: parsed.rows,
        })
    }

    /// The standard 28x31 maze from [`RAW_MAZE`].
    pub fn standard() -> GameResult<Maze> {
        Self::parse(&RAW_MAZE)
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Whether a tile lies inside the grid on both axes.
    pub fn in_bounds(&self, tile: IVec2) -> bool {
        tile.x >= 0 && tile.x < self.cols && tile.y >= 0 && tile.y < self.rows
    }

    /// The kind of an in-bounds tile, or `None` outside the grid.
    pub fn tile_kind(&self, tile: IVec2) -> Option<TileKind> {
        if !self.in_bounds(tile) {
            return None;
        }
        Some(self.tiles[(tile.y * self.cols + tile.x) as usize])
    }

    /// Whether a tile blocks movement for every entity.
    ///
    /// Tiles outside the vertical bounds are walls. Tiles outside the
    /// *horizontal* bounds are not: the tunnel rows continue past the grid
    /// edge so entities can reach the wraparound bounds.
    pub fn is_wall(&self, tile: IVec2) -> bool {
        if tile.y < 0 || tile.y >= self.rows {
            return true;
        }
        if tile.x < 0 || tile.x >= self.cols {
            return false;
        }
        self.tile_kind(tile) == Some(TileKind::Wall)
    }

    /// Whether a tile is the house door.
    pub fn is_door(&self, tile: IVec2) -> bool {
        self.tile_kind(tile) == Some(TileKind::Door)
    }

    /// Whether the given entity kind may occupy a tile.
    ///
    /// Walls block everyone; the door blocks only the player.
    pub fn is_passable(&self, tile: IVec2, kind: EntityKind) -> bool {
        if self.is_wall(tile) {
            return false;
        }
        if self.is_door(tile) && kind == EntityKind::Player {
            return false;
        }
        true
    }

    /// The tile owning a continuous pixel-space position.
    pub fn tile_of_position(&self, position: Vec2) -> IVec2 {
        (position / TILE_SIZE).floor().as_ivec2()
    }

    /// The pixel-space center of a tile.
    pub fn center_of_tile(&self, tile: IVec2) -> Vec2 {
        tile.as_vec2() * TILE_SIZE + Vec2::splat(TILE_SIZE / 2.0)
    }

    /// Tiles that spawn a pellet.
    pub fn pellet_spawns(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.spawns_of(TileKind::Pellet)
    }

    /// Tiles that spawn a power pellet.
    pub fn power_pellet_spawns(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.spawns_of(TileKind::PowerPellet)
    }

    fn spawns_of(&self, kind: TileKind) -> impl Iterator<Item = IVec2> + '_ {
        self.tiles.iter().enumerate().filter_map(move |(index, &tile)| {
            if tile == kind {
                Some(IVec2::new(index as i32 % self.cols, index as i32 / self.cols))
            } else {
                None
            }
        })
    }
}
