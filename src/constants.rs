//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::IVec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of each tile, in pixels.
pub const TILE_SIZE: f32 = 16.0;
/// The width of the maze, in tiles.
pub const BOARD_COLS: i32 = 28;
/// The height of the maze, in tiles.
pub const BOARD_ROWS: i32 = 31;

/// How close (in pixels, per axis) a position must be to a tile center to
/// count as tile-aligned. Direction changes are only evaluated at alignment.
pub const ALIGNMENT_EPSILON: f32 = 0.5;

/// Frame deltas are clamped to this (in seconds) so a stalled host cannot
/// advance an entity through geometry in a single step.
pub const MAX_FRAME_DELTA: f32 = 0.05;

/// Player movement speed, in pixels per second.
pub const PLAYER_SPEED: f32 = 90.0;
/// Pursuer movement speed, in pixels per second.
pub const PURSUER_SPEED: f32 = 80.0;

/// Points awarded for consuming a pellet.
pub const PELLET_SCORE: u32 = 10;
/// Points awarded for consuming a power pellet.
pub const POWER_PELLET_SCORE: u32 = 50;

/// The tile whose center the player spawns at.
pub const PLAYER_SPAWN_TILE: IVec2 = IVec2::new(13, 23);
/// Lives the player starts with. Nothing in the core decrements this.
pub const PLAYER_LIVES: u32 = 3;

/// Horizontal tunnel bounds, in pixels. A position past either bound
/// teleports to the opposite one. There is no vertical equivalent.
pub const TUNNEL_MIN_X: f32 = -TILE_SIZE / 2.0;
pub const TUNNEL_MAX_X: f32 = BOARD_COLS as f32 * TILE_SIZE + TILE_SIZE / 2.0;

/// The raw layout of the maze, as rows of tile symbols.
///
/// `#` wall, `=` house door (pursuer-only), `.` pellet, `o` power pellet,
/// space for plain floor.
pub const RAW_MAZE: [&str; BOARD_ROWS as usize] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.#####.##.#####.######",
    "     #.#####.##.#####.#     ",
    "     #.##..........##.#     ",
    "     #.##.###==###.##.#     ",
    "######.##.#      #.##.######",
    "      .   #      #   .      ",
    "      .   #      #   .      ",
    "######.##.#      #.##.######",
    "     #.##.########.##.#     ",
    "     #.##..........##.#     ",
    "     #.##.########.##.#     ",
    "######.##.########.##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##................##..o#",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];
