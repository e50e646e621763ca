//! Read-only frame view for an external renderer.
//!
//! The engine does not draw. Once per tick a renderer takes a [`Frame`]
//! and consumes the maze classification, the collectible sets, and the
//! entity sprites; the pursuer path overlays are populated only while
//! paused, matching the pause-screen diagnostic display.

use std::collections::HashSet;

use glam::{IVec2, Vec2};
use smallvec::SmallVec;

use crate::entity::direction::Direction;
use crate::entity::{Entity, EntityKind};
use crate::game::GameState;
use crate::map::Maze;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The player's sprite color.
pub const PLAYER_COLOR: Rgb = Rgb::new(0xff, 0xeb, 0x3b);

/// Everything a renderer needs to draw one entity.
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub kind: EntityKind,
    pub position: Vec2,
    pub direction: Option<Direction>,
    pub color: Rgb,
}

/// A pursuer's last-computed path, drawn from its current position.
#[derive(Debug, Clone, Copy)]
pub struct PathOverlay<'a> {
    pub color: Rgb,
    pub origin: Vec2,
    pub path: &'a [IVec2],
}

/// A read-only snapshot view of one frame.
pub struct Frame<'a> {
    pub maze: &'a Maze,
    pub pellets: &'a HashSet<IVec2>,
    pub power_pellets: &'a HashSet<IVec2>,
    pub sprites: SmallVec<[Sprite; 5]>,
    pub paused: bool,
    /// Non-empty pursuer paths; populated only while paused.
    pub path_overlays: SmallVec<[PathOverlay<'a>; 4]>,
}

/// Builds the frame view for the current state.
pub fn frame(state: &GameState) -> Frame<'_> {
    let paused = state.run_state == crate::game::RunState::Paused;

    let sprites = state
        .entities
        .iter()
        .map(|entity| Sprite {
            kind: entity.kind(),
            position: entity.body().position,
            direction: entity.body().direction,
            color: match entity {
                Entity::Player(_) => PLAYER_COLOR,
                Entity::Pursuer(pursuer) => pursuer.kind.color(),
            },
        })
        .collect();

    let path_overlays = if paused {
        state
            .pursuers()
            .filter(|pursuer| !pursuer.path.is_empty())
            .map(|pursuer| PathOverlay {
                color: pursuer.kind.color(),
                origin: pursuer.body.position,
                path: pursuer.path.as_slice(),
            })
            .collect()
    } else {
        SmallVec::new()
    };

    Frame {
        maze: &state.maze,
        pellets: &state.pellets,
        power_pellets: &state.power_pellets,
        sprites,
        paused,
        path_overlays,
    }
}
