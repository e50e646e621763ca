//! Entities and the motion model.
//!
//! Both entity variants share a [`Body`]: a continuous pixel position, a
//! current travel direction (or stillness), and a speed. Direction changes
//! are only evaluated when a body is tile-aligned; changing direction
//! mid-tile would let an entity cut a corner through a wall, so alignment
//! gating guarantees every turn starts from a valid grid node.

pub mod direction;

use glam::{IVec2, Vec2};
use strum_macros::{AsRefStr, EnumIter};

use crate::constants::{
    ALIGNMENT_EPSILON, PLAYER_LIVES, PLAYER_SPAWN_TILE, PLAYER_SPEED, PURSUER_SPEED, TILE_SIZE, TUNNEL_MAX_X,
    TUNNEL_MIN_X,
};
use crate::map::Maze;
use crate::pathfind::shortest_path;
use crate::render::Rgb;

use self::direction::Direction;

/// The two classes of entity, as seen by passability rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Pursuer,
}

/// State shared by every entity: continuous position, travel direction
/// (`None` while stopped), and speed in pixels per second.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub direction: Option<Direction>,
    pub speed: f32,
}

impl Body {
    pub fn new(position: Vec2, direction: Option<Direction>, speed: f32) -> Self {
        Self {
            position,
            direction,
            speed,
        }
    }

    /// Whether the position coincides with a tile center on both axes,
    /// within [`ALIGNMENT_EPSILON`].
    pub fn is_tile_aligned(&self) -> bool {
        let offset_x = ((self.position.x - TILE_SIZE / 2.0) % TILE_SIZE).abs();
        let offset_y = ((self.position.y - TILE_SIZE / 2.0) % TILE_SIZE).abs();
        offset_x < ALIGNMENT_EPSILON && offset_y < ALIGNMENT_EPSILON
    }

    /// Advances the position by `direction * speed * dt`, then applies the
    /// horizontal tunnel wraparound.
    pub fn advance(&mut self, dt: f32) {
        if let Some(direction) = self.direction {
            self.position += direction.as_vec2() * self.speed * dt;
        }
        self.wrap_horizontal();
    }

    /// Teleports the position across the left/right tunnel bounds.
    /// A position already inside the bounds is left untouched, so applying
    /// this twice is a no-op.
    pub fn wrap_horizontal(&mut self) {
        if self.position.x < TUNNEL_MIN_X {
            self.position.x = TUNNEL_MAX_X;
        }
        if self.position.x > TUNNEL_MAX_X {
            self.position.x = TUNNEL_MIN_X;
        }
    }
}

/// The player-controlled entity.
///
/// Input never mutates the current direction directly; it writes the
/// buffered `next_direction`, which is adopted at the next tile alignment
/// if it leads somewhere passable.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    pub next_direction: Option<Direction>,
    pub lives: u32,
}

impl Player {
    pub fn new(maze: &Maze) -> Self {
        Self {
            body: Body::new(
                maze.center_of_tile(PLAYER_SPAWN_TILE),
                Some(Direction::Left),
                PLAYER_SPEED,
            ),
            next_direction: Some(Direction::Left),
            lives: PLAYER_LIVES,
        }
    }

    /// Resolves directional intent at tile alignment.
    ///
    /// Adopts the buffered direction if its next tile is passable; then, if
    /// the current direction no longer leads somewhere passable, stops
    /// rather than clipping into the wall. Does nothing mid-tile.
    pub fn resolve_intent(&mut self, maze: &Maze) {
        if !self.body.is_tile_aligned() {
            return;
        }
        let tile = maze.tile_of_position(self.body.position);
        if let Some(next) = self.next_direction {
            if maze.is_passable(tile + next.as_ivec2(), EntityKind::Player) {
                self.body.direction = Some(next);
            }
        }
        if let Some(current) = self.body.direction {
            if !maze.is_passable(tile + current.as_ivec2(), EntityKind::Player) {
                self.body.direction = None;
            }
        }
    }
}

/// The four pursuer identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum PursuerKind {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl PursuerKind {
    /// The tile whose center this pursuer spawns at.
    pub fn spawn_tile(self) -> IVec2 {
        match self {
            PursuerKind::Blinky => IVec2::new(13, 11),
            PursuerKind::Pinky => IVec2::new(13, 14),
            PursuerKind::Inky => IVec2::new(12, 14),
            PursuerKind::Clyde => IVec2::new(15, 14),
        }
    }

    /// The pursuer's sprite and overlay color.
    pub fn color(self) -> Rgb {
        match self {
            PursuerKind::Blinky => Rgb::new(0xff, 0x00, 0x00),
            PursuerKind::Pinky => Rgb::new(0xff, 0xb8, 0xff),
            PursuerKind::Inky => Rgb::new(0x00, 0xff, 0xff),
            PursuerKind::Clyde => Rgb::new(0xff, 0xb8, 0x52),
        }
    }
}

/// An autonomous pursuer.
///
/// The cached path is refreshed at every tile alignment; only its first
/// step steers the pursuer. The rest is kept for the pause overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Pursuer {
    pub body: Body,
    pub kind: PursuerKind,
    pub path: Vec<IVec2>,
}

impl Pursuer {
    pub fn new(maze: &Maze, kind: PursuerKind) -> Self {
        Self {
            body: Body::new(maze.center_of_tile(kind.spawn_tile()), Some(Direction::Left), PURSUER_SPEED),
            kind,
            path: Vec::new(),
        }
    }

    /// Recomputes the path toward `target` at tile alignment and steers
    /// toward its first step.
    ///
    /// An empty path (target unreachable, or already on it) is a normal
    /// outcome: the pursuer holds its last direction. Does nothing mid-tile.
    pub fn resolve_intent(&mut self, maze: &Maze, target: IVec2) {
        if !self.body.is_tile_aligned() {
            return;
        }
        let tile = maze.tile_of_position(self.body.position);
        self.path = shortest_path(maze, tile, target);
        if let Some(&next) = self.path.first() {
            // Grid adjacency guarantees the step differs on exactly one axis.
            let step = next - tile;
            self.body.direction = Direction::from_ivec2(IVec2::new(step.x.signum(), step.y.signum()));
        }
    }
}

/// An entity is either the player or a pursuer.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Player(Player),
    Pursuer(Pursuer),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Player(_) => EntityKind::Player,
            Entity::Pursuer(_) => EntityKind::Pursuer,
        }
    }

    pub fn body(&self) -> &Body {
        match self {
            Entity::Player(player) => &player.body,
            Entity::Pursuer(pursuer) => &pursuer.body,
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        match self {
            Entity::Player(player) => &mut player.body,
            Entity::Pursuer(pursuer) => &mut pursuer.body,
        }
    }
}
