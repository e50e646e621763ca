use std::collections::HashSet;

use glam::IVec2;
use smallvec::SmallVec;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::constants::{MAX_FRAME_DELTA, PELLET_SCORE, POWER_PELLET_SCORE};
use crate::entity::{Entity, Player, Pursuer, PursuerKind};
use crate::error::GameResult;
use crate::game::RunState;
use crate::map::Maze;

/// The `GameState` struct holds all the essential data for the simulation.
///
/// This includes the maze, the entities, the collectible sets, the score,
/// and the run state. Centralizing it and keeping it behind one controller
/// makes the simulation deterministic and testable without a rendering
/// surface.
pub struct GameState {
    pub maze: Maze,
    /// The player plus the four pursuers.
    pub entities: SmallVec<[Entity; 5]>,
    /// Tiles still holding a pellet. Shrinks, never grows.
    pub pellets: HashSet<IVec2>,
    /// Tiles still holding a power pellet. Shrinks, never grows.
    pub power_pellets: HashSet<IVec2>,
    pub score: u32,
    pub run_state: RunState,
}

impl GameState {
    /// Creates a new `GameState` on the standard maze, with the collectible
    /// sets seeded from the pellet tiles and every entity at its spawn.
    pub fn new() -> GameResult<Self> {
        let maze = Maze::standard()?;
        let pellets: HashSet<IVec2> = maze.pellet_spawns().collect();
        let power_pellets: HashSet<IVec2> = maze.power_pellet_spawns().collect();

        let mut entities = SmallVec::new();
        entities.push(Entity::Player(Player::new(&maze)));
        for kind in PursuerKind::iter() {
            entities.push(Entity::Pursuer(Pursuer::new(&maze, kind)));
        }

        debug!(
            pellets = pellets.len(),
            power_pellets = power_pellets.len(),
            "Simulation state initialized"
        );

        Ok(Self {
            maze,
            entities,
            pellets,
            power_pellets,
            score: 0,
            run_state: RunState::Running,
        })
    }

    /// Advances the simulation by one clamped time-slice.
    ///
    /// While paused this is a complete no-op, leaving every entity and both
    /// collectible sets untouched. Otherwise: the player resolves intent and
    /// moves first, then each pursuer re-targets the player's post-move tile
    /// and moves, then collectibles are consumed at the player's tile.
    pub fn step(&mut self, dt: f32) {
        if self.run_state == RunState::Paused {
            return;
        }
        let dt = dt.min(MAX_FRAME_DELTA);

        for entity in &mut self.entities {
            if let Entity::Player(player) = entity {
                player.resolve_intent(&self.maze);
                player.body.advance(dt);
            }
        }

        let target = self.player_tile();
        for entity in &mut self.entities {
            if let Entity::Pursuer(pursuer) = entity {
                pursuer.resolve_intent(&self.maze, target);
                pursuer.body.advance(dt);
            }
        }

        // Pursuer contact with the player deliberately has no effect here;
        // the core encodes no collision consequence.
        self.consume_collectibles();
    }

    /// The player's current tile.
    pub fn player_tile(&self) -> IVec2 {
        self.maze.tile_of_position(self.player().body.position)
    }

    pub fn player(&self) -> &Player {
        self.entities
            .iter()
            .find_map(|entity| match entity {
                Entity::Player(player) => Some(player),
                Entity::Pursuer(_) => None,
            })
            .expect("state always contains a player")
    }

    pub fn player_mut(&mut self) -> &mut Player {
        self.entities
            .iter_mut()
            .find_map(|entity| match entity {
                Entity::Player(player) => Some(player),
                Entity::Pursuer(_) => None,
            })
            .expect("state always contains a player")
    }

    pub fn pursuers(&self) -> impl Iterator<Item = &Pursuer> {
        self.entities.iter().filter_map(|entity| match entity {
            Entity::Pursuer(pursuer) => Some(pursuer),
            Entity::Player(_) => None,
        })
    }

    fn consume_collectibles(&mut self) {
        let tile = self.player_tile();
        if self.pellets.remove(&tile) {
            self.score += PELLET_SCORE;
            debug!(?tile, score = self.score, remaining = self.pellets.len(), "Pellet consumed");
        }
        if self.power_pellets.remove(&tile) {
            self.score += POWER_PELLET_SCORE;
            debug!(?tile, score = self.score, "Power pellet consumed");
        }
    }
}
