//! This module contains the main game logic and state.

pub mod state;

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::error::GameResult;
use crate::input::GameCommand;

pub use self::state::GameState;

/// The two states the simulation can be in.
///
/// `Paused` freezes the simulation step entirely; rendering continues and
/// may draw the pause overlay from the frozen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

impl RunState {
    pub fn toggled(self) -> RunState {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }
}

/// The `Game` struct is the main entry point for the engine.
///
/// It owns the simulation state and the single-consumer command queue that
/// serializes asynchronous host input onto the tick context.
pub struct Game {
    pub state: GameState,
    commands: VecDeque<GameCommand>,
}

impl Game {
    pub fn new() -> GameResult<Game> {
        Ok(Game {
            state: GameState::new()?,
            commands: VecDeque::new(),
        })
    }

    /// Queues a command for the next tick. Safe to call from input handling
    /// at any point between ticks; nothing is applied until [`Game::tick`].
    pub fn push_command(&mut self, command: GameCommand) {
        self.commands.push_back(command);
    }

    /// Runs one frame: drains queued commands, then advances the simulation
    /// by `dt` seconds (a no-op while paused).
    pub fn tick(&mut self, dt: f32) {
        self.process_commands();
        self.state.step(dt);
    }

    pub fn is_paused(&self) -> bool {
        self.state.run_state == RunState::Paused
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.commands.pop_front() {
            match command {
                GameCommand::Move(direction) => {
                    debug!(direction = direction.as_ref(), "Buffering player direction");
                    self.state.player_mut().next_direction = Some(direction);
                }
                GameCommand::TogglePause => {
                    self.state.run_state = self.state.run_state.toggled();
                    info!("{}", if self.is_paused() { "Paused" } else { "Unpaused" });
                }
            }
        }
    }
}
