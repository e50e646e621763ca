//! Input commands delivered by the host environment.

use crate::entity::direction::Direction;

/// A discrete command from the host.
///
/// Commands may arrive asynchronously, but they are queued on the
/// [`Game`](crate::game::Game) and drained at the start of each tick, so
/// entity and pause state are only ever mutated on the tick context.
/// `Move` writes the player's buffered next-direction; it never changes the
/// current direction directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Move(Direction),
    TogglePause,
}
