//! Maze-chase engine library crate.
//!
//! The simulation core lives here: the maze grid, the pathfinder, the
//! entity motion model, and the per-tick game step. Rendering and input
//! polling are external collaborators that consume the read-only
//! [`render::Frame`] view and feed [`input::GameCommand`]s back in.

pub mod constants;
pub mod entity;
pub mod error;
pub mod game;
pub mod hud;
pub mod input;
pub mod map;
pub mod pathfind;
pub mod render;
