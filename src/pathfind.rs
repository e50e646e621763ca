//! Breadth-first shortest paths over the maze grid.

use glam::IVec2;
use pathfinding::prelude::bfs;
use smallvec::SmallVec;

use crate::entity::direction::Direction;
use crate::entity::EntityKind;
use crate::map::Maze;

/// Computes the shortest path from `start` to `goal`, excluding `start` and
/// including `goal`.
///
/// The search expands 4-adjacent neighbors in the fixed order of
/// [`Direction::DIRECTIONS`], so equal-length paths tie-break
/// deterministically. Passability is evaluated for the pursuer kind, which
/// lets the search cross the house door. The search is additionally bounded
/// to in-bounds tiles: the tunnel continues past the horizontal edges, but
/// without wrap edges in the search graph no real path leads through there,
/// and the bound keeps a search for an unreachable goal O(tiles).
///
/// Returns an empty path when the goal is unreachable or `start == goal`.
pub fn shortest_path(maze: &Maze, start: IVec2, goal: IVec2) -> Vec<IVec2> {
    let result = bfs(
        &start,
        |&tile| {
            Direction::DIRECTIONS
                .iter()
                .map(move |direction| tile + direction.as_ivec2())
                .filter(|&next| maze.in_bounds(next) && maze.is_passable(next, EntityKind::Pursuer))
                .collect::<SmallVec<[IVec2; 4]>>()
        },
        |&tile| tile == goal,
    );

    match result {
        // The crate's `bfs` includes the start tile; callers want steps only.
        Some(path) => path.into_iter().skip(1).collect(),
        None => Vec::new(),
    }
}
