use glam::{IVec2, Vec2};
use strum_macros::AsRefStr;

/// The four cardinal directions an entity may travel on the grid.
///
/// An entity's direction is always one of these or stillness, modeled as
/// `Option<Direction>` on the entity body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The four cardinal directions, in the fixed order neighbors are
    /// expanded during pathfinding. Reordering this changes tie-breaking.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns the direction as a unit tile step.
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    /// Returns the direction as a unit pixel-space vector.
    pub fn as_vec2(self) -> Vec2 {
        self.as_ivec2().as_vec2()
    }

    /// Converts a unit tile step back into a direction.
    ///
    /// Returns `None` for the zero vector and for any non-unit step.
    pub fn from_ivec2(step: IVec2) -> Option<Direction> {
        match (step.x, step.y) {
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            _ => None,
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
    }

    #[test]
    fn test_direction_as_ivec2() {
        assert_eq!(Direction::Left.as_ivec2(), -IVec2::X);
        assert_eq!(Direction::Right.as_ivec2(), IVec2::X);
        assert_eq!(Direction::Up.as_ivec2(), -IVec2::Y);
        assert_eq!(Direction::Down.as_ivec2(), IVec2::Y);
    }

    #[test]
    fn test_direction_from_ivec2_roundtrip() {
        for dir in Direction::DIRECTIONS {
            assert_eq!(Direction::from_ivec2(dir.as_ivec2()), Some(dir));
        }
    }

    #[test]
    fn test_direction_from_ivec2_rejects_non_unit() {
        assert_eq!(Direction::from_ivec2(IVec2::ZERO), None);
        assert_eq!(Direction::from_ivec2(IVec2::new(1, 1)), None);
        assert_eq!(Direction::from_ivec2(IVec2::new(-2, 0)), None);
    }

    #[test]
    fn test_direction_as_ref_str() {
        assert_eq!(Direction::Left.as_ref(), "left");
        assert_eq!(Direction::Down.as_ref(), "down");
    }

    #[test]
    fn test_directions_order_is_search_order() {
        assert_eq!(
            Direction::DIRECTIONS,
            [Direction::Left, Direction::Right, Direction::Up, Direction::Down]
        );
    }
}
