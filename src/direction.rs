//! Movement directions and held-key sets.

use bitflags::bitflags;
use glam::Vec2;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// One of the four movement directions.
///
/// Screen coordinates: the y axis points down, so `Up` is negative y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The unit vector for this direction.
    pub fn vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

bitflags! {
    /// The set of movement directions currently held.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct DirectionSet: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => DirectionSet::UP,
            Direction::Down => DirectionSet::DOWN,
            Direction::Left => DirectionSet::LEFT,
            Direction::Right => DirectionSet::RIGHT,
        }
    }
}

impl DirectionSet {
    /// Sums the unit vectors of all held directions. Opposite directions
    /// cancel to zero, which is valid input and simply means no movement.
    pub fn vector(self) -> Vec2 {
        Direction::iter()
            .filter(|&d| self.contains(d.into()))
            .map(Direction::vector)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_cancel() {
        let held = DirectionSet::LEFT | DirectionSet::RIGHT;
        assert_eq!(held.vector(), Vec2::ZERO);
    }

    #[test]
    fn test_diagonal_sum() {
        let held = DirectionSet::UP | DirectionSet::RIGHT;
        assert_eq!(held.vector(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_opposite_roundtrip() {
        for direction in Direction::DIRECTIONS {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }
}
