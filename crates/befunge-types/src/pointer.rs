//! Instruction pointer vocabulary.

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four cardinal directions of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// All four directions, in the order `?` samples them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit displacement `(dx, dy)`; y grows downward.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Pointer coordinates. `x` is the column, `y` the row.
///
/// Stored unnormalized; the grid wraps them when they are used as an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The position one cell further in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Engine run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Running,
    Halted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_default_direction_is_right() {
        assert_eq!(Direction::default(), Direction::Right);
    }

    #[test]
    fn test_position_step() {
        let origin = Position::default();
        assert_eq!(origin.step(Direction::Right), Position::new(1, 0));
        assert_eq!(origin.step(Direction::Left), Position::new(-1, 0));
        assert_eq!(origin.step(Direction::Down), Position::new(0, 1));
        assert_eq!(origin.step(Direction::Up), Position::new(0, -1));
    }

    #[test]
    fn test_random_direction_covers_all_four() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<Direction> = (0..200).map(|_| rng.gen()).collect();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(format!("{}", Direction::Up), "up");
        assert_eq!(format!("{}", Position::new(3, -1)), "(3, -1)");
    }
}
