use serde::{Deserialize, Serialize};

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// One body unit: where it is and where it is heading.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub position: Position,
    pub direction: Direction,
}

impl Segment {
    #[must_use]
    pub fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Takes `direction` as the new heading and moves one cell along it.
    pub fn advance(&mut self, direction: Direction) {
        self.direction = direction;
        self.position = self.position.step(direction);
    }
}

#[cfg(test)]
mod tests {
    use super::{Position, Segment};
    use crate::input::Direction;

    #[test]
    fn step_moves_one_cell() {
        let origin = Position::new(5, 5);

        assert_eq!(origin.step(Direction::Up), Position::new(5, 4));
        assert_eq!(origin.step(Direction::Down), Position::new(5, 6));
        assert_eq!(origin.step(Direction::Left), Position::new(4, 5));
        assert_eq!(origin.step(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn advance_overwrites_direction() {
        let mut segment = Segment::new(Position::new(3, 3), Direction::Down);

        segment.advance(Direction::Left);

        assert_eq!(segment.direction, Direction::Left);
        assert_eq!(segment.position, Position::new(2, 3));
    }
}
