use crate::segment::Position;

/// Square board whose outermost ring of cells is wall.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    size: u16,
}

impl Grid {
    /// Creates a `size` × `size` grid.
    ///
    /// A grid smaller than 3 cells has no interior and cannot host a round.
    #[must_use]
    pub fn new(size: u16) -> Self {
        debug_assert!(size >= 3, "grid needs at least one interior cell");
        Self { size }
    }

    /// Returns the number of cells along each axis.
    #[must_use]
    pub fn size(self) -> u16 {
        self.size
    }

    /// Returns true when the position lies on the grid.
    #[must_use]
    pub fn is_in_bounds(self, position: Position) -> bool {
        let size = i32::from(self.size);
        position.x >= 0 && position.y >= 0 && position.x < size && position.y < size
    }

    /// Returns true for the outer ring and for anything off the grid.
    #[must_use]
    pub fn is_wall(self, position: Position) -> bool {
        let last = i32::from(self.size) - 1;
        position.x <= 0 || position.y <= 0 || position.x >= last || position.y >= last
    }

    /// Iterates over every cell strictly inside the wall ring, row by row.
    pub fn interior_cells(self) -> impl Iterator<Item = Position> {
        let last = i32::from(self.size) - 1;
        (1..last).flat_map(move |y| (1..last).map(move |x| Position { x, y }))
    }

    /// Returns the number of cells strictly inside the wall ring.
    #[must_use]
    pub fn interior_cell_count(self) -> usize {
        let inner = usize::from(self.size.saturating_sub(2));
        inner * inner
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use crate::segment::Position;

    #[test]
    fn outer_ring_is_wall() {
        let grid = Grid::new(30);

        assert!(grid.is_wall(Position { x: 0, y: 15 }));
        assert!(grid.is_wall(Position { x: 29, y: 15 }));
        assert!(grid.is_wall(Position { x: 15, y: 0 }));
        assert!(grid.is_wall(Position { x: 15, y: 29 }));
        assert!(grid.is_wall(Position { x: 29, y: 29 }));
    }

    #[test]
    fn interior_is_not_wall() {
        let grid = Grid::new(30);

        assert!(!grid.is_wall(Position { x: 1, y: 1 }));
        assert!(!grid.is_wall(Position { x: 28, y: 28 }));
        assert!(!grid.is_wall(Position { x: 10, y: 10 }));
    }

    #[test]
    fn off_grid_counts_as_wall_but_not_in_bounds() {
        let grid = Grid::new(30);
        let outside = Position { x: -1, y: 30 };

        assert!(grid.is_wall(outside));
        assert!(!grid.is_in_bounds(outside));
        assert!(grid.is_in_bounds(Position { x: 29, y: 0 }));
    }

    #[test]
    fn interior_cells_exclude_ring() {
        let grid = Grid::new(5);
        let cells: Vec<_> = grid.interior_cells().collect();

        assert_eq!(cells.len(), grid.interior_cell_count());
        assert_eq!(cells.len(), 9);
        assert!(cells.iter().all(|cell| !grid.is_wall(*cell)));
        assert_eq!(cells[0], Position { x: 1, y: 1 });
    }
}
