//! coordinate math for a rectangular grid of cells.
//!
//! Cells are identified by their row-major index: `cell = y * width + x`.
//! There is no cell object beyond that integer; `(x, y)` is derived on demand.
//!
//! ```sh
//! 0 -- 1 -- 2
//! |    |    |
//! 3 -- 4 -- 5
//! |    |    |
//! 6 -- 7 -- 8
//! ```

use crate::MazeError;
use std::fmt;

/// One of the four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Order in which neighbors are listed by [Grid::neighbors]: left, right, up, down.
    pub const NEIGHBOR_ORDER: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Single lowercase letter: `n`, `e`, `s` or `w`.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::East => 'e',
            Direction::South => 's',
            Direction::West => 'w',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

/// Which part of the grid's border a cell sits on.
///
/// Every cell belongs to exactly one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    Interior,
}

impl Boundary {
    /// Number of grid neighbors a cell of this class has.
    #[inline]
    pub fn neighbors_len(self) -> usize {
        match self {
            Boundary::TopLeft
            | Boundary::TopRight
            | Boundary::BottomLeft
            | Boundary::BottomRight => 2,
            Boundary::Top | Boundary::Bottom | Boundary::Left | Boundary::Right => 3,
            Boundary::Interior => 4,
        }
    }
}

/// Dimensions of a rectangular maze, at least 2x2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
}

impl Grid {
    /// Create a grid with the given number of rows and columns.
    ///
    /// Returns [MazeError::InvalidDimensions] when either side is smaller than 2,
    /// or when the number of cells does not fit in a `usize`.
    pub fn new(height: usize, width: usize) -> Result<Self, MazeError> {
        if height < 2 || width < 2 || height.checked_mul(width).is_none() {
            return Err(MazeError::InvalidDimensions { height, width });
        }

        Ok(Grid { height, width })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells, `height * width`.
    #[inline]
    pub fn cells_len(&self) -> usize {
        self.height * self.width
    }

    #[inline]
    pub fn contains(&self, cell: usize) -> bool {
        cell < self.cells_len()
    }

    /// Return `(x, y)` of the given cell.
    #[inline]
    pub fn coords(&self, cell: usize) -> (usize, usize) {
        (cell % self.width, cell / self.width)
    }

    /// Return the cell at column `x` and row `y`, if it is inside the grid.
    #[inline]
    pub fn cell_at(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Classify where the cell sits relative to the grid border.
    pub fn boundary(&self, cell: usize) -> Boundary {
        let (x, y) = self.coords(cell);
        let (left, right) = (x == 0, x == self.width - 1);
        let (top, bottom) = (y == 0, y == self.height - 1);

        match (top, bottom, left, right) {
            (true, _, true, _) => Boundary::TopLeft,
            (true, _, _, true) => Boundary::TopRight,
            (_, true, true, _) => Boundary::BottomLeft,
            (_, true, _, true) => Boundary::BottomRight,
            (true, ..) => Boundary::Top,
            (_, true, ..) => Boundary::Bottom,
            (_, _, true, _) => Boundary::Left,
            (_, _, _, true) => Boundary::Right,
            _ => Boundary::Interior,
        }
    }

    /// Return the cell next to `cell` in the given direction.
    ///
    /// `None` is returned when that side of the cell is on the grid border.
    #[inline]
    pub fn step(&self, cell: usize, direction: Direction) -> Option<usize> {
        debug_assert!(self.contains(cell), "cell {cell} is outside the grid");

        let (x, y) = self.coords(cell);
        match direction {
            Direction::West if x > 0 => Some(cell - 1),
            Direction::East if x < self.width - 1 => Some(cell + 1),
            Direction::North if y > 0 => Some(cell - self.width),
            Direction::South if y < self.height - 1 => Some(cell + self.width),
            _ => None,
        }
    }

    /// Iterate over the 2 to 4 cells adjacent to `cell`.
    ///
    /// Neighbors come in a fixed order: left, right, up, down,
    /// skipping the sides that are on the grid border.
    #[inline]
    pub fn neighbors(&self, cell: usize) -> impl Iterator<Item = usize> + '_ {
        Direction::NEIGHBOR_ORDER
            .into_iter()
            .filter_map(move |direction| self.step(cell, direction))
    }

    /// Return the side of `a` that faces `b`, if the two cells are adjacent.
    pub fn direction_to(&self, a: usize, b: usize) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.step(a, direction) == Some(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_small_dimensions() {
        assert_eq!(
            Grid::new(1, 5),
            Err(MazeError::InvalidDimensions {
                height: 1,
                width: 5
            })
        );
        assert_eq!(
            Grid::new(4, 0),
            Err(MazeError::InvalidDimensions {
                height: 4,
                width: 0
            })
        );
        assert!(Grid::new(2, 2).is_ok());
    }

    #[test]
    fn test_rejects_cell_count_overflow() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(MazeError::InvalidDimensions {
                height: usize::MAX,
                width: 2
            })
        );
        assert!(Grid::new(usize::MAX / 2, 3).is_err());
        assert!(Grid::new(usize::MAX / 2, 2).is_ok());
    }

    #[test]
    fn test_neighbors_3x3() {
        let grid = Grid::new(3, 3).unwrap();

        let neighbors = |cell| grid.neighbors(cell).collect::<Vec<_>>();

        assert_eq!(neighbors(0), vec![1, 3]);
        assert_eq!(neighbors(2), vec![1, 5]);
        assert_eq!(neighbors(6), vec![7, 3]);
        assert_eq!(neighbors(8), vec![7, 5]);
        assert_eq!(neighbors(1), vec![0, 2, 4]);
        assert_eq!(neighbors(3), vec![4, 0, 6]);
        assert_eq!(neighbors(5), vec![4, 2, 8]);
        assert_eq!(neighbors(7), vec![6, 8, 4]);
        assert_eq!(neighbors(4), vec![3, 5, 1, 7]);
    }

    #[test]
    fn test_boundary_matches_neighbor_count() {
        for (height, width) in [(2, 2), (2, 5), (5, 2), (4, 7), (10, 10)] {
            let grid = Grid::new(height, width).unwrap();

            for cell in 0..grid.cells_len() {
                let boundary = grid.boundary(cell);
                assert_eq!(
                    grid.neighbors(cell).count(),
                    boundary.neighbors_len(),
                    "{height}x{width} cell {cell} ({boundary:?})"
                );
            }
        }
    }

    #[test]
    fn test_boundary_classes() {
        let grid = Grid::new(3, 4).unwrap();

        assert_eq!(grid.boundary(0), Boundary::TopLeft);
        assert_eq!(grid.boundary(3), Boundary::TopRight);
        assert_eq!(grid.boundary(8), Boundary::BottomLeft);
        assert_eq!(grid.boundary(11), Boundary::BottomRight);
        assert_eq!(grid.boundary(1), Boundary::Top);
        assert_eq!(grid.boundary(9), Boundary::Bottom);
        assert_eq!(grid.boundary(4), Boundary::Left);
        assert_eq!(grid.boundary(7), Boundary::Right);
        assert_eq!(grid.boundary(5), Boundary::Interior);
    }

    #[test]
    fn test_coords_roundtrip() {
        let grid = Grid::new(3, 5).unwrap();

        assert_eq!(grid.coords(7), (2, 1));
        assert_eq!(grid.cell_at(2, 1), Some(7));
        assert_eq!(grid.cell_at(5, 0), None);
        assert_eq!(grid.cell_at(0, 3), None);
    }

    #[test]
    fn test_direction_to() {
        let grid = Grid::new(3, 3).unwrap();

        assert_eq!(grid.direction_to(4, 1), Some(Direction::North));
        assert_eq!(grid.direction_to(4, 5), Some(Direction::East));
        assert_eq!(grid.direction_to(4, 7), Some(Direction::South));
        assert_eq!(grid.direction_to(4, 3), Some(Direction::West));
        assert_eq!(grid.direction_to(2, 3), None);
        assert_eq!(Direction::West.opposite(), Direction::East);
    }
}
