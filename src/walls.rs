//! which sides of a cell are closed off.
//!
//! A side has a wall unless a spanning tree edge crosses it, or it is the
//! opening to the outside at the maze's entrance or destination.

use crate::{
    grid::{Boundary, Direction, Grid},
    prim::SpanningTree,
};
use paste::paste;
use std::fmt;

/// Set of [Direction]s, one bit per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walls(u8);

#[inline]
const fn bit(direction: Direction) -> u8 {
    1 << direction as u8
}

impl Walls {
    /// No walls at all.
    pub const NONE: Self = Walls(0);

    /// A wall on every side.
    pub const ALL: Self = Walls(0b1111);

    /// Compute the walls of `cell` in a maze carved along `tree`.
    ///
    /// Starts from a wall on every side and removes each side crossed by a tree edge.
    /// The entrance then opens west if it is in the leftmost column, north otherwise.
    /// The destination opens east if it is in the rightmost column, south otherwise.
    pub fn of_cell(tree: &SpanningTree, cell: usize, entrance: usize, destination: usize) -> Self {
        let grid = tree.grid();
        let mut walls = Walls::ALL;

        for direction in Direction::ALL {
            if let Some(neighbor) = grid.step(cell, direction) {
                if tree.has_edge(cell, neighbor) {
                    walls.remove(direction);
                }
            }
        }

        if cell == entrance {
            walls.remove(entrance_opening(grid, cell));
        }
        if cell == destination {
            walls.remove(destination_opening(grid, cell));
        }

        walls
    }

    #[inline]
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & bit(direction) != 0
    }

    /// Add a wall. Returns `true` if it was not already there.
    #[inline]
    pub fn insert(&mut self, direction: Direction) -> bool {
        let absent = !self.contains(direction);
        self.0 |= bit(direction);
        absent
    }

    /// Remove a wall. Returns `true` if it was there.
    #[inline]
    pub fn remove(&mut self, direction: Direction) -> bool {
        let present = self.contains(direction);
        self.0 &= !bit(direction);
        present
    }

    /// Number of walls.
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the walls clockwise from north.
    #[inline]
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.contains(direction))
    }
}

macro_rules! impl_side_queries {
    ($($side:ident),+) => {
        paste! {
            impl Walls {
                $(
                    #[doc = concat!(
                        "Check if there is a wall on the [", stringify!($side),
                        "](Direction::", stringify!($side), ") side."
                    )]
                    #[inline]
                    pub fn [<has_ $side:lower>](self) -> bool {
                        self.contains(Direction::$side)
                    }
                )+
            }
        }
    };
}
impl_side_queries!(North, East, South, West);

impl FromIterator<Direction> for Walls {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut walls = Walls::NONE;
        for direction in iter {
            walls.insert(direction);
        }
        walls
    }
}

/// Lowercase side letters clockwise from north, like `"nsw"`.
impl fmt::Display for Walls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in self.iter() {
            write!(f, "{}", direction.as_char())?;
        }
        Ok(())
    }
}

/// Side of the entrance cell that opens to the outside:
/// west in the leftmost column, north otherwise.
#[inline]
pub fn entrance_opening(grid: &Grid, cell: usize) -> Direction {
    match grid.boundary(cell) {
        Boundary::TopLeft | Boundary::Left | Boundary::BottomLeft => Direction::West,
        _ => Direction::North,
    }
}

/// Side of the destination cell that opens to the outside:
/// east in the rightmost column, south otherwise.
#[inline]
pub fn destination_opening(grid: &Grid, cell: usize) -> Direction {
    match grid.boundary(cell) {
        Boundary::TopRight | Boundary::Right | Boundary::BottomRight => Direction::East,
        _ => Direction::South,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;

    /// ```sh
    /// 0 -- 1 -- 2
    /// |    |
    /// 3    4 -- 5
    /// |         |
    /// 6    7 -- 8
    /// ```
    fn fixed_tree() -> SpanningTree {
        let grid = Grid::new(3, 3).unwrap();
        let graph = WeightedGraph::from_weights(grid, |a, b| match (a, b) {
            (0, 1) => 5,
            (0, 3) => 1,
            (1, 2) => 7,
            (1, 4) => 2,
            (2, 5) => 9,
            (3, 4) => 8,
            (3, 6) => 3,
            (4, 5) => 4,
            (4, 7) => 11,
            (5, 8) => 6,
            (6, 7) => 12,
            (7, 8) => 10,
            _ => unreachable!(),
        });
        SpanningTree::prim(&graph, 0)
    }

    #[test]
    fn test_walls_from_tree() {
        let tree = fixed_tree();
        // entrance and destination elsewhere, so no forced openings
        let walls = |cell| Walls::of_cell(&tree, cell, usize::MAX, usize::MAX).to_string();

        assert_eq!(walls(0), "nw");
        assert_eq!(walls(1), "n");
        assert_eq!(walls(2), "nes");
        assert_eq!(walls(3), "ew");
        assert_eq!(walls(4), "sw");
        assert_eq!(walls(5), "ne");
        assert_eq!(walls(6), "esw");
        assert_eq!(walls(7), "nsw");
        assert_eq!(walls(8), "es");
    }

    #[test]
    fn test_entrance_and_destination_openings() {
        let tree = fixed_tree();

        // entrance in the left column opens west
        let walls = Walls::of_cell(&tree, 3, 3, 8);
        assert_eq!(walls.to_string(), "e");

        // entrance on the top row opens north
        let walls = Walls::of_cell(&tree, 2, 2, 8);
        assert_eq!(walls.to_string(), "es");

        // destination in the right column opens east
        let walls = Walls::of_cell(&tree, 8, 0, 8);
        assert_eq!(walls.to_string(), "s");

        // destination on the bottom row opens south
        let walls = Walls::of_cell(&tree, 7, 0, 7);
        assert_eq!(walls.to_string(), "nw");

        // top-left entrance opens west, not north
        let walls = Walls::of_cell(&tree, 0, 0, 8);
        assert_eq!(walls.to_string(), "n");

        // bottom-left entrance is still in the left column
        let walls = Walls::of_cell(&tree, 6, 6, 8);
        assert_eq!(walls.to_string(), "es");

        // top-right destination is still in the right column
        let walls = Walls::of_cell(&tree, 2, 0, 2);
        assert_eq!(walls.to_string(), "ns");
    }

    #[test]
    fn test_opening_sides_by_boundary() {
        let grid = Grid::new(3, 4).unwrap();

        let entrances = [0, 1, 2, 3, 4, 8].map(|cell| entrance_opening(&grid, cell).as_char());
        assert_eq!(entrances, ['w', 'n', 'n', 'n', 'w', 'w']);

        let destinations = [3, 7, 11, 8, 9, 10]
            .map(|cell| destination_opening(&grid, cell).as_char());
        assert_eq!(destinations, ['e', 'e', 'e', 's', 's', 's']);
    }

    #[test]
    fn test_side_queries() {
        let walls: Walls = [Direction::North, Direction::West].into_iter().collect();

        assert!(walls.has_north());
        assert!(!walls.has_east());
        assert!(!walls.has_south());
        assert!(walls.has_west());
        assert_eq!(walls.len(), 2);
        assert_eq!(walls.iter().collect::<Vec<_>>(), vec![Direction::North, Direction::West]);
    }

    #[test]
    fn test_insert_remove() {
        let mut walls = Walls::NONE;

        assert!(walls.is_empty());
        assert!(walls.insert(Direction::East));
        assert!(!walls.insert(Direction::East));
        assert!(walls.remove(Direction::East));
        assert!(!walls.remove(Direction::East));
        assert_eq!(Walls::ALL.len(), 4);
        assert_eq!(Walls::ALL.to_string(), "nesw");
    }
}
