//! Random perfect maze generation and solving.
//!
//! A maze is built in three steps:
//! 1. every pair of adjacent cells in a rectangular [grid] is connected by an
//!    edge with a random weight ([graph]),
//! 2. Prim's algorithm keeps a spanning tree of those edges; the tree edges are
//!    the passages, everything else is a wall ([prim]),
//! 3. an entrance is picked on the top row or left column, and a destination
//!    on the bottom row or right column.
//!
//! The built [Maze] answers which sides of a cell have [walls],
//! and finds the path between two cells with a breadth-first search ([solver]).
//!
//! See the [maze] module for examples.

pub mod cellset;

pub mod error;
pub use error::MazeError;

pub mod grid;
pub use grid::{Boundary, Direction, Grid};

pub mod graph;
pub use graph::{Adjacency, Edge, WeightedGraph};

pub mod prim;
pub use prim::SpanningTree;

pub mod walls;
pub use walls::Walls;

pub mod solver;
pub use solver::{shortest_path, Path, Progress};

pub mod maze;
pub use maze::{Maze, MazeBuilder, DEFAULT_WEIGHTS};

/// Given two cell indices, return a tuple of the two indices in ascending order.
#[inline]
pub fn edge_id<T: Ord>(cell_a: T, cell_b: T) -> (T, T) {
    if cell_a > cell_b {
        (cell_b, cell_a)
    } else {
        (cell_a, cell_b)
    }
}
