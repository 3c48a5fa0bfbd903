//! perfect maze: a random spanning tree of a grid, with an entrance and a destination.
//!
//! # Examples
//!
//! ```
//! use prim_maze::{Direction, Maze};
//!
//! // Same seed, same maze
//! let maze = Maze::builder(8, 12).seed(7).build().unwrap();
//! assert_eq!(maze.edges().count(), 8 * 12 - 1);
//!
//! // Solve it
//! let path = maze.solve().unwrap();
//! assert_eq!(path.first(), Some(maze.entrance()));
//! assert_eq!(path.last(), Some(maze.destination()));
//!
//! // The entrance always has an opening to the outside
//! let walls = maze.walls(maze.entrance()).unwrap();
//! let (x, _) = maze.coords(maze.entrance());
//! let opening = if x == 0 { Direction::West } else { Direction::North };
//! assert!(!walls.contains(opening));
//! ```

use crate::{
    graph::{Edge, WeightedGraph},
    grid::Grid,
    prim::SpanningTree,
    solver::{self, Path, Progress},
    walls::Walls,
    MazeError,
};
use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    ops::RangeInclusive,
    time::{Duration, Instant},
};

/// Range each edge weight is drawn from, unless configured otherwise.
pub const DEFAULT_WEIGHTS: RangeInclusive<u32> = 1..=1000;

/// A randomly generated perfect maze.
///
/// Exactly one simple path connects any two cells.
/// Once built, a maze is read-only; every query can be repeated with the same result.
#[derive(Debug, Clone)]
pub struct Maze {
    tree: SpanningTree,
    entrance: usize,
    destination: usize,
    generation_time: Duration,
}

impl Maze {
    /// Create a new [MazeBuilder] for a maze with the given number of rows and columns.
    #[inline]
    pub fn builder(height: usize, width: usize) -> MazeBuilder {
        MazeBuilder::new(height, width)
    }

    /// Generate a maze seeded from system entropy.
    ///
    /// Fails with [MazeError::InvalidDimensions] if either side is smaller than 2.
    #[inline]
    pub fn new(height: usize, width: usize) -> Result<Self, MazeError> {
        MazeBuilder::new(height, width).build()
    }

    /// Generate a maze with the provided seed.
    ///
    /// Uses [StdRng] seeded with [SeedableRng::seed_from_u64].
    #[inline]
    pub fn from_seed(height: usize, width: usize, seed: u64) -> Result<Self, MazeError> {
        MazeBuilder::new(height, width).seed(seed).build()
    }

    /// Generate a maze drawing from the provided random source.
    #[inline]
    pub fn with_rng<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        MazeBuilder::new(height, width).build_with_rng(rng)
    }

    fn generate<R: Rng + ?Sized>(grid: Grid, weights: RangeInclusive<u32>, rng: &mut R) -> Self {
        let now = Instant::now();

        let graph = WeightedGraph::build(grid, weights, rng);
        let (entrance, destination) = pick_openings(&grid, rng);
        let tree = SpanningTree::prim(&graph, 0);

        let generation_time = now.elapsed();
        debug!(
            "generated {}x{} maze in {generation_time:?}; entrance {entrance}, exit {destination}",
            grid.height(),
            grid.width(),
        );

        Maze {
            tree,
            entrance,
            destination,
            generation_time,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        self.tree.grid()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid().height()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid().width()
    }

    /// Return the number of cells in the maze.
    #[inline]
    pub fn cells_len(&self) -> usize {
        self.grid().cells_len()
    }

    /// Cell on the top row or left column with an opening to the outside.
    #[inline]
    pub fn entrance(&self) -> usize {
        self.entrance
    }

    /// Cell on the bottom row or right column with an opening to the outside.
    #[inline]
    pub fn destination(&self) -> usize {
        self.destination
    }

    /// Wall-clock time spent generating this maze.
    #[inline]
    pub fn generation_time(&self) -> Duration {
        self.generation_time
    }

    /// The spanning tree the maze was carved along.
    #[inline]
    pub fn tree(&self) -> &SpanningTree {
        &self.tree
    }

    /// Return `(x, y)` of the given cell: `x = cell % width`, `y = cell / width`.
    #[inline]
    pub fn coords(&self, cell: usize) -> (usize, usize) {
        self.grid().coords(cell)
    }

    /// Return the cell at column `x` and row `y`, if it is inside the maze.
    #[inline]
    pub fn cell_at(&self, x: usize, y: usize) -> Option<usize> {
        self.grid().cell_at(x, y)
    }

    /// Return the passages leaving the given cell.
    pub fn passages(&self, cell: usize) -> Result<&[Edge], MazeError> {
        self.check(cell)?;
        Ok(self.tree.edges(cell))
    }

    /// Iterate over every passage once, as `from < to`.
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.tree.undirected_edges()
    }

    /// Check if there is a passage directly between `a` and `b`.
    #[inline]
    pub fn has_passage(&self, a: usize, b: usize) -> bool {
        self.tree.has_edge(a, b)
    }

    /// Return the sides of the given cell that have a wall.
    pub fn walls(&self, cell: usize) -> Result<Walls, MazeError> {
        self.check(cell)?;
        Ok(Walls::of_cell(&self.tree, cell, self.entrance, self.destination))
    }

    /// Return the walls of every cell, indexed by cell.
    #[cfg(feature = "parallel")]
    pub fn all_walls(&self) -> Vec<Walls> {
        use rayon::prelude::*;

        (0..self.cells_len())
            .into_par_iter()
            .map(|cell| Walls::of_cell(&self.tree, cell, self.entrance, self.destination))
            .collect()
    }

    /// Return the walls of every cell, indexed by cell.
    #[cfg(not(feature = "parallel"))]
    pub fn all_walls(&self) -> Vec<Walls> {
        (0..self.cells_len())
            .map(|cell| Walls::of_cell(&self.tree, cell, self.entrance, self.destination))
            .collect()
    }

    /// Find the path from the entrance to the destination.
    #[inline]
    pub fn solve(&self) -> Result<Path, MazeError> {
        self.solve_with_progress(|_| {})
    }

    /// Find the path from the entrance to the destination,
    /// calling `on_progress` for every distinct cell the search dequeues.
    #[inline]
    pub fn solve_with_progress(
        &self,
        on_progress: impl FnMut(Progress),
    ) -> Result<Path, MazeError> {
        self.search(self.entrance, self.destination, on_progress)
    }

    /// Find the path between any two cells of the maze.
    #[inline]
    pub fn path_between(&self, from: usize, to: usize) -> Result<Path, MazeError> {
        self.check(from)?;
        self.check(to)?;
        self.search(from, to, |_| {})
    }

    fn search(
        &self,
        from: usize,
        to: usize,
        on_progress: impl FnMut(Progress),
    ) -> Result<Path, MazeError> {
        solver::shortest_path(&self.tree, from, to, on_progress)
            .ok_or(MazeError::PathNotFound { from, to })
    }

    #[inline]
    fn check(&self, cell: usize) -> Result<(), MazeError> {
        if self.grid().contains(cell) {
            Ok(())
        } else {
            Err(MazeError::CellOutOfBounds {
                cell,
                cells: self.cells_len(),
            })
        }
    }
}

/// Choose the entrance on the top row or left column,
/// and a different destination on the bottom row or right column.
///
/// All four candidates are drawn before either choice is made.
fn pick_openings<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> (usize, usize) {
    let (height, width) = (grid.height(), grid.width());

    let start_top = rng.gen_range(0..width);
    let start_left = rng.gen_range(0..height) * width;
    let (end_bottom, end_right) = destination_candidates(grid, rng);

    let entrance = if rng.gen() { start_top } else { start_left };
    let mut destination = if rng.gen() { end_bottom } else { end_right };

    // both can land on the top-right or bottom-left corner
    while destination == entrance {
        trace!("destination {destination} is the entrance; drawing again");
        let (end_bottom, end_right) = destination_candidates(grid, rng);
        destination = if rng.gen() { end_bottom } else { end_right };
    }

    (entrance, destination)
}

fn destination_candidates<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> (usize, usize) {
    let (height, width) = (grid.height(), grid.width());

    let end_bottom = (height - 1) * width + rng.gen_range(0..width);
    let end_right = rng.gen_range(0..height) * width + (width - 1);

    (end_bottom, end_right)
}

/// A builder for configuring and generating a [Maze].
#[derive(Debug, Clone)]
pub struct MazeBuilder {
    height: usize,
    width: usize,
    seed: Option<u64>,
    weights: RangeInclusive<u32>,
}

impl MazeBuilder {
    #[inline]
    pub fn new(height: usize, width: usize) -> Self {
        MazeBuilder {
            height,
            width,
            seed: None,
            weights: DEFAULT_WEIGHTS,
        }
    }

    /// Seed the random source, so the same seed always produces the same maze.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Range each edge weight is drawn from. Default is `1..=1000`.
    ///
    /// A narrow range makes ties between frontier edges common;
    /// ties are broken by the order edges were found.
    #[inline]
    pub fn weight_range(mut self, weights: RangeInclusive<u32>) -> Self {
        self.weights = weights;
        self
    }

    /// Generate the maze.
    ///
    /// Uses a [StdRng] from the configured seed, or from system entropy if there is none.
    pub fn build(self) -> Result<Maze, MazeError> {
        let grid = self.validate()?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Maze::generate(grid, self.weights, &mut rng))
    }

    /// Generate the maze drawing from the provided random source.
    ///
    /// The configured seed, if any, is ignored.
    pub fn build_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Maze, MazeError> {
        let grid = self.validate()?;
        Ok(Maze::generate(grid, self.weights, rng))
    }

    fn validate(&self) -> Result<Grid, MazeError> {
        let grid = Grid::new(self.height, self.width)?;

        let (low, high) = (*self.weights.start(), *self.weights.end());
        if low == 0 || low > high {
            return Err(MazeError::InvalidWeightRange { low, high });
        }

        Ok(grid)
    }
}
