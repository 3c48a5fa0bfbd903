//! fully connected grid graph with a random weight on every undirected edge.
//!
//! Every cell keeps its own list of outgoing [Edge]s. The same undirected edge
//! is stored once in each endpoint's list, and both copies carry the same weight:
//! the weight belongs to the pair of cells, not to the direction it was found from.

use crate::grid::Grid;
use log::debug;
use rand::Rng;
use std::ops::RangeInclusive;

/// Directed half of an undirected, weighted edge between two adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub weight: u32,
    pub from: usize,
    pub to: usize,
}

impl Edge {
    #[inline]
    pub fn new(weight: u32, from: usize, to: usize) -> Self {
        Edge { weight, from, to }
    }

    /// Same edge seen from the other endpoint.
    #[inline]
    pub fn reversed(self) -> Self {
        Edge {
            weight: self.weight,
            from: self.to,
            to: self.from,
        }
    }
}

/// Read-only access to per-cell edge lists.
///
/// Implemented by both the full [WeightedGraph] and the pruned
/// [SpanningTree](crate::SpanningTree), so the solver can search either.
pub trait Adjacency {
    /// Number of cells in the graph.
    fn cells_len(&self) -> usize;

    /// Outgoing edges of the given cell.
    fn edges(&self, cell: usize) -> &[Edge];
}

/// Grid graph where every pair of adjacent cells is connected.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    grid: Grid,
    adjacency: Vec<Vec<Edge>>,
}

impl WeightedGraph {
    /// Connect every pair of adjacent cells, drawing each undirected edge's
    /// weight uniformly from `weights` using the given random source.
    pub fn build<R: Rng + ?Sized>(grid: Grid, weights: RangeInclusive<u32>, rng: &mut R) -> Self {
        Self::from_weights(grid, |_, _| rng.gen_range(weights.clone()))
    }

    /// Connect every pair of adjacent cells, asking `weight(a, b)` for the
    /// weight of each undirected edge.
    ///
    /// `weight` is called exactly once per undirected edge, with `a < b`,
    /// in increasing order of `a` and then in neighbor order (left, right, up, down).
    pub fn from_weights(grid: Grid, mut weight: impl FnMut(usize, usize) -> u32) -> Self {
        let cells = grid.cells_len();
        let mut adjacency: Vec<Vec<Edge>> = Vec::with_capacity(cells);

        for cell in 0..cells {
            let mut edges = Vec::with_capacity(4);

            for neighbor in grid.neighbors(cell) {
                let weight = if neighbor < cell {
                    // already drawn when the lower cell was connected
                    match adjacency[neighbor].iter().find(|edge| edge.to == cell) {
                        Some(edge) => edge.weight,
                        None => panic!("cell {neighbor} has no edge back to neighbor {cell}"),
                    }
                } else {
                    weight(cell, neighbor)
                };

                edges.push(Edge::new(weight, cell, neighbor));
            }

            adjacency.push(edges);
        }

        let graph = WeightedGraph { grid, adjacency };
        debug_assert!(graph.is_symmetric(), "weighted graph is not symmetric");
        debug!(
            "connected {}x{} grid with {} weighted edges",
            grid.height(),
            grid.width(),
            graph.edges_len()
        );

        graph
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the number of cells in the graph.
    #[inline]
    pub fn cells_len(&self) -> usize {
        self.adjacency.len()
    }

    /// Return the outgoing edges of the given cell.
    #[inline]
    pub fn edges(&self, cell: usize) -> &[Edge] {
        &self.adjacency[cell]
    }

    /// Return the number of undirected edges, each counted once.
    #[inline]
    pub fn edges_len(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Iterate over every undirected edge once, as `from < to`.
    pub fn undirected_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        undirected(&self.adjacency)
    }

    /// Every stored edge has a mirror image with the same weight.
    pub fn is_symmetric(&self) -> bool {
        is_symmetric(&self.adjacency)
    }
}

impl Adjacency for WeightedGraph {
    #[inline]
    fn cells_len(&self) -> usize {
        self.cells_len()
    }

    #[inline]
    fn edges(&self, cell: usize) -> &[Edge] {
        self.edges(cell)
    }
}

pub(crate) fn undirected(adjacency: &[Vec<Edge>]) -> impl Iterator<Item = Edge> + '_ {
    adjacency
        .iter()
        .flatten()
        .filter(|edge| edge.from < edge.to)
        .copied()
}

pub(crate) fn is_symmetric(adjacency: &[Vec<Edge>]) -> bool {
    adjacency.iter().flatten().all(|edge| {
        adjacency
            .get(edge.to)
            .map_or(false, |back| back.contains(&edge.reversed()))
    })
}
