//! Prim's minimum spanning tree over a [WeightedGraph].
//!
//! The random edge weights are what make the maze random; "minimum" only
//! means the tree grows along the lightest edge leaving the visited region.
//!
//! The frontier is a binary heap of candidate edges. Entries whose target
//! has been visited since they were pushed are left in the heap and skipped
//! when popped, instead of being searched for and removed.

use crate::{
    cellset::CellSet,
    edge_id,
    graph::{self, Adjacency, Edge, WeightedGraph},
    grid::Grid,
};
use log::{debug, trace};
use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashSet},
};

/// Candidate edge from a visited cell to a cell that was unvisited when it was pushed.
///
/// Ordered so that [BinaryHeap] pops the lightest entry first,
/// and among equal weights, the one pushed earliest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    weight: u32,
    from: usize,
    to: usize,
    seq: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    pushed: usize,
}

impl Frontier {
    /// Push every edge of `cell` that leads out of the visited set.
    fn extend_from(&mut self, graph: &WeightedGraph, cell: usize, visited: &CellSet) {
        for edge in graph.edges(cell) {
            if visited.contains(edge.to) {
                continue;
            }

            self.heap.push(FrontierEntry {
                weight: edge.weight,
                from: cell,
                to: edge.to,
                seq: self.pushed,
            });
            self.pushed += 1;
        }
    }

    #[inline]
    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }
}

/// Spanning tree of the grid: the passages of a perfect maze.
///
/// Keeps only the tree edges of the original graph, in both directions,
/// with their original weights.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    grid: Grid,
    adjacency: Vec<Vec<Edge>>,
    accepted: Vec<Edge>,
}

impl SpanningTree {
    /// Grow a spanning tree from `start` with Prim's algorithm.
    ///
    /// Panics if `start` is outside the graph, or if the graph is not connected.
    pub fn prim(graph: &WeightedGraph, start: usize) -> Self {
        let cells = graph.cells_len();
        assert!(start < cells, "start cell {start} is outside the graph");

        let mut visited = CellSet::new(cells);
        visited.insert(start);

        let mut frontier = Frontier::default();
        frontier.extend_from(graph, start, &visited);

        let mut accepted = Vec::with_capacity(cells - 1);

        while !visited.is_full() {
            let Some(entry) = frontier.pop() else {
                break;
            };
            debug_assert!(
                entry.from < cells && entry.to < cells,
                "frontier entry {entry:?} is outside the graph"
            );

            if !visited.insert(entry.to) {
                trace!("skipping stale frontier edge {} -> {}", entry.from, entry.to);
                continue;
            }

            trace!(
                "tree edge {} -> {} (weight {})",
                entry.from,
                entry.to,
                entry.weight
            );
            accepted.push(Edge::new(entry.weight, entry.from, entry.to));
            frontier.extend_from(graph, entry.to, &visited);
        }

        assert_eq!(
            accepted.len(),
            cells - 1,
            "graph is not connected; spanning tree reached {} of {cells} cells",
            visited.len()
        );

        let tree = Self::prune(graph, accepted);
        debug!(
            "spanning tree with {} edges, {} frontier pushes",
            tree.accepted.len(),
            frontier.pushed
        );

        tree
    }

    /// Keep only the edges of `graph` that were accepted into the tree, in either direction.
    fn prune(graph: &WeightedGraph, accepted: Vec<Edge>) -> Self {
        let tree_edges: HashSet<(usize, usize)> = accepted
            .iter()
            .map(|edge| edge_id(edge.from, edge.to))
            .collect();

        let adjacency: Vec<Vec<Edge>> = (0..graph.cells_len())
            .map(|cell| {
                graph
                    .edges(cell)
                    .iter()
                    .filter(|edge| tree_edges.contains(&edge_id(edge.from, edge.to)))
                    .copied()
                    .collect()
            })
            .collect();

        debug_assert!(
            graph::is_symmetric(&adjacency),
            "pruned graph is not symmetric"
        );

        SpanningTree {
            grid: *graph.grid(),
            adjacency,
            accepted,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the number of cells in the tree.
    #[inline]
    pub fn cells_len(&self) -> usize {
        self.adjacency.len()
    }

    /// Return the tree edges leaving the given cell.
    #[inline]
    pub fn edges(&self, cell: usize) -> &[Edge] {
        &self.adjacency[cell]
    }

    /// Return the number of undirected tree edges, `cells_len() - 1`.
    #[inline]
    pub fn edges_len(&self) -> usize {
        self.accepted.len()
    }

    /// Tree edges in the order Prim's algorithm accepted them,
    /// each pointing from the visited side to the newly visited cell.
    #[inline]
    pub fn accepted(&self) -> &[Edge] {
        &self.accepted
    }

    /// Iterate over every tree edge once, as `from < to`.
    pub fn undirected_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        graph::undirected(&self.adjacency)
    }

    /// Check if `a` and `b` are directly connected by a tree edge.
    #[inline]
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adjacency
            .get(a)
            .map_or(false, |edges| edges.iter().any(|edge| edge.to == b))
    }
}

impl Adjacency for SpanningTree {
    #[inline]
    fn cells_len(&self) -> usize {
        self.cells_len()
    }

    #[inline]
    fn edges(&self, cell: usize) -> &[Edge] {
        self.edges(cell)
    }
}
