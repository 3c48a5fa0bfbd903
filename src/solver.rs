//! breadth-first search between two cells.
//!
//! Cells are dequeued in non-decreasing distance from the start, so the
//! first time the target is dequeued, the path that reached it is a shortest one.
//! Each cell remembers the cell it was first reached from, and the path
//! is rebuilt by walking those links back from the target.

use crate::{cellset::CellSet, graph::Adjacency};
use log::{debug, trace};
use std::collections::VecDeque;

/// Ordered list of cells, each connected to the next by an edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<usize>);

impl Path {
    /// Return the cells of the path, from start to end.
    #[inline]
    pub fn cells(&self) -> &[usize] {
        &self.0
    }

    /// Return the number of cells in the path, including both ends.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the number of edges walked, `len() - 1`.
    #[inline]
    pub fn steps_len(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.0.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Iterate over consecutive `(from, to)` pairs, e.g. for drawing the path's segments.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.windows(2).map(|pair| (pair[0], pair[1]))
    }

    #[inline]
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// How much of the maze the solver has dequeued so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Distinct cells dequeued.
    pub explored: usize,
    /// Cells in the maze.
    pub total: usize,
}

impl Progress {
    #[inline]
    pub fn percent(&self) -> f64 {
        self.explored as f64 / self.total as f64 * 100.0
    }
}

/// Find a shortest path from `from` to `to`.
///
/// `on_progress` is called once for every distinct cell dequeued.
///
/// Returns `None` when `to` can't be reached from `from`.
/// Panics if either cell is outside the graph.
pub fn shortest_path<G, F>(graph: &G, from: usize, to: usize, mut on_progress: F) -> Option<Path>
where
    G: Adjacency + ?Sized,
    F: FnMut(Progress),
{
    let cells = graph.cells_len();
    assert!(
        from < cells && to < cells,
        "path {from} -> {to} is outside the graph of {cells} cells"
    );

    let mut parents: Vec<Option<usize>> = vec![None; cells];
    let mut seen = CellSet::new(cells);
    let mut queue = VecDeque::new();

    seen.insert(from);
    queue.push_back(from);

    let report_every = (cells / 10).max(1);
    let mut explored = 0;

    while let Some(cell) = queue.pop_front() {
        explored += 1;
        on_progress(Progress {
            explored,
            total: cells,
        });
        if explored % report_every == 0 {
            trace!("{:.0}% explored", explored as f64 / cells as f64 * 100.0);
        }

        if cell == to {
            let path = walk_back(&parents, to);
            debug!(
                "found path {from} -> {to} of {} cells after exploring {explored} of {cells}",
                path.len()
            );
            return Some(path);
        }

        for edge in graph.edges(cell) {
            if seen.insert(edge.to) {
                parents[edge.to] = Some(cell);
                queue.push_back(edge.to);
            }
        }
    }

    debug!("no path {from} -> {to}; explored {explored} of {cells} cells");
    None
}

fn walk_back(parents: &[Option<usize>], to: usize) -> Path {
    let mut cells = vec![to];
    let mut curr = to;

    while let Some(parent) = parents[curr] {
        cells.push(parent);
        curr = parent;
    }

    cells.reverse();
    Path(cells)
}
