pub mod a_star;
pub mod bfs;
pub mod dijkstra;
mod shortest_path;

pub use a_star::{a_star, a_star_with_visitor};
pub use bfs::{bfs, bfs_with_visitor};
pub use dijkstra::{dijkstra, dijkstra_with_visitor};

pub(crate) use shortest_path::reconstruct_route;

use std::cmp::Ordering;

use crate::collections::FxIndexMap;
use crate::geometry::GeoPoint;

/// Predecessor tree built by a search, owned by a single call
/// The tuple holds (parent_index, cost from start); the start vertex uses
/// usize::MAX as its parent index to mark the root
/// C is hop count for BFS and accumulated f64 cost for the weighted searches
pub(crate) type SearchTree<C> = FxIndexMap<GeoPoint, (usize, C)>;

/// Root marker for the start vertex of a search tree
pub(crate) const NO_PARENT: usize = usize::MAX;


/// Frontier entry for the weighted searches
/// Ordered min-first on priority so it can sit in a max BinaryHeap; ties
/// fall back to insertion order in the search tree, which keeps the pop
/// order deterministic for identical input graphs
#[derive(Debug)]
pub(crate) struct FrontierNode {
    pub index: usize, // index in the search tree
    pub priority: f64, // g for Dijkstra, g + h for A*
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for FrontierNode {}
