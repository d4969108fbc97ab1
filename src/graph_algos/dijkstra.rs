use std::collections::BinaryHeap;

use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;
use rustc_hash::FxHashSet;

use crate::cost::CostOracle;
use crate::geometry::GeoPoint;
use crate::graph::RoadGraph;
use super::{FrontierNode, NO_PARENT, SearchTree, reconstruct_route};


/// Weighted shortest path using Dijkstra's algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// The cost of each traversed edge comes from the oracle; oracle costs must
/// be non-negative. Returns the route from start to goal inclusive, or None
/// when the goal is unreachable
pub fn dijkstra<O: CostOracle>(
    graph: &RoadGraph,
    start: GeoPoint,
    goal: GeoPoint,
    oracle: &O,
) -> Option<Vec<GeoPoint>> {
    dijkstra_with_visitor(graph, start, goal, oracle, |_| {})
}

/// Dijkstra's algorithm with a visit hook
/// `on_visit` fires once per vertex, the moment it is first discovered; it
/// exists for observability and has no effect on the result
pub fn dijkstra_with_visitor<O: CostOracle>(
    graph: &RoadGraph,
    start: GeoPoint,
    goal: GeoPoint,
    oracle: &O,
    mut on_visit: impl FnMut(&GeoPoint),
) -> Option<Vec<GeoPoint>> {

    // The tree records the best known cost from the start per vertex
    let mut tree: SearchTree<f64> = SearchTree::default();
    let start_index = tree.insert_full(start, (NO_PARENT, 0.0)).0;

    // Finalized vertices - by tree index
    let mut finalized: FxHashSet<usize> = FxHashSet::default();

    // Min-priority frontier over accumulated cost. Improved paths push a
    // fresh entry instead of decreasing a priority; stale entries are
    // skipped on pop (lazy deletion)
    let mut frontier: BinaryHeap<FrontierNode> = BinaryHeap::new();
    frontier.push(FrontierNode {
        index: start_index,
        priority: 0.0,
    });

    while let Some(FrontierNode { index, .. }) = frontier.pop() {
        // Stale entry - this vertex was finalized through a cheaper path
        if !finalized.insert(index) {
            continue;
        }

        let (&vertex, &(_, cost)) = tree.get_index(index).unwrap();

        // First finalization of a vertex carries its optimal cost, so the
        // goal can be reconstructed the moment it is popped
        if vertex == goal {
            return reconstruct_route(&tree, index);
        }

        for edge in graph.neighbors(&vertex) {
            let candidate = cost + oracle.edge_cost(&vertex, edge);

            let neighbor_index = match tree.entry(edge.target) {
                Vacant(e) => {
                    let neighbor_index = e.index();
                    e.insert((index, candidate));
                    on_visit(&edge.target);
                    neighbor_index
                }
                Occupied(mut e) => {
                    let neighbor_index = e.index();
                    if finalized.contains(&neighbor_index) || e.get().1 <= candidate {
                        continue;
                    }
                    e.insert((index, candidate));
                    neighbor_index
                }
            };

            frontier.push(FrontierNode {
                index: neighbor_index,
                priority: candidate,
            });
        }
    }

    debug!("dijkstra exhausted frontier without reaching {goal:?}");
    None
}
