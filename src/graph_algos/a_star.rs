use std::collections::BinaryHeap;

use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;
use rustc_hash::FxHashSet;

use crate::cost::CostOracle;
use crate::geometry::GeoPoint;
use crate::graph::RoadGraph;
use super::{FrontierNode, NO_PARENT, SearchTree, reconstruct_route};


/// Weighted shortest path using A* search
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The heuristic is the straight line distance from the goal, so the result
/// is optimal only when the oracle never prices an edge below the straight
/// line distance between its endpoints. That holds for [`EdgeLengthCost`]
/// over real road lengths; a travel time oracle generally breaks it, and
/// Dijkstra should be used instead.
///
/// [`EdgeLengthCost`]: crate::cost::EdgeLengthCost
pub fn a_star<O: CostOracle>(
    graph: &RoadGraph,
    start: GeoPoint,
    goal: GeoPoint,
    oracle: &O,
) -> Option<Vec<GeoPoint>> {
    a_star_with_visitor(graph, start, goal, oracle, |_| {})
}

/// A* search with a visit hook
/// `on_visit` fires once per vertex, the moment it is first discovered; it
/// exists for observability and has no effect on the result
pub fn a_star_with_visitor<O: CostOracle>(
    graph: &RoadGraph,
    start: GeoPoint,
    goal: GeoPoint,
    oracle: &O,
    mut on_visit: impl FnMut(&GeoPoint),
) -> Option<Vec<GeoPoint>> {

    // The tree records plain accumulated cost g; the heuristic only ever
    // lives in the frontier priority, so it is never double counted across
    // iterations and the shared graph is never touched
    let mut tree: SearchTree<f64> = SearchTree::default();
    let start_index = tree.insert_full(start, (NO_PARENT, 0.0)).0;

    // Finalized vertices - by tree index
    let mut finalized: FxHashSet<usize> = FxHashSet::default();

    // Min-priority frontier over g + h, with lazy deletion as in Dijkstra
    let mut frontier: BinaryHeap<FrontierNode> = BinaryHeap::new();
    frontier.push(FrontierNode {
        index: start_index,
        priority: goal.distance(&start),
    });

    while let Some(FrontierNode { index, .. }) = frontier.pop() {
        // Stale entry - this vertex was finalized through a cheaper path
        if !finalized.insert(index) {
            continue;
        }

        let (&vertex, &(_, cost)) = tree.get_index(index).unwrap();

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
                priority: candidate + goal.distance(&edge.target),
            });
        }
    }

    debug!("a_star exhausted frontier without reaching {goal:?}");
    None
}
