use crate::geometry::GeoPoint;
use super::{NO_PARENT, SearchTree};

/// Construct the route from the start vertex to the goal vertex
/// Walks parent indices backward from the goal until the root marker, then
/// reverses. A parent index that points outside the tree means the tree is
/// malformed; that is reported as no route, never as a panic
pub(crate) fn reconstruct_route<C>(tree: &SearchTree<C>, goal_index: usize) -> Option<Vec<GeoPoint>> {

    let mut route = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        let (vertex, &(parent_index, _)) = tree.get_index(current_index)?;
        route.push(*vertex);
        current_index = parent_index;
    }

    // The route was collected goal-first
    route.reverse();

    if route.is_empty() {
        return None;
    }

    Some(route)
}
