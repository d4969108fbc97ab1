use std::collections::VecDeque;

use log::debug;

use crate::geometry::GeoPoint;
use crate::graph::RoadGraph;
use super::{NO_PARENT, SearchTree, reconstruct_route};


/// Shortest path by hop count using breadth first search
/// Returns the route from start to goal inclusive, or None when the goal is
/// unreachable
pub fn bfs(graph: &RoadGraph, start: GeoPoint, goal: GeoPoint) -> Option<Vec<GeoPoint>> {
    bfs_with_visitor(graph, start, goal, |_| {})
}

/// Breadth first search with a visit hook
/// `on_visit` fires once per vertex, the moment it is first discovered; it
/// exists for observability and has no effect on the result
pub fn bfs_with_visitor(
    graph: &RoadGraph,
    start: GeoPoint,
    goal: GeoPoint,
    mut on_visit: impl FnMut(&GeoPoint),
) -> Option<Vec<GeoPoint>> {

    // Presence in the tree doubles as the visited set; vertices are marked
    // at enqueue time so nothing is ever enqueued twice
    let mut tree: SearchTree<usize> = SearchTree::default();
    let start_index = tree.insert_full(start, (NO_PARENT, 0)).0;

    let mut frontier: VecDeque<usize> = VecDeque::from([start_index]);

    while let Some(index) = frontier.pop_front() {
        let (&vertex, &(_, hops)) = tree.get_index(index).unwrap();

        if vertex == goal {
            return reconstruct_route(&tree, index);
        }

        for edge in graph.neighbors(&vertex) {
            if tree.contains_key(&edge.target) {
                continue;
            }
            let neighbor_index = tree.insert_full(edge.target, (index, hops + 1)).0;
            frontier.push_back(neighbor_index);
            on_visit(&edge.target);
        }
    }

    debug!("bfs exhausted frontier without reaching {goal:?}");
    None
}


#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    // Path graph A -> B -> C -> D on one line of latitude
    fn path_graph() -> (RoadGraph, [GeoPoint; 4]) {
        let points = [pt(0.0, 0.0), pt(0.0, 1.0), pt(0.0, 2.0), pt(0.0, 3.0)];

        let mut graph = RoadGraph::new();
        for point in points {
            graph.add_vertex(point);
        }
        for pair in points.windows(2) {
            graph.add_edge(pair[0], pair[1], "Line Rd", "residential", 1.0).unwrap();
        }
        (graph, points)
    }

    #[test]
    fn test_bfs_on_path_graph() {
        let (graph, [a, b, c, d]) = path_graph();

        let route = bfs(&graph, a, d).unwrap();
        assert_eq!(route, vec![a, b, c, d]);
    }

    #[test]
    fn test_bfs_start_equals_goal() {
        let (graph, [a, ..]) = path_graph();

        assert_eq!(bfs(&graph, a, a).unwrap(), vec![a]);
    }

    #[test]
    fn test_bfs_unreachable_goal() {
        let (mut graph, [a, ..]) = path_graph();
        let island = pt(5.0, 5.0);
        graph.add_vertex(island);

        assert_eq!(bfs(&graph, a, island), None);
    }

    #[test]
    fn test_bfs_respects_edge_direction() {
        // Edges only run forward along the path
        let (graph, [a, _, _, d]) = path_graph();

        assert_eq!(bfs(&graph, d, a), None);
    }

    #[test]
    fn test_bfs_prefers_fewest_hops() {
        // Two routes from A to D: direct edge vs two hops through B
        let a = pt(0.0, 0.0);
        let b = pt(0.0, 1.0);
        let d = pt(0.0, 2.0);

        let mut graph = RoadGraph::new();
        for point in [a, b, d] {
            graph.add_vertex(point);
        }
        graph.add_edge(a, b, "Long Way", "residential", 1.0).unwrap();
        graph.add_edge(b, d, "Long Way", "residential", 1.0).unwrap();
        graph.add_edge(a, d, "Shortcut", "motorway", 50.0).unwrap();

        // Hop count wins regardless of edge length
        assert_eq!(bfs(&graph, a, d).unwrap(), vec![a, d]);
    }

    #[test]
    fn test_bfs_visitor_fires_once_per_discovered_vertex() {
        let (graph, [a, _, _, d]) = path_graph();

        let mut seen = Vec::new();
        bfs_with_visitor(&graph, a, d, |vertex| seen.push(*vertex));

        // The start vertex is never reported; each other vertex exactly once
        assert_eq!(seen.len(), 3);
        assert!(!seen.contains(&a));
    }
}
