use crate::collections::{FxIndexMap, FxIndexSet};
use crate::errors::GraphError;
use crate::geometry::GeoPoint;

use kdtree::KdTree;
use kdtree::distance::squared_euclidean;
use log::{debug, trace};


/// A directed road segment leaving an intersection
/// The weight used by a search is not stored here; it is derived from the
/// physical length by the cost oracle of that search
#[derive(Clone, Debug, PartialEq)]
pub struct RoadEdge {
    pub target: GeoPoint,
    pub road_name: String,
    pub road_type: String,
    pub length: f64, // km
}


/// A road network - directed graph of geographic intersections
/// Vertices are the keys of the adjacency map; edges live in the outgoing
/// list of their origin vertex
/// Built once by a loader, then treated as read only by every search
#[derive(Debug, Default)]
pub struct RoadGraph {
    adjacency: FxIndexMap<GeoPoint, Vec<RoadEdge>>,
    num_vertices: usize,
    num_edges: usize,
}

impl RoadGraph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Number of intersections in the graph - O(1) running counter
    pub fn vertex_count(&self) -> usize {
        self.num_vertices
    }

    /// Number of road segments in the graph - O(1) running counter
    pub fn edge_count(&self) -> usize {
        self.num_edges
    }

    /// Snapshot of the intersections in the graph
    /// The returned set is a copy; mutating it does not touch the graph
    pub fn vertices(&self) -> FxIndexSet<GeoPoint> {
        self.adjacency.keys().copied().collect()
    }

    /// Add an intersection to the graph
    /// Returns false without changing the graph if the vertex is already present
    pub fn add_vertex(&mut self, location: GeoPoint) -> bool {
        if self.adjacency.contains_key(&location) {
            return false;
        }
        self.adjacency.insert(location, Vec::new());
        self.num_vertices += 1;
        true
    }

    /// Add a directed road segment from `from` to `to`
    ///
    /// At least one endpoint must already be a vertex. A target that has not
    /// been inserted yet is tolerated because loaders may emit edges before
    /// all intersections are known; the origin however must exist, since the
    /// edge is stored in its outgoing list.
    pub fn add_edge(
        &mut self,
        from: GeoPoint,
        to: GeoPoint,
        road_name: &str,
        road_type: &str,
        length: f64,
    ) -> Result<(), GraphError> {
        if length < 0.0 {
            return Err(GraphError::NegativeEdgeLength(length));
        }
        if !self.adjacency.contains_key(&from) && !self.adjacency.contains_key(&to) {
            return Err(GraphError::UnknownEndpoints { from, to });
        }

        let Some(edges) = self.adjacency.get_mut(&from) else {
            return Err(GraphError::MissingOrigin(from));
        };

        trace!("edge {from:?} -> {to:?} ({road_name}, {length} km)");
        edges.push(RoadEdge {
            target: to,
            road_name: road_name.to_string(),
            road_type: road_type.to_string(),
            length,
        });
        self.num_edges += 1;
        Ok(())
    }

    /// Outgoing road segments of an intersection
    /// A vertex that is not in the graph has no neighbors
    pub fn neighbors(&self, location: &GeoPoint) -> &[RoadEdge] {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}


/// Spatial index over the vertices of a graph
/// Snaps an arbitrary coordinate to the nearest intersection, e.g. to turn a
/// user supplied location into a search start point
pub struct VertexIndex {
    tree: KdTree<f64, GeoPoint, [f64; 2]>,
}

impl VertexIndex {

    /// Build the index from a graph snapshot
    /// The index does not follow later graph mutations
    pub fn build(graph: &RoadGraph) -> Result<Self, GraphError> {
        let mut tree = KdTree::new(2);
        for vertex in graph.vertices() {
            tree.add([vertex.lat, vertex.lon], vertex)?;
        }
        debug!("spatial index built over {} vertices", graph.vertex_count());
        Ok(Self { tree })
    }

    /// The vertex closest to `query`, or None for an empty graph
    pub fn nearest(&self, query: &GeoPoint) -> Result<Option<GeoPoint>, GraphError> {
        let found = self
            .tree
            .nearest(&[query.lat, query.lon], 1, &squared_euclidean)?;

        Ok(found.first().map(|(_, vertex)| **vertex))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    #[test]
    fn test_vertex_count_ignores_duplicates() {
        let mut graph = RoadGraph::new();

        assert!(graph.add_vertex(pt(1.0, 1.0)));
        assert!(graph.add_vertex(pt(2.0, 2.0)));
        assert!(!graph.add_vertex(pt(1.0, 1.0))); // duplicate

        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_edge_count_tracks_successful_insertions() {
        let mut graph = RoadGraph::new();
        graph.add_vertex(pt(1.0, 1.0));
        graph.add_vertex(pt(2.0, 2.0));

        graph.add_edge(pt(1.0, 1.0), pt(2.0, 2.0), "Main St", "residential", 1.2).unwrap();
        graph.add_edge(pt(2.0, 2.0), pt(1.0, 1.0), "Main St", "residential", 1.2).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(&pt(1.0, 1.0)).len(), 1);
    }

    #[test]
    fn test_negative_length_rejected() {
        let mut graph = RoadGraph::new();
        graph.add_vertex(pt(1.0, 1.0));
        graph.add_vertex(pt(2.0, 2.0));

        let result = graph.add_edge(pt(1.0, 1.0), pt(2.0, 2.0), "Main St", "residential", -1.0);

        assert_eq!(result, Err(GraphError::NegativeEdgeLength(-1.0)));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_edge_with_no_known_endpoint_rejected() {
        let mut graph = RoadGraph::new();
        graph.add_vertex(pt(1.0, 1.0));

        let result = graph.add_edge(pt(5.0, 5.0), pt(6.0, 6.0), "Ghost Rd", "residential", 1.0);

        assert!(matches!(result, Err(GraphError::UnknownEndpoints { .. })));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_edge_to_not_yet_inserted_vertex_tolerated() {
        // Loaders may emit an edge before its target intersection
        let mut graph = RoadGraph::new();
        graph.add_vertex(pt(1.0, 1.0));

        graph.add_edge(pt(1.0, 1.0), pt(2.0, 2.0), "New Rd", "residential", 1.0).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(&pt(1.0, 1.0))[0].target, pt(2.0, 2.0));
    }

    #[test]
    fn test_edge_from_unknown_origin_rejected() {
        let mut graph = RoadGraph::new();
        graph.add_vertex(pt(2.0, 2.0));

        // Target exists but the origin does not, so there is no list to hold the edge
        let result = graph.add_edge(pt(1.0, 1.0), pt(2.0, 2.0), "Main St", "residential", 1.0);

        assert_eq!(result, Err(GraphError::MissingOrigin(pt(1.0, 1.0))));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_vertices_returns_snapshot() {
        let mut graph = RoadGraph::new();
        graph.add_vertex(pt(1.0, 1.0));

        let mut snapshot = graph.vertices();
        snapshot.insert(pt(9.0, 9.0));

        assert_eq!(graph.vertex_count(), 1);
        assert!(!graph.vertices().contains(&pt(9.0, 9.0)));
    }

    #[test]
    fn test_vertex_index_nearest() {
        let mut graph = RoadGraph::new();
        graph.add_vertex(pt(1.0, 1.0));
        graph.add_vertex(pt(10.0, 10.0));

        let index = VertexIndex::build(&graph).unwrap();

        assert_eq!(index.nearest(&pt(1.2, 0.9)).unwrap(), Some(pt(1.0, 1.0)));
        assert_eq!(index.nearest(&pt(11.0, 11.0)).unwrap(), Some(pt(10.0, 10.0)));
    }

    #[test]
    fn test_vertex_index_empty_graph() {
        let graph = RoadGraph::new();
        let index = VertexIndex::build(&graph).unwrap();

        assert_eq!(index.nearest(&pt(0.0, 0.0)).unwrap(), None);
    }
}
