use thiserror::Error;

use crate::geometry::GeoPoint;

/// Errors raised by graph mutation and the spatial index.
///
/// A search that cannot reach its goal is not an error; the search entry
/// points report that outcome as `None`.
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("edge length must be non-negative, got {0}")]
    NegativeEdgeLength(f64),
    #[error("neither {from:?} nor {to:?} has been added to the graph")]
    UnknownEndpoints { from: GeoPoint, to: GeoPoint },
    #[error("edge origin {0:?} has not been added to the graph")]
    MissingOrigin(GeoPoint),
    #[error("spatial index error: {0}")]
    SpatialIndex(String),
}

impl From<kdtree::ErrorKind> for GraphError {
    fn from(error: kdtree::ErrorKind) -> Self {
        GraphError::SpatialIndex(error.to_string())
    }
}
