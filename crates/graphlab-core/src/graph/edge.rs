use serde::{Deserialize, Serialize};

use super::vertex::VertexId;

/// Weight given to edges created without an explicit one
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// An undirected, weighted edge between two vertices
///
/// Endpoints are unordered: `Edge::new(a, b)` and `Edge::new(b, a)`
/// describe the same connection. An edge has no identity beyond its
/// endpoint pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint
    pub vertex1: VertexId,
    /// Second endpoint
    pub vertex2: VertexId,
    /// Edge weight used by the shortest path and spanning tree algorithms
    pub weight: f64,
}

impl Edge {
    /// Create an edge with the default weight
    pub fn new(vertex1: VertexId, vertex2: VertexId) -> Self {
        Self::weighted(vertex1, vertex2, DEFAULT_WEIGHT)
    }

    /// Create an edge with an explicit weight
    pub fn weighted(vertex1: VertexId, vertex2: VertexId, weight: f64) -> Self {
        Self {
            vertex1,
            vertex2,
            weight,
        }
    }

    /// Check if both endpoints are the same vertex
    pub fn is_self_loop(&self) -> bool {
        self.vertex1 == self.vertex2
    }

    /// Check if this edge involves a given vertex (either endpoint)
    pub fn involves(&self, vertex: VertexId) -> bool {
        self.vertex1 == vertex || self.vertex2 == vertex
    }

    /// Check if this edge connects two vertices, in either order
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.vertex1 == a && self.vertex2 == b) || (self.vertex1 == b && self.vertex2 == a)
    }

    /// Check if two edges share the same unordered endpoint pair
    pub fn same_endpoints(&self, other: &Edge) -> bool {
        self.connects(other.vertex1, other.vertex2)
    }

    /// Return whichever endpoint is not `vertex`
    ///
    /// The caller must pass one of the endpoints; for any other vertex
    /// the result is `vertex1`.
    pub fn other(&self, vertex: VertexId) -> VertexId {
        debug_assert!(self.involves(vertex), "vertex is not an endpoint");
        if self.vertex1 != vertex {
            self.vertex1
        } else {
            self.vertex2
        }
    }
}
