use serde::Serialize;
use std::fmt;

use super::edge::Edge;
use super::vertex::{Vertex, VertexId};

/// Undirected graph store
///
/// Vertices are kept in insertion order so every traversal over the
/// store is deterministic. Edges are an ordered list; adjacency queries
/// scan it.
///
/// Invariants upheld by the mutation methods:
/// - vertex names are unique
/// - no self-loops
/// - no two edges share the same unordered endpoint pair
/// - every edge endpoint is a vertex of this graph
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex
    ///
    /// Returns false without touching the graph if a vertex with the
    /// same name already exists.
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.vertices.iter().any(|v| v.name() == vertex.name()) {
            return false;
        }
        self.vertices.push(vertex);
        true
    }

    /// Remove a vertex and every edge incident to it
    ///
    /// Returns true if the vertex was present.
    pub fn delete_vertex(&mut self, id: VertexId) -> bool {
        let initial_len = self.vertices.len();
        self.vertices.retain(|v| v.id() != id);
        if self.vertices.len() == initial_len {
            return false;
        }
        self.edges.retain(|e| !e.involves(id));
        true
    }

    /// Remove a vertex looked up by name (cascades like [`Graph::delete_vertex`])
    pub fn delete_vertex_by_name(&mut self, name: &str) -> bool {
        match self.vertex_id(name) {
            Some(id) => self.delete_vertex(id),
            None => false,
        }
    }

    /// Add an edge
    ///
    /// Rejects self-loops, edges with an endpoint outside the graph and
    /// edges whose unordered endpoint pair already exists. Returns the
    /// stored edge on success.
    pub fn add_edge(&mut self, edge: Edge) -> Option<Edge> {
        if edge.is_self_loop() {
            return None;
        }
        if !self.contains_vertex(edge.vertex1) || !self.contains_vertex(edge.vertex2) {
            return None;
        }
        if self.edges.iter().any(|e| e.same_endpoints(&edge)) {
            return None;
        }
        self.edges.push(edge);
        Some(edge)
    }

    /// Remove the edge with the same endpoint pair as `edge`
    ///
    /// Returns true if an edge was removed.
    pub fn delete_edge(&mut self, edge: &Edge) -> bool {
        let initial_len = self.edges.len();
        self.edges.retain(|e| !e.same_endpoints(edge));
        self.edges.len() < initial_len
    }

    /// All edges touching `vertex`, in edge-list order
    pub fn incident_edges(&self, vertex: VertexId) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.involves(vertex)).collect()
    }

    /// Whichever endpoint of `edge` is not `vertex`
    pub fn other_vertex(&self, edge: &Edge, vertex: VertexId) -> VertexId {
        edge.other(vertex)
    }

    /// Neighbor ids in the order [`Graph::incident_edges`] yields them
    pub fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.edges
            .iter()
            .filter(|e| e.involves(vertex))
            .map(|e| e.other(vertex))
            .collect()
    }

    pub fn degree(&self, vertex: VertexId) -> usize {
        self.edges.iter().filter(|e| e.involves(vertex)).count()
    }

    /// Sum of all vertex degrees; always `2 * edge_count()`
    pub fn total_degree(&self) -> usize {
        self.vertices.iter().map(|v| self.degree(v.id())).sum()
    }

    /// Vertex degrees sorted ascending
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut sequence: Vec<usize> = self.vertices.iter().map(|v| self.degree(v.id())).collect();
        sequence.sort_unstable();
        sequence
    }

    /// Sum of all edge weights
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id() == id)
    }

    pub fn vertex_by_name(&self, name: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.name() == name)
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.vertex_by_name(name).map(Vertex::id)
    }

    /// Name of a vertex, falling back to its id when it is not in the graph
    pub fn label(&self, id: VertexId) -> String {
        self.vertex(id)
            .map(|v| v.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }

    /// First inserted vertex, the default start of every traversal
    pub fn first_vertex(&self) -> Option<VertexId> {
        self.vertices.first().map(Vertex::id)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.iter().any(|v| v.id() == id)
    }

    /// Check if an edge exists between two vertices (either order)
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.find_edge(a, b).is_some()
    }

    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.connects(a, b))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl fmt::Display for Graph {
    /// One line per vertex: `A => [B(1), C(5)]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            write!(f, "{} => [", vertex.name())?;
            for (i, edge) in self.incident_edges(vertex.id()).into_iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}({})", self.label(edge.other(vertex.id())), edge.weight)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
