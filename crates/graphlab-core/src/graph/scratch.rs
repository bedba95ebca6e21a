//! Per-run traversal state.
//!
//! Algorithms never write onto [`Vertex`](super::Vertex). Each run builds
//! its own [`ColorMap`] from the graph it walks and hands it back to the
//! caller once it is done, so no state leaks from one run into the next.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::store::Graph;
use super::vertex::VertexId;

/// Traversal marker for a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    /// Not reached yet
    #[default]
    Unvisited,
    /// Reached; on the DFS stack or in the BFS frontier
    Discovered,
    /// Every neighbor has been examined
    Finished,
}

/// Color marker for every vertex of one graph
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    colors: HashMap<VertexId, Color>,
}

impl ColorMap {
    /// Every vertex of `graph` starts out [`Color::Unvisited`]
    pub fn for_graph(graph: &Graph) -> Self {
        let colors = graph
            .vertices()
            .iter()
            .map(|v| (v.id(), Color::Unvisited))
            .collect();
        Self { colors }
    }

    /// Reset every marker to [`Color::Unvisited`]
    pub fn clear(&mut self) {
        for color in self.colors.values_mut() {
            *color = Color::Unvisited;
        }
    }

    /// Vertices unknown to the map read as unvisited
    pub fn get(&self, vertex: VertexId) -> Color {
        self.colors.get(&vertex).copied().unwrap_or_default()
    }

    pub fn set(&mut self, vertex: VertexId, color: Color) {
        self.colors.insert(vertex, color);
    }

    pub fn is_unvisited(&self, vertex: VertexId) -> bool {
        self.get(vertex) == Color::Unvisited
    }

    /// First vertex of `graph`, in insertion order, still unvisited
    pub fn first_unvisited(&self, graph: &Graph) -> Option<VertexId> {
        graph
            .vertices()
            .iter()
            .map(|v| v.id())
            .find(|&id| self.is_unvisited(id))
    }

    /// Number of vertices carrying `color`
    pub fn count(&self, color: Color) -> usize {
        self.colors.values().filter(|&&c| c == color).count()
    }
}
