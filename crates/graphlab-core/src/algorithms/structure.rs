//! Connected components and bipartiteness, both flood fills built on
//! [`breadth_first`].

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::traversal::breadth_first;
use crate::graph::{ColorMap, Graph, VertexId};

/// Split `graph` into its connected components
///
/// Each component is a standalone [`Graph`] holding clones of the reached
/// vertices (ids preserved) and every edge whose endpoints both fall in
/// it. Components come out in the order their first vertex was inserted
/// into `graph`; vertices inside a component are in BFS order.
pub fn connected_components(graph: &Graph) -> Vec<Graph> {
    let mut colors = ColorMap::for_graph(graph);
    colors.clear();
    let mut components = Vec::new();

    while let Some(start) = colors.first_unvisited(graph) {
        let outcome = breadth_first(graph, start, colors, |_| {}, |_| false);
        colors = outcome.colors;

        let members: HashSet<VertexId> = outcome.visited.iter().copied().collect();
        let mut component = Graph::new();
        for &id in &outcome.visited {
            if let Some(vertex) = graph.vertex(id) {
                component.add_vertex(vertex.clone());
            }
        }
        for edge in graph.edges() {
            if members.contains(&edge.vertex1) && members.contains(&edge.vertex2) {
                component.add_edge(*edge);
            }
        }

        components.push(component);
    }

    tracing::debug!("Found {} connected components", components.len());
    components
}

/// Check if every vertex can reach every other one
///
/// The empty graph counts as connected.
pub fn is_connected(graph: &Graph) -> bool {
    connected_components(graph).len() <= 1
}

/// One of the two color classes of a two-coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A BFS two-coloring of a graph and whether it is proper
#[derive(Debug, Clone)]
pub struct TwoColoring {
    sides: HashMap<VertexId, Side>,
    left: Vec<VertexId>,
    right: Vec<VertexId>,
    bipartite: bool,
}

impl TwoColoring {
    /// True when no edge joins two vertices of the same side
    pub fn is_bipartite(&self) -> bool {
        self.bipartite
    }

    pub fn side(&self, vertex: VertexId) -> Option<Side> {
        self.sides.get(&vertex).copied()
    }

    /// Both color classes, each in vertex insertion order
    ///
    /// Only a true bipartition when [`TwoColoring::is_bipartite`] holds.
    pub fn partitions(&self) -> (&[VertexId], &[VertexId]) {
        (&self.left, &self.right)
    }
}

/// Two-color `graph` wave by wave
///
/// Every BFS wave starts from the first still-unvisited vertex, which
/// gets [`Side::Left`]. A vertex reached for the first time takes the
/// opposite side of the vertex that reached it; sides are never
/// overwritten. A final pass over the edges decides bipartiteness.
pub fn two_coloring(graph: &Graph) -> TwoColoring {
    let mut colors = ColorMap::for_graph(graph);
    colors.clear();
    let mut sides: HashMap<VertexId, Side> = HashMap::new();

    while let Some(start) = colors.first_unvisited(graph) {
        sides.insert(start, Side::Left);
        let outcome = breadth_first(
            graph,
            start,
            colors,
            |vertex| {
                let side = sides.get(&vertex).copied().unwrap_or(Side::Left);
                for neighbor in graph.neighbors(vertex) {
                    sides.entry(neighbor).or_insert(side.opposite());
                }
            },
            |_| false,
        );
        colors = outcome.colors;
    }

    let bipartite = graph
        .edges()
        .iter()
        .all(|e| sides.get(&e.vertex1) != sides.get(&e.vertex2));

    let (mut left, mut right) = (Vec::new(), Vec::new());
    for vertex in graph.vertices() {
        match sides.get(&vertex.id()) {
            Some(Side::Left) => left.push(vertex.id()),
            Some(Side::Right) => right.push(vertex.id()),
            None => {}
        }
    }

    tracing::debug!(
        "Two-coloring: {} left, {} right, bipartite={}",
        left.len(),
        right.len(),
        bipartite
    );

    TwoColoring {
        sides,
        left,
        right,
        bipartite,
    }
}

/// Check if `graph` has no odd cycle
pub fn is_bipartite(graph: &Graph) -> bool {
    two_coloring(graph).is_bipartite()
}
