//! Minimum spanning trees (Kruskal, Prim).
//!
//! Both algorithms assume a connected input. When they run out of usable
//! edges before `|V| - 1` are selected they stop with
//! [`GraphError::Disconnected`] instead of returning a partial forest.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use super::queue::WeightedEntry;
use crate::graph::{Edge, Graph, VertexId};
use crate::{GraphError, GraphResult};

/// Spanning tree algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MstAlgorithm {
    #[default]
    Kruskal,
    Prim,
}

/// A spanning tree, stored as its own graph
///
/// Vertices are clones of the source graph's vertices, ids preserved.
#[derive(Debug, Clone, Default)]
pub struct SpanningTree {
    tree: Graph,
}

impl SpanningTree {
    pub fn graph(&self) -> &Graph {
        &self.tree
    }

    pub fn into_graph(self) -> Graph {
        self.tree
    }

    pub fn edges(&self) -> &[Edge] {
        self.tree.edges()
    }

    pub fn total_weight(&self) -> f64 {
        self.tree.total_weight()
    }
}

/// Build a minimum spanning tree with the chosen algorithm
pub fn minimum_spanning_tree(graph: &Graph, algorithm: MstAlgorithm) -> GraphResult<SpanningTree> {
    match algorithm {
        MstAlgorithm::Kruskal => kruskal(graph),
        MstAlgorithm::Prim => prim(graph),
    }
}

/// Kruskal's algorithm
///
/// Edges are taken lightest first (ties keep edge-list order). Every vertex
/// starts as its own component representative; accepting an edge rewrites
/// every vertex pointing at the absorbed representative to the surviving
/// one, so the whole run is O(V·E).
///
/// The returned tree contains every vertex of `graph`.
pub fn kruskal(graph: &Graph) -> GraphResult<SpanningTree> {
    let required = graph.vertex_count().saturating_sub(1);

    let mut tree = Graph::new();
    for vertex in graph.vertices() {
        tree.add_vertex(vertex.clone());
    }

    let mut component: HashMap<VertexId, VertexId> =
        graph.vertices().iter().map(|v| (v.id(), v.id())).collect();

    let mut sorted: Vec<Edge> = graph.edges().to_vec();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));
    let mut available: VecDeque<Edge> = sorted.into();

    while tree.edge_count() < required {
        let edge = loop {
            let Some(edge) = available.pop_front() else {
                return Err(disconnected(tree.edge_count(), required));
            };
            let first = representative(&component, graph, edge.vertex1)?;
            let second = representative(&component, graph, edge.vertex2)?;
            if first != second {
                break edge;
            }
        };

        let survivor = representative(&component, graph, edge.vertex1)?;
        let absorbed = representative(&component, graph, edge.vertex2)?;
        for rep in component.values_mut() {
            if *rep == absorbed {
                *rep = survivor;
            }
        }

        tracing::trace!(
            "Kruskal selected {}-{} ({})",
            graph.label(edge.vertex1),
            graph.label(edge.vertex2),
            edge.weight
        );
        tree.add_edge(edge);
    }

    tracing::debug!(
        "Kruskal built spanning tree with {} edges, weight {}",
        tree.edge_count(),
        tree.total_weight()
    );
    Ok(SpanningTree { tree })
}

/// Prim's algorithm
///
/// Grows the tree from the first inserted vertex. After each step the
/// incident edges of the newest tree vertex join the candidate heap
/// (each edge at most once), and the lightest candidate with an endpoint
/// outside the tree is accepted.
///
/// The returned tree lists vertices in the order they joined it.
pub fn prim(graph: &Graph) -> GraphResult<SpanningTree> {
    let mut tree = Graph::new();
    let Some(start) = graph.vertices().first() else {
        return Ok(SpanningTree { tree });
    };

    let required = graph.vertex_count() - 1;
    tree.add_vertex(start.clone());

    let mut in_tree: HashSet<VertexId> = HashSet::from([start.id()]);
    let mut queued: HashSet<usize> = HashSet::new();
    let mut candidates = BinaryHeap::new();
    let mut seq = 0usize;
    let mut current = start.id();

    while tree.edge_count() < required {
        for (index, edge) in graph.edges().iter().enumerate() {
            if edge.involves(current) && queued.insert(index) {
                candidates.push(Reverse(WeightedEntry::new(edge.weight, seq, *edge)));
                seq += 1;
            }
        }

        let edge = loop {
            let Some(Reverse(entry)) = candidates.pop() else {
                return Err(disconnected(tree.edge_count(), required));
            };
            let edge = entry.item;
            if !in_tree.contains(&edge.vertex1) || !in_tree.contains(&edge.vertex2) {
                break edge;
            }
        };

        let joining = if in_tree.contains(&edge.vertex1) {
            edge.vertex2
        } else {
            edge.vertex1
        };
        let vertex = graph
            .vertex(joining)
            .ok_or_else(|| GraphError::VertexNotFound(joining.to_string()))?;

        tree.add_vertex(vertex.clone());
        tree.add_edge(edge);
        in_tree.insert(joining);
        current = joining;

        tracing::trace!(
            "Prim added {} via edge of weight {}",
            vertex.name(),
            edge.weight
        );
    }

    tracing::debug!(
        "Prim built spanning tree with {} edges, weight {}",
        tree.edge_count(),
        tree.total_weight()
    );
    Ok(SpanningTree { tree })
}

fn representative(
    component: &HashMap<VertexId, VertexId>,
    graph: &Graph,
    vertex: VertexId,
) -> GraphResult<VertexId> {
    component
        .get(&vertex)
        .copied()
        .ok_or_else(|| GraphError::VertexNotFound(graph.label(vertex)))
}

fn disconnected(selected: usize, required: usize) -> GraphError {
    tracing::warn!(
        "Spanning tree incomplete: {} of {} edges selected",
        selected,
        required
    );
    GraphError::Disconnected { selected, required }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Vertex;

    fn build(names: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
        let mut graph = Graph::new();
        for name in names {
            graph.add_vertex(Vertex::new(*name));
        }
        for (a, b, w) in edges {
            let a = graph.vertex_id(a).unwrap();
            let b = graph.vertex_id(b).unwrap();
            graph.add_edge(Edge::weighted(a, b, *w)).unwrap();
        }
        graph
    }

    fn triangle() -> Graph {
        build(
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)],
        )
    }

    fn assert_selects_ab_bc(graph: &Graph, tree: &SpanningTree) {
        let id = |name: &str| graph.vertex_id(name).unwrap();
        assert_eq!(tree.edges().len(), 2);
        assert!(tree.graph().has_edge(id("A"), id("B")));
        assert!(tree.graph().has_edge(id("B"), id("C")));
        assert!(!tree.graph().has_edge(id("A"), id("C")));
        assert_eq!(tree.total_weight(), 3.0);
    }

    #[test]
    fn test_kruskal_triangle() {
        let graph = triangle();
        let tree = kruskal(&graph).unwrap();
        assert_selects_ab_bc(&graph, &tree);
        assert_eq!(tree.graph().vertex_count(), 3);
    }

    #[test]
    fn test_prim_triangle() {
        let graph = triangle();
        let tree = prim(&graph).unwrap();
        assert_selects_ab_bc(&graph, &tree);

        let order: Vec<&str> = tree.graph().vertices().iter().map(|v| v.name()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_source_graph_untouched() {
        let graph = triangle();
        kruskal(&graph).unwrap();
        prim(&graph).unwrap();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_disconnected_graph_errors() {
        let graph = build(&["A", "B", "C", "D"], &[("A", "B", 1.0), ("C", "D", 1.0)]);

        for algorithm in [MstAlgorithm::Kruskal, MstAlgorithm::Prim] {
            let result = minimum_spanning_tree(&graph, algorithm);
            assert!(matches!(
                result,
                Err(GraphError::Disconnected { required: 3, .. })
            ));
        }
    }

    #[test]
    fn test_trivial_graphs() {
        let empty = Graph::new();
        assert_eq!(kruskal(&empty).unwrap().edges().len(), 0);
        assert_eq!(prim(&empty).unwrap().graph().vertex_count(), 0);

        let single = build(&["A"], &[]);
        assert_eq!(kruskal(&single).unwrap().graph().vertex_count(), 1);
        assert_eq!(prim(&single).unwrap().graph().vertex_count(), 1);
    }

    #[test]
    fn test_prim_skips_edges_inside_tree() {
        // square with a heavy diagonal; the cheap cycle edge must be skipped
        let graph = build(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1.0),
                ("B", "C", 1.0),
                ("C", "A", 1.0),
                ("C", "D", 4.0),
                ("A", "D", 9.0),
            ],
        );
        let tree = prim(&graph).unwrap();
        assert_eq!(tree.edges().len(), 3);
        assert_eq!(tree.total_weight(), 6.0);
    }

    #[test]
    fn test_kruskal_and_prim_agree_on_weight() {
        let graph = build(
            &["A", "B", "C", "D", "E", "F"],
            &[
                ("A", "B", 4.0),
                ("A", "F", 2.0),
                ("B", "C", 6.0),
                ("B", "F", 5.0),
                ("C", "D", 3.0),
                ("C", "F", 1.0),
                ("D", "E", 2.0),
                ("E", "F", 4.0),
            ],
        );
        let by_kruskal = kruskal(&graph).unwrap();
        let by_prim = prim(&graph).unwrap();

        assert_eq!(by_kruskal.edges().len(), 5);
        assert_eq!(by_prim.edges().len(), 5);
        assert_eq!(by_kruskal.total_weight(), by_prim.total_weight());
        assert_eq!(by_kruskal.total_weight(), 12.0);
    }
}
