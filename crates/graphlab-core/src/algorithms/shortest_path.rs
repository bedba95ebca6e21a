//! Single-source shortest paths (Dijkstra).

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use super::queue::WeightedEntry;
use crate::graph::{Color, ColorMap, Graph, VertexId};
use crate::{GraphError, GraphResult};

/// Order in which Dijkstra pulls vertices off its queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueueDiscipline {
    /// Min-heap keyed by tentative distance; correct for any non-negative weights
    #[default]
    Priority,
    /// Plain first-in first-out queue
    ///
    /// Only guaranteed to find shortest paths on unweighted or
    /// uniformly weighted graphs, where it degenerates to BFS.
    Fifo,
}

/// Shortest path tree rooted at a source vertex
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: VertexId,
    distances: HashMap<VertexId, f64>,
    previous: HashMap<VertexId, Option<VertexId>>,
    order: Vec<VertexId>,
}

impl ShortestPaths {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Best known distance; `f64::INFINITY` when unreachable, `None` when
    /// `vertex` was not part of the graph
    pub fn distance(&self, vertex: VertexId) -> Option<f64> {
        self.distances.get(&vertex).copied()
    }

    /// Predecessor on the shortest path; `None` for the source and for
    /// unreachable vertices
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.previous.get(&vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some_and(f64::is_finite)
    }

    /// Vertices from the source to `vertex`, both included
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(vertex) {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(prev) = self.predecessor(current) {
            if path.len() > self.distances.len() {
                return None;
            }
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Vertices in the order they were finalized
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }
}

/// Dijkstra from `start` with a min-priority queue
///
/// `visit` fires once per vertex as it is finalized.
pub fn dijkstra<V>(graph: &Graph, start: VertexId, visit: V) -> GraphResult<ShortestPaths>
where
    V: FnMut(VertexId),
{
    dijkstra_with(graph, start, QueueDiscipline::Priority, visit)
}

/// Dijkstra from `start` with an explicit queue discipline
///
/// Every distance starts at infinity and every predecessor at `None`.
/// A vertex is finalized when it leaves the queue; each incident edge
/// toward a non-finalized neighbor is then relaxed.
///
/// # Errors
///
/// - [`GraphError::VertexNotFound`] if `start` is not in `graph`
/// - [`GraphError::UnsetDistance`] if relaxation meets a vertex with no
///   distance, meaning an edge points outside the vertex set
pub fn dijkstra_with<V>(
    graph: &Graph,
    start: VertexId,
    discipline: QueueDiscipline,
    mut visit: V,
) -> GraphResult<ShortestPaths>
where
    V: FnMut(VertexId),
{
    if !graph.contains_vertex(start) {
        return Err(GraphError::VertexNotFound(start.to_string()));
    }

    tracing::debug!(
        "Dijkstra from {} using {:?} queue",
        graph.label(start),
        discipline
    );

    let mut run = Relaxation::new(graph, start);
    let mut colors = ColorMap::for_graph(graph);
    colors.clear();
    colors.set(start, Color::Discovered);

    match discipline {
        QueueDiscipline::Priority => {
            let mut heap = BinaryHeap::new();
            let mut seq = 0usize;
            heap.push(Reverse(WeightedEntry::new(0.0, seq, start)));

            while let Some(Reverse(entry)) = heap.pop() {
                let vertex = entry.item;
                if colors.get(vertex) == Color::Finished {
                    continue;
                }
                colors.set(vertex, Color::Finished);
                visit(vertex);
                run.order.push(vertex);

                for (neighbor, distance) in run.relax_from(graph, vertex, &colors)? {
                    seq += 1;
                    colors.set(neighbor, Color::Discovered);
                    heap.push(Reverse(WeightedEntry::new(distance, seq, neighbor)));
                }
            }
        }
        QueueDiscipline::Fifo => {
            let mut queue = VecDeque::from([start]);

            while let Some(vertex) = queue.pop_front() {
                colors.set(vertex, Color::Finished);
                visit(vertex);
                run.order.push(vertex);

                run.relax_from(graph, vertex, &colors)?;
                for neighbor in graph.neighbors(vertex) {
                    if colors.is_unvisited(neighbor) {
                        colors.set(neighbor, Color::Discovered);
                        queue.push_back(neighbor);
                    }
                }
            }
        }
    }

    Ok(run.finish(start))
}

/// Distance and predecessor tables for one run
struct Relaxation {
    distances: HashMap<VertexId, f64>,
    previous: HashMap<VertexId, Option<VertexId>>,
    order: Vec<VertexId>,
}

impl Relaxation {
    fn new(graph: &Graph, start: VertexId) -> Self {
        let mut distances: HashMap<VertexId, f64> = graph
            .vertices()
            .iter()
            .map(|v| (v.id(), f64::INFINITY))
            .collect();
        let previous = graph.vertices().iter().map(|v| (v.id(), None)).collect();
        distances.insert(start, 0.0);

        Self {
            distances,
            previous,
            order: Vec::new(),
        }
    }

    fn distance(&self, graph: &Graph, vertex: VertexId) -> GraphResult<f64> {
        self.distances
            .get(&vertex)
            .copied()
            .ok_or_else(|| GraphError::UnsetDistance(graph.label(vertex)))
    }

    /// Relax every edge from `vertex` to a non-finalized neighbor
    ///
    /// Returns the neighbors whose distance improved, with the new value.
    fn relax_from(
        &mut self,
        graph: &Graph,
        vertex: VertexId,
        colors: &ColorMap,
    ) -> GraphResult<Vec<(VertexId, f64)>> {
        let base = self.distance(graph, vertex)?;
        let mut improved = Vec::new();

        for edge in graph.incident_edges(vertex) {
            let neighbor = edge.other(vertex);
            if colors.get(neighbor) == Color::Finished {
                continue;
            }

            let candidate = base + edge.weight;
            if self.distance(graph, neighbor)? > candidate {
                self.distances.insert(neighbor, candidate);
                self.previous.insert(neighbor, Some(vertex));
                improved.push((neighbor, candidate));
            }
        }

        Ok(improved)
    }

    fn finish(self, source: VertexId) -> ShortestPaths {
        ShortestPaths {
            source,
            distances: self.distances,
            previous: self.previous,
            order: self.order,
        }
    }
}
