//! Generic depth-first and breadth-first search.
//!
//! Both strategies are driven by two callbacks: a *visit* function called
//! once per vertex as it is reached, and a *stop* predicate checked right
//! after each visit. When the predicate holds the walk halts and that
//! vertex becomes [`SearchOutcome::found`].
//!
//! Neither strategy recurses, so deep graphs cannot overflow the stack.
//! The depth-first walk keeps an explicit stack of neighbor cursors which
//! reproduces the recursive visit order exactly.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::graph::{Color, ColorMap, Graph, VertexId};
use crate::{GraphError, GraphResult};

/// Traversal strategy selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    DepthFirst,
    BreadthFirst,
}

impl Strategy {
    /// Walk `graph` from `start` with this strategy
    ///
    /// `colors` must already be cleared; [`search`] does that for you.
    pub fn explore<V, S>(
        self,
        graph: &Graph,
        start: VertexId,
        colors: ColorMap,
        visit: V,
        stop: S,
    ) -> SearchOutcome
    where
        V: FnMut(VertexId),
        S: FnMut(VertexId) -> bool,
    {
        match self {
            Strategy::DepthFirst => depth_first(graph, start, colors, visit, stop),
            Strategy::BreadthFirst => breadth_first(graph, start, colors, visit, stop),
        }
    }
}

/// Result of a search
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// First vertex for which the stop predicate held
    pub found: Option<VertexId>,
    /// Every visited vertex, in visit order
    pub visited: Vec<VertexId>,
    /// Final color of every vertex
    pub colors: ColorMap,
}

/// Run a search over `graph`
///
/// Starts at `start`, or at the first inserted vertex when `None`.
/// Colors are reset before the walk begins. An empty graph yields an
/// empty outcome.
///
/// # Errors
///
/// [`GraphError::VertexNotFound`] if `start` is not a vertex of `graph`.
pub fn search<V, S>(
    graph: &Graph,
    start: Option<VertexId>,
    strategy: Strategy,
    visit: V,
    stop: S,
) -> GraphResult<SearchOutcome>
where
    V: FnMut(VertexId),
    S: FnMut(VertexId) -> bool,
{
    let start = match start.or_else(|| graph.first_vertex()) {
        Some(start) => start,
        None => return Ok(SearchOutcome::default()),
    };

    if !graph.contains_vertex(start) {
        return Err(GraphError::VertexNotFound(start.to_string()));
    }

    tracing::debug!(
        "Searching {:?} from {} over {} vertices",
        strategy,
        graph.label(start),
        graph.vertex_count()
    );

    let mut colors = ColorMap::for_graph(graph);
    colors.clear();
    Ok(strategy.explore(graph, start, colors, visit, stop))
}

/// Depth-first walk from `start`
///
/// Neighbors are followed in the order [`Graph::incident_edges`] returns
/// them. A vertex is colored [`Color::Discovered`] when entered and
/// [`Color::Finished`] once all of its neighbors have been examined.
pub fn depth_first<V, S>(
    graph: &Graph,
    start: VertexId,
    colors: ColorMap,
    visit: V,
    stop: S,
) -> SearchOutcome
where
    V: FnMut(VertexId),
    S: FnMut(VertexId) -> bool,
{
    let mut walker = Walker::new(colors, visit, stop);

    if walker.enter(start) {
        return walker.finish(Some(start));
    }

    let mut stack = vec![Frame::new(graph, start)];

    while let Some(frame) = stack.last_mut() {
        match frame.next_neighbor() {
            Some(neighbor) => {
                if !walker.colors.is_unvisited(neighbor) {
                    continue;
                }
                if walker.enter(neighbor) {
                    return walker.finish(Some(neighbor));
                }
                stack.push(Frame::new(graph, neighbor));
            }
            None => {
                let done = frame.vertex;
                stack.pop();
                walker.colors.set(done, Color::Finished);
            }
        }
    }

    walker.finish(None)
}

/// Breadth-first walk from `start`
///
/// Vertices are visited in non-decreasing hop distance from `start`, ties
/// broken by enqueue order. Enqueued vertices are marked
/// [`Color::Discovered`] so they are never queued twice.
pub fn breadth_first<V, S>(
    graph: &Graph,
    start: VertexId,
    colors: ColorMap,
    visit: V,
    stop: S,
) -> SearchOutcome
where
    V: FnMut(VertexId),
    S: FnMut(VertexId) -> bool,
{
    let mut walker = Walker::new(colors, visit, stop);
    let mut queue = VecDeque::from([start]);
    walker.colors.set(start, Color::Discovered);

    while let Some(vertex) = queue.pop_front() {
        if walker.enter(vertex) {
            return walker.finish(Some(vertex));
        }

        for neighbor in graph.neighbors(vertex) {
            if walker.colors.is_unvisited(neighbor) {
                walker.colors.set(neighbor, Color::Discovered);
                queue.push_back(neighbor);
            }
        }

        walker.colors.set(vertex, Color::Finished);
    }

    walker.finish(None)
}

/// Shared bookkeeping for both strategies
struct Walker<V, S> {
    colors: ColorMap,
    visited: Vec<VertexId>,
    visit: V,
    stop: S,
}

impl<V, S> Walker<V, S>
where
    V: FnMut(VertexId),
    S: FnMut(VertexId) -> bool,
{
    fn new(colors: ColorMap, visit: V, stop: S) -> Self {
        Self {
            colors,
            visited: Vec::new(),
            visit,
            stop,
        }
    }

    /// Visit a vertex and report whether the walk should stop there
    fn enter(&mut self, vertex: VertexId) -> bool {
        (self.visit)(vertex);
        self.visited.push(vertex);
        self.colors.set(vertex, Color::Discovered);
        tracing::trace!("Visited {} (step {})", vertex, self.visited.len());
        (self.stop)(vertex)
    }

    fn finish(self, found: Option<VertexId>) -> SearchOutcome {
        SearchOutcome {
            found,
            visited: self.visited,
            colors: self.colors,
        }
    }
}

/// A vertex on the depth-first stack and how far through its neighbors we are
struct Frame {
    vertex: VertexId,
    neighbors: Vec<VertexId>,
    cursor: usize,
}

impl Frame {
    fn new(graph: &Graph, vertex: VertexId) -> Self {
        Self {
            vertex,
            neighbors: graph.neighbors(vertex),
            cursor: 0,
        }
    }

    fn next_neighbor(&mut self) -> Option<VertexId> {
        let next = self.neighbors.get(self.cursor).copied();
        self.cursor += 1;
        next
    }
}
