pub mod shortest_path;
pub mod spanning_tree;
pub mod structure;
pub mod traversal;

mod queue;

pub use shortest_path::{dijkstra, dijkstra_with, QueueDiscipline, ShortestPaths};
pub use spanning_tree::{kruskal, minimum_spanning_tree, prim, MstAlgorithm, SpanningTree};
pub use structure::{
    connected_components, is_bipartite, is_connected, two_coloring, Side, TwoColoring,
};
pub use traversal::{breadth_first, depth_first, search, SearchOutcome, Strategy};
