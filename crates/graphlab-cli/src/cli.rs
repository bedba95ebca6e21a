use clap::{Args, Parser, Subcommand, ValueEnum};
use graphlab_core::algorithms::{MstAlgorithm, Strategy};

#[derive(Parser)]
#[command(name = "graphlab")]
#[command(about = "Run graph algorithms on a graph described on the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Vertex to add; edge endpoints are added automatically
    #[arg(long = "vertex", value_name = "NAME", global = true)]
    pub vertices: Vec<String>,

    /// Undirected edge, written A-B or A-B:WEIGHT
    #[arg(long = "edge", value_name = "A-B[:WEIGHT]", global = true)]
    pub edges: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Vertex and edge counts, degrees and total weight
    Stats,
    /// Depth-first or breadth-first search
    Search(SearchArgs),
    /// Split the graph into connected components
    Components,
    /// Check whether the graph is bipartite
    Bipartite,
    /// Single-source shortest paths
    Dijkstra(DijkstraArgs),
    /// Minimum spanning tree
    Mst(MstArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct SearchArgs {
    /// Traversal strategy (defaults to the configured one)
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,
    /// Start vertex (defaults to the first vertex)
    #[arg(long)]
    pub start: Option<String>,
    /// Stop as soon as this vertex is visited
    #[arg(long)]
    pub stop: Option<String>,
}

#[derive(Args)]
pub struct DijkstraArgs {
    #[arg(long)]
    pub start: String,
    /// Use a plain FIFO queue instead of a priority queue
    #[arg(long)]
    pub fifo: bool,
}

#[derive(Args)]
pub struct MstArgs {
    /// Spanning tree algorithm (defaults to the configured one)
    #[arg(long, value_enum)]
    pub algorithm: Option<MstArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Dfs,
    Bfs,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Dfs => Strategy::DepthFirst,
            StrategyArg::Bfs => Strategy::BreadthFirst,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MstArg {
    Kruskal,
    Prim,
}

impl From<MstArg> for MstAlgorithm {
    fn from(arg: MstArg) -> Self {
        match arg {
            MstArg::Kruskal => MstAlgorithm::Kruskal,
            MstArg::Prim => MstAlgorithm::Prim,
        }
    }
}
