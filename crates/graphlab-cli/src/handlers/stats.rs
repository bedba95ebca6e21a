use crate::context::CliContext;
use crate::output;
use serde::Serialize;

#[derive(Serialize)]
struct GraphStats {
    vertices: usize,
    edges: usize,
    total_degree: usize,
    degree_sequence: Vec<usize>,
    total_weight: f64,
    adjacency: Vec<String>,
}

pub fn handle(ctx: &CliContext) -> anyhow::Result<()> {
    let graph = &ctx.graph;
    let stats = GraphStats {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        total_degree: graph.total_degree(),
        degree_sequence: graph.degree_sequence(),
        total_weight: graph.total_weight(),
        adjacency: graph.to_string().lines().map(str::to_string).collect(),
    };
    output::output_success(stats);
    Ok(())
}
