use graphlab_core::algorithms::{self, MstAlgorithm};
use serde::Serialize;

use crate::cli::MstArgs;
use crate::context::{CliContext, EdgeView};
use crate::output;

#[derive(Serialize)]
struct SpanningTreeReport {
    algorithm: MstAlgorithm,
    total_weight: f64,
    vertices: Vec<String>,
    edges: Vec<EdgeView>,
}

pub fn handle(ctx: &CliContext, args: MstArgs) -> anyhow::Result<()> {
    let algorithm = args
        .algorithm
        .map(MstAlgorithm::from)
        .unwrap_or(ctx.config.mst_algorithm);
    let tree = algorithms::minimum_spanning_tree(&ctx.graph, algorithm)?;

    output::output_success(SpanningTreeReport {
        algorithm,
        total_weight: tree.total_weight(),
        vertices: tree
            .graph()
            .vertices()
            .iter()
            .map(|v| v.name().to_string())
            .collect(),
        edges: tree.edges().iter().map(|e| ctx.edge_view(e)).collect(),
    });
    Ok(())
}
