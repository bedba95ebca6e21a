use graphlab_core::algorithms;
use serde::Serialize;

use crate::context::{CliContext, EdgeView};
use crate::output;

#[derive(Serialize)]
struct ComponentView {
    vertices: Vec<String>,
    edges: Vec<EdgeView>,
}

#[derive(Serialize)]
struct BipartiteReport {
    bipartite: bool,
    left: Vec<String>,
    right: Vec<String>,
}

pub fn handle_components(ctx: &CliContext) -> anyhow::Result<()> {
    let components = algorithms::connected_components(&ctx.graph)
        .iter()
        .map(|component| ComponentView {
            vertices: component
                .vertices()
                .iter()
                .map(|v| v.name().to_string())
                .collect(),
            edges: component.edges().iter().map(|e| ctx.edge_view(e)).collect(),
        })
        .collect();
    output::output_list(components);
    Ok(())
}

pub fn handle_bipartite(ctx: &CliContext) -> anyhow::Result<()> {
    let coloring = algorithms::two_coloring(&ctx.graph);
    let (left, right) = coloring.partitions();
    output::output_success(BipartiteReport {
        bipartite: coloring.is_bipartite(),
        left: ctx.names(left),
        right: ctx.names(right),
    });
    Ok(())
}
