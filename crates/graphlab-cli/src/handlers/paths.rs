use graphlab_core::algorithms::{self, QueueDiscipline};
use serde::Serialize;

use crate::cli::DijkstraArgs;
use crate::context::CliContext;
use crate::output;

#[derive(Serialize)]
struct DistanceView {
    vertex: String,
    /// `None` when unreachable; JSON has no infinity
    distance: Option<f64>,
    previous: Option<String>,
    path: Option<Vec<String>>,
}

#[derive(Serialize)]
struct DijkstraReport {
    source: String,
    queue: QueueDiscipline,
    order: Vec<String>,
    vertices: Vec<DistanceView>,
}

pub fn handle(ctx: &CliContext, args: DijkstraArgs) -> anyhow::Result<()> {
    let start = ctx.resolve(&args.start)?;
    let queue = if args.fifo {
        QueueDiscipline::Fifo
    } else {
        ctx.config.dijkstra_queue
    };

    let paths = algorithms::dijkstra_with(&ctx.graph, start, queue, |vertex| {
        tracing::debug!("Finalized {}", ctx.name(vertex));
    })?;

    let vertices = ctx
        .graph
        .vertices()
        .iter()
        .map(|vertex| DistanceView {
            vertex: vertex.name().to_string(),
            distance: paths.distance(vertex.id()).filter(|d| d.is_finite()),
            previous: paths.predecessor(vertex.id()).map(|id| ctx.name(id)),
            path: paths.path_to(vertex.id()).map(|ids| ctx.names(&ids)),
        })
        .collect();

    output::output_success(DijkstraReport {
        source: ctx.name(paths.source()),
        queue,
        order: ctx.names(paths.order()),
        vertices,
    });
    Ok(())
}
