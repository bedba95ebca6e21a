use chrono::{DateTime, Utc};
use graphlab_core::algorithms::{self, Strategy};
use graphlab_core::{Loggable, VisitLog};
use serde::Serialize;

use crate::cli::SearchArgs;
use crate::context::CliContext;
use crate::output;

#[derive(Serialize)]
struct VisitView {
    step: usize,
    vertex: String,
    timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
struct SearchReport {
    strategy: Strategy,
    found: Option<String>,
    visited: Vec<String>,
    visits: Vec<VisitView>,
}

pub fn handle(ctx: &CliContext, args: SearchArgs) -> anyhow::Result<()> {
    let strategy = args.strategy.map(Strategy::from).unwrap_or(ctx.config.strategy);
    let start = args.start.as_deref().map(|name| ctx.resolve(name)).transpose()?;
    let target = args.stop.as_deref().map(|name| ctx.resolve(name)).transpose()?;

    let mut log = VisitLog::new();
    let outcome = algorithms::search(
        &ctx.graph,
        start,
        strategy,
        |vertex| log.record_visit(vertex),
        |vertex| Some(vertex) == target,
    )?;

    let report = SearchReport {
        strategy,
        found: outcome.found.map(|id| ctx.name(id)),
        visited: ctx.names(&outcome.visited),
        visits: log
            .visits()
            .iter()
            .map(|entry| VisitView {
                step: entry.step,
                vertex: ctx.name(entry.vertex),
                timestamp: entry.timestamp,
            })
            .collect(),
    };
    output::output_success(report);
    Ok(())
}
