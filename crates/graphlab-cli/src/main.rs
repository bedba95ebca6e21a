mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use graphlab_core::EngineConfig;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("GRAPHLAB_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "graphlab", &mut std::io::stdout());
        return Ok(());
    }

    if let Err(e) = run(cli) {
        output::output_error(&format!("{:#}", e));
    }

    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = EngineConfig::load();
    let ctx = CliContext::build(&cli.vertices, &cli.edges, config)?;

    match cli.command {
        Commands::Stats => handlers::stats::handle(&ctx)?,
        Commands::Search(args) => handlers::search::handle(&ctx, args)?,
        Commands::Components => handlers::structure::handle_components(&ctx)?,
        Commands::Bipartite => handlers::structure::handle_bipartite(&ctx)?,
        Commands::Dijkstra(args) => handlers::paths::handle(&ctx, args)?,
        Commands::Mst(args) => handlers::tree::handle(&ctx, args)?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
