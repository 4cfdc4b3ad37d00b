use crate::analysis::components::summarize_components;
use crate::config::{GeneratorConfig, Layout, TimeWindow};
use crate::export::csv::{ExportStats, write_side};
use crate::generate::generate_fixture;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "idgraph-fixtures",
    about = "Generate random identity graph fixtures as CSV files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write independently sampled host and client graphs with timestamps.
    Paired(PairedArgs),
    /// Write one graph without timestamps.
    Single(SingleArgs),
}

#[derive(Debug, Args)]
pub struct PairedArgs {
    /// Values synthesized per entity class before deduplication.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub node_num: usize,

    /// Sampling ratio and edge inclusion probability.
    #[arg(short = 'p', long, default_value_t = 0.7)]
    pub prob: f64,

    /// Directory for host csv files.
    #[arg(long, default_value = "./data1")]
    pub host_dir: PathBuf,

    /// Directory for client csv files.
    #[arg(long, default_value = "./data2")]
    pub client_dir: PathBuf,

    /// Earliest row timestamp, YYYY-MM-DDTHH:MM:SS.
    #[arg(long)]
    pub start_time: String,

    /// Latest row timestamp, YYYY-MM-DDTHH:MM:SS.
    #[arg(long)]
    pub end_time: String,

    /// Seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args)]
pub struct SingleArgs {
    #[arg(short = 'n', long, default_value_t = 10)]
    pub node_num: usize,

    #[arg(short = 'p', long, default_value_t = 0.5)]
    pub prob: f64,

    /// Directory for csv files.
    #[arg(short = 'd', long, default_value = "./data")]
    pub dir: PathBuf,

    #[arg(long)]
    pub seed: Option<u64>,
}

/// Totals over every exported directory.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub seed: u64,
    pub files: usize,
    pub rows: usize,
}

pub fn run(cli: Cli) -> anyhow::Result<RunSummary> {
    match cli.command {
        Command::Paired(args) => {
            let cfg = GeneratorConfig::new(args.node_num, args.prob, Layout::Paired)?;
            let window = TimeWindow::parse(&args.start_time, &args.end_time)?;
            execute(
                &cfg,
                args.seed,
                &[args.host_dir, args.client_dir],
                Some(&window),
            )
        }
        Command::Single(args) => {
            let cfg = GeneratorConfig::new(args.node_num, args.prob, Layout::Single)?;
            execute(&cfg, args.seed, &[args.dir], None)
        }
    }
}

/// Generates one fixture and writes its sides to `dirs` in host, client
/// order.
fn execute(
    cfg: &GeneratorConfig,
    seed: Option<u64>,
    dirs: &[PathBuf],
    window: Option<&TimeWindow>,
) -> anyhow::Result<RunSummary> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(seed, node_num = cfg.node_num, prob = cfg.prob, "generating fixture");
    let mut rng = StdRng::seed_from_u64(seed);

    let fixture = generate_fixture(cfg, &mut rng);

    let mut summary = RunSummary {
        seed,
        ..RunSummary::default()
    };
    for (side, dir) in fixture.sides().zip(dirs) {
        let components = summarize_components(&side.graph);
        tracing::info!(
            side = %side.side,
            components = components.components,
            isolated = components.isolated,
            largest = components.largest,
            "graph connectivity"
        );

        let ExportStats { files, rows } = write_side(dir, side, window, &mut rng)
            .with_context(|| format!("failed to export {} side", side.side))?;
        summary.files += files;
        summary.rows += rows;
    }

    tracing::info!(files = summary.files, rows = summary.rows, "export finished");
    anyhow::Ok(summary)
}
