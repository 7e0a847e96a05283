//! Ladder CLI — arena route planning commands.
//!
//! Commands:
//! - `routes` — fastest route plus the compromise route (when it differs)
//! - `optimal` — fastest route only
//! - `compromise` — compromise route only
//! - `max-battles` — slowest route
//! - `sweep` — every requested strategy over a range of starting ranks
//!
//! Results are written to stdout as JSON (CSV is available for sweeps).
//! Logs go to stderr only, filtered by `RUST_LOG` (default `warn`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ladder_runner::{
    export_json, export_json_pretty, export_sweep_csv, plan, routes, run_sweep, RouteStrategy,
    SweepConfig, SweepResults,
};

#[derive(Parser)]
#[command(
    name = "ladder",
    version,
    about = "Ladder — arena route planner: ranks visited on the way to #1"
)]
struct Cli {
    /// Pretty-print JSON output.
    #[arg(long, global = true, default_value_t = false)]
    pretty: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fastest route plus the compromise route with the same battle count.
    Routes {
        /// Starting rank.
        #[arg(allow_negative_numbers = true)]
        rank: i64,
    },
    /// Fastest route (fewest battles).
    Optimal {
        /// Starting rank.
        #[arg(allow_negative_numbers = true)]
        rank: i64,
    },
    /// Same battle count as the fastest route, smallest jump each battle.
    Compromise {
        /// Starting rank.
        #[arg(allow_negative_numbers = true)]
        rank: i64,
    },
    /// Slowest route (most battles).
    MaxBattles {
        /// Starting rank.
        #[arg(allow_negative_numbers = true)]
        rank: i64,
    },
    /// Plan every strategy over a range of starting ranks.
    Sweep {
        /// First starting rank (inclusive).
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        from: i64,

        /// Last starting rank (inclusive).
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        to: i64,

        /// Strategies to include: optimal, compromise, max-battles. Defaults to all.
        #[arg(long = "strategy", value_parser = parse_strategy)]
        strategies: Vec<RouteStrategy>,

        /// Run on a single thread.
        #[arg(long, default_value_t = false)]
        sequential: bool,

        /// Output format.
        #[arg(long, value_enum, default_value_t = SweepFormat::Json)]
        format: SweepFormat,

        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SweepFormat {
    Json,
    Csv,
}

fn parse_strategy(s: &str) -> Result<RouteStrategy, String> {
    s.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Routes { rank } => print_json(&routes(rank)?, cli.pretty),
        Commands::Optimal { rank } => print_json(&plan(RouteStrategy::Optimal, rank)?, cli.pretty),
        Commands::Compromise { rank } => {
            print_json(&plan(RouteStrategy::Compromise, rank)?, cli.pretty)
        }
        Commands::MaxBattles { rank } => {
            print_json(&plan(RouteStrategy::MaxBattles, rank)?, cli.pretty)
        }
        Commands::Sweep {
            from,
            to,
            strategies,
            sequential,
            format,
            output,
        } => run_sweep_cmd(
            sweep_config(from, to, strategies, sequential),
            format,
            output,
            cli.pretty,
        ),
    }
}

/// Log to stderr so stdout carries nothing but the result payload.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn sweep_config(
    from: i64,
    to: i64,
    strategies: Vec<RouteStrategy>,
    sequential: bool,
) -> SweepConfig {
    SweepConfig {
        start: from,
        end: to,
        strategies: if strategies.is_empty() {
            RouteStrategy::ALL.to_vec()
        } else {
            strategies
        },
        parallel: !sequential,
    }
}

fn render_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        export_json_pretty(value)
    } else {
        export_json(value)
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    println!("{}", render_json(value, pretty)?);
    Ok(())
}

/// Sweep payload in the requested format, always newline-terminated.
fn render_sweep(results: &SweepResults, format: SweepFormat, pretty: bool) -> Result<String> {
    match format {
        SweepFormat::Json => Ok(render_json(results.rows(), pretty)? + "\n"),
        SweepFormat::Csv => export_sweep_csv(results),
    }
}

fn run_sweep_cmd(
    config: SweepConfig,
    format: SweepFormat,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    debug!(?config, ?format, "starting sweep");
    let results = run_sweep(&config)?;

    let rendered = render_sweep(&results, format, pretty)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("failed to write sweep output {}", path.display()))?;
            info!(path = %path.display(), rows = results.len(), "sweep written");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
