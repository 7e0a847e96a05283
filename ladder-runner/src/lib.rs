//! Ladder Runner — strategy results, route bundling, sweeps, export.
//!
//! This crate builds on `ladder-core` to provide:
//! - Per-strategy route results with derived battle counts
//! - The default optimal + compromise bundle
//! - Rank sweeps over a range, optionally parallel
//! - JSON and CSV export

pub mod export;
pub mod result;
pub mod sweep;

pub use export::{export_json, export_json_pretty, export_sweep_csv, import_results_json};
pub use result::{compromise, max_battles, optimal, plan, routes, RouteResult, RouteStrategy};
pub use sweep::{run_sweep, SweepConfig, SweepError, SweepResults, SweepRow};
