//! Export — JSON and CSV renderings of planner output.
//!
//! - **JSON**: route results exactly as a tool caller receives them
//! - **CSV**: sweep tables for spreadsheets, one row per `(rank, strategy)`

use anyhow::{Context, Result};
use serde::Serialize;

use crate::result::RouteResult;
use crate::sweep::SweepResults;

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize any result payload to compact JSON.
pub fn export_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).context("failed to serialize result to JSON")
}

/// Serialize any result payload to pretty JSON.
pub fn export_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize result to JSON")
}

/// Parse route results back from JSON.
pub fn import_results_json(json: &str) -> Result<Vec<RouteResult>> {
    serde_json::from_str(json).context("failed to deserialize route results from JSON")
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export a sweep as CSV.
///
/// Columns: rank, strategy, battle_count, route. The route column joins ranks
/// with `>` (e.g. `13>9>6>3>1`) so it stays a single field.
pub fn export_sweep_csv(results: &SweepResults) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["rank", "strategy", "battle_count", "route"])?;

    for row in results.rows() {
        let route = row
            .route
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(">");
        let rank = row.rank.to_string();
        let battle_count = row.battle_count.to_string();
        wtr.write_record([
            rank.as_str(),
            row.strategy.name(),
            battle_count.as_str(),
            route.as_str(),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}
