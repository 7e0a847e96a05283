//! Rank sweeps — evaluate strategies over a contiguous range of starting ranks.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use ladder_core::{PlanError, Route};

use crate::result::{plan, RouteStrategy};

/// Errors from sweep configuration or execution.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("sweep start rank must be at least 1, got {0}")]
    InvalidStart(i64),

    #[error("sweep range is empty: start {start} > end {end}")]
    EmptyRange { start: i64, end: i64 },

    #[error("sweep needs at least one strategy")]
    NoStrategies,

    #[error("planning failed: {0}")]
    Plan(#[from] PlanError),
}

/// Which ranks and strategies to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// First starting rank (inclusive).
    pub start: i64,
    /// Last starting rank (inclusive).
    pub end: i64,
    /// Strategies to plan for every rank, in output order.
    pub strategies: Vec<RouteStrategy>,
    /// Fan out over ranks with rayon.
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: 1,
            end: 100,
            strategies: RouteStrategy::ALL.to_vec(),
            parallel: true,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.start < 1 {
            return Err(SweepError::InvalidStart(self.start));
        }
        if self.start > self.end {
            return Err(SweepError::EmptyRange {
                start: self.start,
                end: self.end,
            });
        }
        if self.strategies.is_empty() {
            return Err(SweepError::NoStrategies);
        }
        Ok(())
    }

    /// Number of rows a sweep with this config produces; 0 when it is invalid.
    pub fn size(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        // start >= 1 here, so the span cannot overflow
        let ranks = usize::try_from(self.end - self.start + 1).unwrap_or(usize::MAX);
        ranks.saturating_mul(self.strategies.len())
    }
}

/// One `(rank, strategy)` cell of a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepRow {
    pub rank: i64,
    pub strategy: RouteStrategy,
    pub battle_count: usize,
    pub route: Route,
}

/// Run a sweep. Rows are ordered by rank, then by the configured strategy order,
/// regardless of whether the sweep ran in parallel.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepResults, SweepError> {
    config.validate()?;

    let plan_rank = |rank: i64| -> Result<Vec<SweepRow>, PlanError> {
        config
            .strategies
            .iter()
            .map(|&strategy| -> Result<SweepRow, PlanError> {
                let result = plan(strategy, rank)?;
                Ok(SweepRow {
                    rank,
                    strategy,
                    battle_count: result.battle_count,
                    route: result.route,
                })
            })
            .collect()
    };

    let per_rank: Vec<Vec<SweepRow>> = if config.parallel {
        (config.start..=config.end)
            .into_par_iter()
            .map(plan_rank)
            .collect::<Result<Vec<_>, _>>()?
    } else {
        (config.start..=config.end)
            .map(plan_rank)
            .collect::<Result<Vec<_>, _>>()?
    };

    let rows: Vec<SweepRow> = per_rank.into_iter().flatten().collect();
    info!(
        start = config.start,
        end = config.end,
        rows = rows.len(),
        parallel = config.parallel,
        "sweep complete"
    );
    Ok(SweepResults { rows })
}

/// Rows produced by [`run_sweep`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepResults {
    rows: Vec<SweepRow>,
}

impl SweepResults {
    pub fn rows(&self) -> &[SweepRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows planned from `rank`.
    pub fn for_rank(&self, rank: i64) -> impl Iterator<Item = &SweepRow> {
        self.rows.iter().filter(move |row| row.rank == rank)
    }

    /// Largest battle count seen for `strategy`, if it was swept.
    pub fn max_battle_count(&self, strategy: RouteStrategy) -> Option<usize> {
        self.rows
            .iter()
            .filter(|row| row.strategy == strategy)
            .map(|row| row.battle_count)
            .max()
    }
}
