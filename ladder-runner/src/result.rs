//! Strategy results — the `(strategy, battle_count, route)` payload returned to callers.
//!
//! Each planner strategy is wrapped in a [`RouteResult`] whose battle count is
//! derived from the route at construction. [`routes`] is the default answer
//! when no strategy is requested: the fastest route plus the compromise route,
//! with the compromise dropped when it is the same route.

use std::fmt;
use std::str::FromStr;

use ladder_core::{plan_compromise, plan_fastest, plan_slowest, PlanError, Route};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Route-selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteStrategy {
    /// Fewest battles.
    Optimal,
    /// Same battle count as `Optimal`, smallest jump at each step.
    Compromise,
    /// Most battles.
    MaxBattles,
}

impl RouteStrategy {
    pub const ALL: [RouteStrategy; 3] = [Self::Optimal, Self::Compromise, Self::MaxBattles];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::Compromise => "Compromise",
            Self::MaxBattles => "MaxBattles",
        }
    }
}

impl fmt::Display for RouteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RouteStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "optimal" => Ok(Self::Optimal),
            "compromise" => Ok(Self::Compromise),
            "maxbattles" => Ok(Self::MaxBattles),
            _ => Err(format!(
                "unknown strategy '{s}'. Valid: optimal, compromise, max-battles"
            )),
        }
    }
}

/// One planned route with its strategy and battle count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub strategy: RouteStrategy,
    pub battle_count: usize,
    pub route: Route,
}

impl RouteResult {
    pub fn new(strategy: RouteStrategy, route: Route) -> Self {
        Self {
            strategy,
            battle_count: route.battle_count(),
            route,
        }
    }
}

pub fn optimal(rank: i64) -> Result<RouteResult, PlanError> {
    plan(RouteStrategy::Optimal, rank)
}

pub fn compromise(rank: i64) -> Result<RouteResult, PlanError> {
    plan(RouteStrategy::Compromise, rank)
}

pub fn max_battles(rank: i64) -> Result<RouteResult, PlanError> {
    plan(RouteStrategy::MaxBattles, rank)
}

/// Plan a single strategy from `rank`.
pub fn plan(strategy: RouteStrategy, rank: i64) -> Result<RouteResult, PlanError> {
    let route = match strategy {
        RouteStrategy::Optimal => plan_fastest(rank)?,
        RouteStrategy::Compromise => plan_compromise(rank, None)?,
        RouteStrategy::MaxBattles => plan_slowest(rank)?,
    };
    let result = RouteResult::new(strategy, route);
    debug!(rank, strategy = %strategy, battle_count = result.battle_count, "planned route");
    Ok(result)
}

/// Fastest route plus compromise route from `rank`.
///
/// The compromise search reuses the fastest route. The compromise result is
/// omitted when its route is identical to the fastest route, so the output has
/// one or two entries, `Optimal` first.
pub fn routes(rank: i64) -> Result<Vec<RouteResult>, PlanError> {
    let fastest = plan_fastest(rank)?;
    let compromise = plan_compromise(rank, Some(&fastest))?;

    let mut results = Vec::with_capacity(2);
    let same = compromise == fastest;
    results.push(RouteResult::new(RouteStrategy::Optimal, fastest));
    if !same {
        results.push(RouteResult::new(RouteStrategy::Compromise, compromise));
    }
    debug!(rank, results = results.len(), "bundled routes");
    Ok(results)
}
