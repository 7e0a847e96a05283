//! Route planner — full routes to rank 1 under each strategy.
//!
//! Three route shapes are built on top of the transition rule:
//! - **Fastest:** fast descent every challenge (fewest battles).
//! - **Slowest:** slow descent every challenge (most battles).
//! - **Compromise:** same battle count as the fastest route, but each step
//!   takes the numerically highest reachable rank that still finishes on time.
//!
//! Integer entry points (`plan_*`, `optimal_battle_count`) validate their input
//! first and never partially apply. Typed entry points take an already
//! validated [`Rank`] and cannot fail except in the compromise search.

use thiserror::Error;

use crate::domain::{Rank, RankError, Route};
use crate::transition::{reachable, Descent, ReachableRanks};

/// Errors from route planning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("invalid rank {0}: rank must be a positive integer")]
    InvalidRank(i64),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The compromise search found no candidate finishing in the required
    /// number of battles. Indicates the transition rule and the search disagree.
    #[error("compromise search found no rank from {rank} that reaches 1 in {remaining} battle(s)")]
    InvariantViolation { rank: Rank, remaining: usize },
}

impl From<RankError> for PlanError {
    fn from(err: RankError) -> Self {
        match err {
            RankError::NotPositive(v) | RankError::OutOfRange(v) => Self::InvalidRank(v),
        }
    }
}

// ── Integer entry points ─────────────────────────────────────────────

/// Fastest route from `start` to rank 1.
pub fn plan_fastest(start: i64) -> Result<Route, PlanError> {
    Ok(fastest_route(Rank::new(start)?))
}

/// Slowest route from `start` to rank 1.
pub fn plan_slowest(start: i64) -> Result<Route, PlanError> {
    Ok(slowest_route(Rank::new(start)?))
}

/// Compromise route from `start` to rank 1.
///
/// When `precomputed` is given it is used as the fastest route instead of
/// recomputing one. It must be non-empty and start at `start`.
pub fn plan_compromise(start: i64, precomputed: Option<&Route>) -> Result<Route, PlanError> {
    let start = Rank::new(start)?;
    match precomputed {
        Some(fastest) => {
            let first = fastest.start().ok_or_else(|| {
                PlanError::InvalidArgument("precomputed fastest route is empty".into())
            })?;
            if first != start {
                return Err(PlanError::InvalidArgument(format!(
                    "precomputed fastest route starts at {first}, expected {start}"
                )));
            }
            compromise_search(start, fastest.battle_count())
        }
        None => compromise_route(start),
    }
}

/// Battles needed to reach rank 1 from `start` on the fastest route.
pub fn optimal_battle_count(start: i64) -> Result<usize, PlanError> {
    Ok(battle_count(Rank::new(start)?))
}

/// Ranks one challenge can reach from `rank`, highest rank value first.
pub fn reachable_ranks(rank: i64) -> Result<ReachableRanks, PlanError> {
    Ok(reachable(Rank::new(rank)?))
}

// ── Typed entry points ───────────────────────────────────────────────

pub fn fastest_route(start: Rank) -> Route {
    materialize(start, Descent::Fast)
}

pub fn slowest_route(start: Rank) -> Route {
    materialize(start, Descent::Slow)
}

pub fn compromise_route(start: Rank) -> Result<Route, PlanError> {
    compromise_search(start, battle_count(start))
}

/// Fastest-route battle count without building the route.
pub fn battle_count(start: Rank) -> usize {
    Descent::Fast.walk(start).count()
}

fn materialize(start: Rank, descent: Descent) -> Route {
    let mut route = Route::new(vec![start]);
    for rank in descent.walk(start) {
        route.push(rank);
    }
    route
}

/// Greedy reconstruction: at every step keep the least aggressive jump whose
/// fastest continuation still uses exactly the remaining battles.
fn compromise_search(start: Rank, total_battles: usize) -> Result<Route, PlanError> {
    let mut route = Route::new(vec![start]);
    if start.is_top() {
        return Ok(route);
    }

    let mut current = start;
    for remaining in (1..total_battles).rev() {
        let next = highest_with_count(&reachable(current), remaining).ok_or(
            PlanError::InvariantViolation {
                rank: current,
                remaining,
            },
        )?;
        route.push(next);
        current = next;
    }

    route.push(Rank::TOP);
    Ok(route)
}

/// Highest rank in `range` whose fastest route takes exactly `remaining` battles.
///
/// Fastest battle counts never decrease as the rank grows, so the ranks with a
/// count of at most `remaining` form a prefix of the range and a bisection
/// finds its last element.
fn highest_with_count(range: &ReachableRanks, remaining: usize) -> Option<Rank> {
    let lower = u64::from(range.lower()?.get());
    let upper = u64::from(range.upper()?.get());

    // Everything below `lo` fits; everything at or above `hi` does not.
    let (mut lo, mut hi) = (lower, upper + 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if battle_count(Rank::from_rule(mid)) <= remaining {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    if lo == lower {
        return None;
    }
    let candidate = Rank::from_rule(lo - 1);
    (battle_count(candidate) == remaining).then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(values: &[i64]) -> Route {
        values
            .iter()
            .map(|&v| Rank::new(v).unwrap())
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn fastest_from_100() {
        let r = plan_fastest(100).unwrap();
        assert_eq!(r.to_vec(), vec![100, 70, 49, 34, 23, 16, 11, 7, 4, 1]);
        assert_eq!(r.battle_count(), 9);
    }

    #[test]
    fn fastest_from_13() {
        assert_eq!(plan_fastest(13).unwrap().to_vec(), vec![13, 9, 6, 3, 1]);
    }

    #[test]
    fn fastest_from_top_is_single_rank() {
        assert_eq!(plan_fastest(1).unwrap().to_vec(), vec![1]);
    }

    #[test]
    fn slowest_from_13() {
        assert_eq!(
            plan_slowest(13).unwrap().to_vec(),
            vec![13, 11, 9, 8, 7, 6, 5, 4, 3, 2, 1]
        );
    }

    #[test]
    fn compromise_from_13_prefers_eleven() {
        assert_eq!(plan_compromise(13, None).unwrap().to_vec(), vec![13, 11, 7, 4, 1]);
    }

    #[test]
    fn compromise_from_100() {
        assert_eq!(
            plan_compromise(100, None).unwrap().to_vec(),
            vec![100, 78, 54, 37, 25, 17, 11, 7, 4, 1]
        );
    }

    #[test]
    fn compromise_reuses_precomputed_route() {
        let fastest = plan_fastest(100).unwrap();
        let with = plan_compromise(100, Some(&fastest)).unwrap();
        let without = plan_compromise(100, None).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn compromise_rejects_empty_precomputed_route() {
        let empty = Route::new(Vec::new());
        let err = plan_compromise(100, Some(&empty)).unwrap_err();
        assert!(matches!(err, PlanError::InvalidArgument(_)));
    }

    #[test]
    fn compromise_rejects_mismatched_precomputed_route() {
        let other = route(&[50, 35, 24, 16, 11, 7, 4, 1]);
        let err = plan_compromise(100, Some(&other)).unwrap_err();
        assert!(matches!(err, PlanError::InvalidArgument(_)));
    }

    #[test]
    fn compromise_at_top_ignores_route_length() {
        let top = route(&[1]);
        assert_eq!(plan_compromise(1, Some(&top)).unwrap().to_vec(), vec![1]);
        assert_eq!(plan_compromise(1, None).unwrap().to_vec(), vec![1]);
    }

    #[test]
    fn short_ranks_go_straight_to_top() {
        for start in 2..=4 {
            assert_eq!(plan_fastest(start).unwrap().to_vec(), vec![start as u32, 1]);
            assert_eq!(plan_compromise(start, None).unwrap().to_vec(), vec![start as u32, 1]);
        }
    }

    #[test]
    fn overlong_precomputed_route_is_an_invariant_violation() {
        let start = Rank::new(100).unwrap();
        let padded = Route::new(vec![start; 30]);
        let err = plan_compromise(100, Some(&padded)).unwrap_err();
        assert_eq!(
            err,
            PlanError::InvariantViolation {
                rank: start,
                remaining: 28,
            }
        );
    }

    #[test]
    fn short_precomputed_route_sets_a_one_battle_target() {
        let short = route(&[100, 1]);
        assert_eq!(
            plan_compromise(100, Some(&short)).unwrap().to_vec(),
            vec![100, 1]
        );
    }

    /// Top-down linear scan of the reachable range, one count per candidate.
    fn scanned_compromise(start: Rank) -> Option<Vec<u32>> {
        let mut ranks = vec![start.get()];
        let mut current = start;
        for remaining in (1..battle_count(start)).rev() {
            current = reachable(current).find(|&c| battle_count(c) == remaining)?;
            ranks.push(current.get());
        }
        if !start.is_top() {
            ranks.push(1);
        }
        Some(ranks)
    }

    #[test]
    fn bisection_matches_linear_scan() {
        for value in 1..=1_500 {
            let start = Rank::new(value).unwrap();
            assert_eq!(
                Some(compromise_route(start).unwrap().to_vec()),
                scanned_compromise(start),
                "rank {value}"
            );
        }
    }

    #[test]
    fn compromise_handles_largest_ranks() {
        for value in [100_000_000, i64::from(u32::MAX)] {
            let compromise = plan_compromise(value, None).unwrap();
            let fastest = plan_fastest(value).unwrap();
            assert_eq!(compromise.len(), fastest.len());
            assert_eq!(compromise.start(), fastest.start());
            assert_eq!(compromise.end(), Some(Rank::TOP));
            for (from, to) in compromise.steps() {
                assert!(reachable(from).contains(to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn invalid_rank_rejected_everywhere() {
        for bad in [0, -1] {
            assert_eq!(plan_fastest(bad), Err(PlanError::InvalidRank(bad)));
            assert_eq!(plan_slowest(bad), Err(PlanError::InvalidRank(bad)));
            assert_eq!(plan_compromise(bad, None), Err(PlanError::InvalidRank(bad)));
            assert_eq!(optimal_battle_count(bad), Err(PlanError::InvalidRank(bad)));
            assert!(matches!(reachable_ranks(bad), Err(PlanError::InvalidRank(_))));
        }
    }

    #[test]
    fn invalid_rank_checked_before_precomputed_route() {
        let empty = Route::new(Vec::new());
        assert_eq!(plan_compromise(0, Some(&empty)), Err(PlanError::InvalidRank(0)));
    }

    #[test]
    fn battle_counts() {
        assert_eq!(optimal_battle_count(100).unwrap(), 9);
        assert_eq!(optimal_battle_count(13).unwrap(), 4);
        assert_eq!(optimal_battle_count(1).unwrap(), 0);
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(
            PlanError::InvalidRank(0).to_string(),
            "invalid rank 0: rank must be a positive integer"
        );
        let violation = PlanError::InvariantViolation {
            rank: Rank::new(13).unwrap(),
            remaining: 3,
        };
        assert!(violation.to_string().contains("from 13"));
    }
}
