//! Ladder Core — rank types, transition rule, route planner.
//!
//! This crate contains the arena ladder arithmetic:
//! - Domain types (ranks, routes)
//! - Rank transition rule (fast/slow descent, reachable ranges)
//! - Route planner (fastest, compromise, slowest routes and battle counts)
//!
//! Everything here is a pure function of its inputs: no I/O, no logging, no
//! shared state.

pub mod domain;
pub mod planner;
pub mod transition;

pub use domain::{Rank, RankError, Route};
pub use planner::{
    battle_count, compromise_route, fastest_route, optimal_battle_count, plan_compromise,
    plan_fastest, plan_slowest, reachable_ranks, slowest_route, PlanError,
};
pub use transition::{fast_descent, reachable, slow_descent, Descent, ReachableRanks, RouteWalk};
