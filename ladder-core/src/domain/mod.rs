//! Domain types for the ladder planner

pub mod rank;
pub mod route;

pub use rank::{Rank, RankError};
pub use route::Route;
