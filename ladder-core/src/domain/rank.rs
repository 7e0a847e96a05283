//! Rank — a validated ladder position.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from rank construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("rank must be a positive integer, got {0}")]
    NotPositive(i64),

    #[error("rank {0} exceeds the supported ladder size")]
    OutOfRange(i64),
}

/// Ladder position. 1 is the top of the ladder; larger numbers are further down.
///
/// The inner value is always >= 1. Construct through [`Rank::new`] or
/// `TryFrom<i64>`; deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Rank(u32);

impl Rank {
    /// The top of the ladder.
    pub const TOP: Rank = Rank(1);

    /// Validate a raw integer into a rank.
    pub fn new(value: i64) -> Result<Self, RankError> {
        if value < 1 {
            return Err(RankError::NotPositive(value));
        }
        u32::try_from(value)
            .map(Rank)
            .map_err(|_| RankError::OutOfRange(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_top(self) -> bool {
        self.0 == 1
    }

    /// Build a rank from a value the transition rule produced.
    ///
    /// Callers guarantee `value >= 1` and `value <= u32::MAX`; every rule output
    /// is bounded above by its input rank.
    pub(crate) fn from_rule(value: u64) -> Self {
        debug_assert!(value >= 1, "transition produced non-positive rank {value}");
        debug_assert!(value <= u64::from(u32::MAX));
        Rank(value as u32)
    }
}

impl TryFrom<i64> for Rank {
    type Error = RankError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl From<Rank> for u32 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl From<Rank> for i64 {
    fn from(rank: Rank) -> Self {
        i64::from(rank.0)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
