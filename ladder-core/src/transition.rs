//! Rank transition rule — which ranks a single challenge can reach.
//!
//! The ladder has four bands, each with its own jump sizes:
//!
//! | Band      | Fast descent     | Slow descent      |
//! |-----------|------------------|-------------------|
//! | 2..=4     | 1                | r - 1             |
//! | 5..=10    | r - 3            | r - 1             |
//! | 11..=13   | r - 4            | r - 2             |
//! | 14..      | floor(r * 0.70)  | floor(r * 0.95)   |
//!
//! Rank 1 is terminal under both policies. A single challenge from `r` can land
//! on any rank in `[fast(r), slow(r)]`.
//!
//! All arithmetic runs in `u64` so the percentage bands never overflow for
//! ranks near `u32::MAX`.

use std::iter::FusedIterator;

use crate::domain::Rank;

/// Next rank under the fast-descent policy (most aggressive jump).
///
/// Returns `None` at rank 1.
pub fn fast_descent(rank: Rank) -> Option<Rank> {
    let r = u64::from(rank.get());
    let next = match r {
        ..=1 => return None,
        2..=4 => 1,
        5..=10 => r - 3,
        11..=13 => r - 4,
        _ => r * 7 / 10,
    };
    Some(Rank::from_rule(next))
}

/// Next rank under the slow-descent policy (least aggressive jump).
///
/// Returns `None` at rank 1.
pub fn slow_descent(rank: Rank) -> Option<Rank> {
    let r = u64::from(rank.get());
    let next = match r {
        ..=1 => return None,
        2..=10 => r - 1,
        11..=13 => r - 2,
        _ => r * 95 / 100,
    };
    Some(Rank::from_rule(next))
}

/// Ranks reachable with one challenge from `rank`.
///
/// Empty at rank 1. Iterates from the numerically highest rank (smallest jump)
/// down to the lowest (largest jump).
pub fn reachable(rank: Rank) -> ReachableRanks {
    match (fast_descent(rank), slow_descent(rank)) {
        (Some(low), Some(high)) => ReachableRanks {
            low: low.get(),
            high: high.get(),
        },
        _ => ReachableRanks::empty(),
    }
}

/// Closed interval of reachable ranks, consumed from the top (highest rank value) down.
///
/// `lower`/`upper` describe what is still left to yield; iterating from the
/// back walks upward from the most aggressive jump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachableRanks {
    low: u32,
    high: u32,
}

impl ReachableRanks {
    fn empty() -> Self {
        Self { low: 1, high: 0 }
    }

    /// Numerically lowest remaining rank (the most aggressive jump).
    pub fn lower(&self) -> Option<Rank> {
        (!self.is_exhausted()).then(|| Rank::from_rule(u64::from(self.low)))
    }

    /// Numerically highest remaining rank (the least aggressive jump).
    pub fn upper(&self) -> Option<Rank> {
        (!self.is_exhausted()).then(|| Rank::from_rule(u64::from(self.high)))
    }

    pub fn contains(&self, rank: Rank) -> bool {
        (self.low..=self.high).contains(&rank.get())
    }

    /// Nothing left to yield. Also true for the range from rank 1.
    pub fn is_exhausted(&self) -> bool {
        self.low > self.high
    }
}

impl Iterator for ReachableRanks {
    type Item = Rank;

    fn next(&mut self) -> Option<Rank> {
        if self.is_exhausted() {
            return None;
        }
        let rank = Rank::from_rule(u64::from(self.high));
        self.high -= 1;
        Some(rank)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.is_exhausted() {
            0
        } else {
            (self.high - self.low) as usize + 1
        };
        (len, Some(len))
    }
}

impl DoubleEndedIterator for ReachableRanks {
    fn next_back(&mut self) -> Option<Rank> {
        if self.is_exhausted() {
            return None;
        }
        let rank = Rank::from_rule(u64::from(self.low));
        // high < u32::MAX for every non-empty range, so this cannot overflow
        self.low += 1;
        Some(rank)
    }
}

impl ExactSizeIterator for ReachableRanks {}
impl FusedIterator for ReachableRanks {}

/// Jump policy used to walk a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Descent {
    /// Largest legal jump every challenge.
    Fast,
    /// Smallest legal jump every challenge.
    Slow,
}

impl Descent {
    pub fn next(self, rank: Rank) -> Option<Rank> {
        match self {
            Self::Fast => fast_descent(rank),
            Self::Slow => slow_descent(rank),
        }
    }

    /// Lazily walk from `start` to rank 1.
    ///
    /// The walk yields each rank *after* `start`; the start itself is not
    /// repeated. A clone continues from the same position.
    pub fn walk(self, start: Rank) -> RouteWalk {
        RouteWalk {
            descent: self,
            current: start,
        }
    }
}

/// Lazy sequence of ranks visited by repeatedly applying a [`Descent`].
#[derive(Debug, Clone)]
pub struct RouteWalk {
    descent: Descent,
    current: Rank,
}

impl RouteWalk {
    /// Rank most recently yielded (or the start, before the first call).
    pub fn current(&self) -> Rank {
        self.current
    }
}

impl Iterator for RouteWalk {
    type Item = Rank;

    fn next(&mut self) -> Option<Rank> {
        let next = self.descent.next(self.current)?;
        debug_assert!(next < self.current, "descent must strictly improve rank");
        self.current = next;
        Some(next)
    }
}

impl FusedIterator for RouteWalk {}
