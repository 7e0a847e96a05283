//! Route — an ordered sequence of ranks from a start down to the top.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rank::Rank;

/// Ordered ranks visited on the way to rank 1, start included.
///
/// Routes produced by the planner are never empty and always end at
/// [`Rank::TOP`]. A route built by a caller (for example a precomputed
/// fastest route handed back to the compromise search) is only checked where
/// it is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(Vec<Rank>);

impl Route {
    pub fn new(ranks: Vec<Rank>) -> Self {
        Self(ranks)
    }

    /// First rank of the route, if any.
    pub fn start(&self) -> Option<Rank> {
        self.0.first().copied()
    }

    /// Last rank of the route, if any.
    pub fn end(&self) -> Option<Rank> {
        self.0.last().copied()
    }

    /// Number of challenges along the route (`len - 1`, zero for an empty route).
    pub fn battle_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rank> {
        self.0.iter()
    }

    /// Adjacent `(from, to)` pairs, one per challenge.
    pub fn steps(&self) -> impl Iterator<Item = (Rank, Rank)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Raw integer values, convenient for comparisons against literal vectors.
    pub fn to_vec(&self) -> Vec<u32> {
        self.0.iter().map(|r| r.get()).collect()
    }

    pub fn into_inner(self) -> Vec<Rank> {
        self.0
    }

    pub(crate) fn push(&mut self, rank: Rank) {
        self.0.push(rank);
    }
}

impl From<Vec<Rank>> for Route {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks)
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Rank;
    type IntoIter = std::slice::Iter<'a, Rank>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Route {
    /// Renders as `100 > 70 > 49 > ... > 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for rank in &self.0 {
            if !first {
                write!(f, " > ")?;
            }
            write!(f, "{rank}")?;
            first = false;
        }
        Ok(())
    }
}
