//! Temporarily disabled edges, consulted by every path search.
//!
//! Keys are canonicalised to `(constellation, min(a, b), max(a, b))` so the
//! two directions of an undirected edge share one entry. The registry is
//! mutated by the editor collaborator and only read here; planners take a
//! [`BlockedEdges::snapshot`] at search entry so a toggle landing mid-search
//! cannot be observed half-applied.

use std::collections::HashSet;

use crate::universe::{ConstellationId, StarId};

type EdgeKey = (ConstellationId, StarId, StarId);

fn canonical(constellation: ConstellationId, a: StarId, b: StarId) -> EdgeKey {
    (constellation, a.min(b), b.max(a))
}

/// Mutable set of blocked edges for the session.
#[derive(Debug, Clone, Default)]
pub struct BlockedEdges {
    keys: HashSet<EdgeKey>,
}

impl BlockedEdges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block the edge if it is clear, clear it if it is blocked.
    ///
    /// Returns the new blocked state. Toggling twice restores the original
    /// state. Changes only affect future planning calls; a transit already
    /// in progress is never interrupted.
    pub fn toggle(&mut self, constellation: ConstellationId, a: StarId, b: StarId) -> bool {
        let key = canonical(constellation, a, b);
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn is_blocked(&self, constellation: ConstellationId, a: StarId, b: StarId) -> bool {
        self.keys.contains(&canonical(constellation, a, b))
    }

    /// Copy of the current blocked set, taken by planners at search entry.
    pub fn snapshot(&self) -> BlockedEdges {
        self.clone()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
