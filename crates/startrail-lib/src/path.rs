//! Search algorithms over a single constellation.
//!
//! Two searches are provided: classic Dijkstra for minimum total weight, and
//! a budgeted maximum-coverage search that finds the simple path visiting the
//! most distinct stars without spending more travel distance than the
//! traveler's remaining life budget. Both skip edges present in the blocking
//! registry and neither mutates graph state.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::blocking::BlockedEdges;
use crate::universe::{Constellation, StarId};

/// Largest constellation the exact (memoized) coverage search will attempt.
/// Beyond this the state space makes exhaustive search impractical and the
/// time-boxed variant runs instead.
pub const EXACT_NODE_LIMIT: usize = 26;

/// Wall-clock cutoff for the time-boxed coverage search.
pub const COVERAGE_TIME_BOX: Duration = Duration::from_millis(800);

/// Result of the maximum-coverage search.
#[derive(Debug, Clone, PartialEq)]
pub struct CoveragePath {
    pub steps: Vec<StarId>,
    pub total_distance: f64,
}

impl CoveragePath {
    pub fn star_count(&self) -> usize {
        self.steps.len()
    }
}

/// Find the minimum-total-weight path between `start` and `goal`, skipping
/// blocked edges.
///
/// Ties are broken deterministically by the heap ordering (lower star id
/// first at equal cost). Returns `None` when the goal is unreachable and
/// `[start]` when `start == goal`.
pub fn find_route_min_cost(
    constellation: &Constellation,
    blocked: &BlockedEdges,
    start: StarId,
    goal: StarId,
) -> Option<Vec<StarId>> {
    constellation.star(start)?;
    constellation.star(goal)?;
    if start == goal {
        return Some(vec![start]);
    }

    let mut distances: HashMap<StarId, f64> = HashMap::new();
    let mut parents: HashMap<StarId, Option<StarId>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let Some(&best_known) = distances.get(&entry.node) else {
            continue;
        };
        if entry.cost.0 > best_known {
            continue;
        }

        if entry.node == goal {
            return Some(reconstruct_path(&parents, start, goal));
        }

        for (next, weight) in constellation.neighbours(entry.node) {
            if blocked.is_blocked(constellation.id, entry.node, next) {
                continue;
            }

            let next_cost = best_known + weight;
            if next_cost < *distances.get(&next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, Some(entry.node));
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    None
}

/// Total weight along a step sequence, if every edge exists.
pub fn route_distance(constellation: &Constellation, steps: &[StarId]) -> Option<f64> {
    let mut total = 0.0;
    for pair in steps.windows(2) {
        total += constellation.edge_weight(pair[0], pair[1])?;
    }
    Some(total)
}

/// Find the simple path from `start` to `goal` visiting the most distinct
/// stars with total weight within `budget`.
///
/// Equal-coverage candidates are broken by minimum total distance. Uses the
/// default node limit and time box; see
/// [`find_route_max_coverage_with_limits`].
pub fn find_route_max_coverage(
    constellation: &Constellation,
    blocked: &BlockedEdges,
    start: StarId,
    goal: StarId,
    budget: f64,
) -> Option<CoveragePath> {
    find_route_max_coverage_with_limits(
        constellation,
        blocked,
        start,
        goal,
        budget,
        EXACT_NODE_LIMIT,
        COVERAGE_TIME_BOX,
    )
}

/// Maximum-coverage search with explicit limits.
///
/// Depth-first search over simple paths with a per-path visited bitmask.
/// Neighbours expand in ascending edge weight so cheap extensions tighten
/// the incumbent early, and a branch ends as soon as it reaches the goal.
/// Constellations up to `exact_node_limit` stars are searched exhaustively
/// with a memo over `(node, visited mask, budget to hundredths)` states;
/// larger ones run the same search without the memo under `time_budget` and
/// return the best found when the deadline passes. Returns `None` when no
/// path fits the budget (or the constellation exceeds the 128-star mask).
#[allow(clippy::too_many_arguments)]
pub fn find_route_max_coverage_with_limits(
    constellation: &Constellation,
    blocked: &BlockedEdges,
    start: StarId,
    goal: StarId,
    budget: f64,
    exact_node_limit: usize,
    time_budget: Duration,
) -> Option<CoveragePath> {
    constellation.star(start)?;
    constellation.star(goal)?;
    if start == goal {
        return Some(CoveragePath {
            steps: vec![start],
            total_distance: 0.0,
        });
    }
    // An infinite budget means unbounded coverage; only NaN and negative
    // budgets are nonsense.
    if budget.is_nan() || budget < 0.0 {
        return None;
    }

    let ids: Vec<StarId> = constellation.stars().map(|star| star.id).collect();
    let n = ids.len();
    if n > 128 {
        tracing::debug!(stars = n, "constellation too large for coverage mask");
        return None;
    }
    let index: HashMap<StarId, usize> = ids
        .iter()
        .enumerate()
        .map(|(idx, &id)| (id, idx))
        .collect();

    // Per-node expansion lists, blocked edges removed, ascending by weight.
    let adjacency: Vec<Vec<(usize, f64)>> = ids
        .iter()
        .map(|&id| {
            let mut edges: Vec<(usize, f64)> = constellation
                .neighbours(id)
                .filter(|&(next, _)| !blocked.is_blocked(constellation.id, id, next))
                .map(|(next, weight)| (index[&next], weight))
                .collect();
            edges.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
            edges
        })
        .collect();

    let exact = n <= exact_node_limit;
    let mut search = CoverageSearch {
        adjacency: &adjacency,
        goal: index[&goal],
        total_nodes: n,
        budget,
        deadline: (!exact).then(|| Instant::now() + time_budget),
        memo: exact.then(HashSet::new),
        best: None,
        path: Vec::with_capacity(n),
        timed_out: false,
    };

    let start_idx = index[&start];
    search.path.push(start_idx);
    search.dfs(start_idx, 1u128 << start_idx, 0.0);

    if search.timed_out {
        tracing::warn!(
            stars = n,
            "coverage search hit its time box; returning best found so far"
        );
    }

    search.best.map(|best| CoveragePath {
        steps: best.path.into_iter().map(|idx| ids[idx]).collect(),
        total_distance: best.total_distance,
    })
}

struct BestPath {
    path: Vec<usize>,
    total_distance: f64,
}

struct CoverageSearch<'a> {
    adjacency: &'a [Vec<(usize, f64)>],
    goal: usize,
    total_nodes: usize,
    budget: f64,
    deadline: Option<Instant>,
    memo: Option<HashSet<(usize, u128, u64)>>,
    best: Option<BestPath>,
    path: Vec<usize>,
    timed_out: bool,
}

impl CoverageSearch<'_> {
    fn dfs(&mut self, node: usize, visited: u128, spent: f64) {
        if self.timed_out {
            return;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.timed_out = true;
                return;
            }
        }

        if node == self.goal {
            self.consider(spent);
            return;
        }

        // A full-coverage incumbent can only be beaten on distance, and
        // spent never decreases along a branch.
        if let Some(best) = &self.best {
            if best.path.len() >= self.total_nodes && spent >= best.total_distance {
                return;
            }
        }

        if let Some(memo) = &mut self.memo {
            let key = (node, visited, to_hundredths(self.budget - spent));
            if !memo.insert(key) {
                return;
            }
        }

        for idx in 0..self.adjacency[node].len() {
            let (next, weight) = self.adjacency[node][idx];
            if visited & (1u128 << next) != 0 {
                continue;
            }
            // Edges are sorted ascending, so every later edge overshoots too.
            if spent + weight > self.budget {
                break;
            }

            self.path.push(next);
            self.dfs(next, visited | (1u128 << next), spent + weight);
            self.path.pop();
        }
    }

    fn consider(&mut self, spent: f64) {
        let improves = match &self.best {
            None => true,
            Some(best) => {
                self.path.len() > best.path.len()
                    || (self.path.len() == best.path.len() && spent < best.total_distance)
            }
        };
        if improves {
            self.best = Some(BestPath {
                path: self.path.clone(),
                total_distance: spent,
            });
        }
    }
}

fn to_hundredths(value: f64) -> u64 {
    (value * 100.0).round() as u64
}

fn reconstruct_path(
    parents: &HashMap<StarId, Option<StarId>>,
    start: StarId,
    goal: StarId,
) -> Vec<StarId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: StarId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: StarId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
