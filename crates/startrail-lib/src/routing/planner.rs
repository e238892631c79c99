//! Route planning strategies.
//!
//! Each objective is encapsulated in its own planner struct behind the
//! [`RoutePlanner`] trait, so new objectives can be added without touching
//! the `plan_route` orchestrator.

use std::time::Duration;

use crate::blocking::BlockedEdges;
use crate::path::{
    find_route_max_coverage_with_limits, find_route_min_cost, route_distance, COVERAGE_TIME_BOX,
    EXACT_NODE_LIMIT,
};
use crate::universe::{Constellation, StarId};

use super::RouteObjective;

/// Steps and total weight produced by a planner.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFound {
    pub steps: Vec<StarId>,
    pub total_distance: f64,
}

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The objective this planner optimises for.
    fn objective(&self) -> RouteObjective;

    /// Execute the search on the given constellation.
    ///
    /// Returns `Some` when a route satisfying the objective exists, `None`
    /// otherwise. The blocking registry passed in is expected to be a
    /// snapshot taken by the caller.
    fn find_path(
        &self,
        constellation: &Constellation,
        blocked: &BlockedEdges,
        start: StarId,
        goal: StarId,
        budget: Option<f64>,
    ) -> Option<PathFound>;
}

/// Minimum-total-weight planner (Dijkstra).
#[derive(Debug, Clone, Default)]
pub struct MinCostPlanner;

impl RoutePlanner for MinCostPlanner {
    fn objective(&self) -> RouteObjective {
        RouteObjective::MinCost
    }

    fn find_path(
        &self,
        constellation: &Constellation,
        blocked: &BlockedEdges,
        start: StarId,
        goal: StarId,
        _budget: Option<f64>,
    ) -> Option<PathFound> {
        let steps = find_route_min_cost(constellation, blocked, start, goal)?;
        let total_distance = route_distance(constellation, &steps)?;
        Some(PathFound {
            steps,
            total_distance,
        })
    }
}

/// Maximum-coverage planner: most distinct stars within the travel budget,
/// ties broken by minimum total distance.
#[derive(Debug, Clone)]
pub struct MaxStarsPlanner {
    /// Star count above which the time-boxed search variant runs.
    pub exact_node_limit: usize,
    /// Wall-clock cutoff for the time-boxed variant.
    pub time_budget: Duration,
}

impl Default for MaxStarsPlanner {
    fn default() -> Self {
        Self {
            exact_node_limit: EXACT_NODE_LIMIT,
            time_budget: COVERAGE_TIME_BOX,
        }
    }
}

impl RoutePlanner for MaxStarsPlanner {
    fn objective(&self) -> RouteObjective {
        RouteObjective::MaxStars
    }

    fn find_path(
        &self,
        constellation: &Constellation,
        blocked: &BlockedEdges,
        start: StarId,
        goal: StarId,
        budget: Option<f64>,
    ) -> Option<PathFound> {
        let budget = budget.unwrap_or(f64::INFINITY);
        let coverage = find_route_max_coverage_with_limits(
            constellation,
            blocked,
            start,
            goal,
            budget,
            self.exact_node_limit,
            self.time_budget,
        )?;
        Some(PathFound {
            steps: coverage.steps,
            total_distance: coverage.total_distance,
        })
    }
}

/// Select the planner for the requested objective.
pub fn select_planner(objective: RouteObjective) -> Box<dyn RoutePlanner> {
    match objective {
        RouteObjective::MinCost => Box::new(MinCostPlanner),
        RouteObjective::MaxStars => Box::new(MaxStarsPlanner::default()),
    }
}
