//! Route planning for constellation travel.
//!
//! This module provides:
//! - [`RouteObjective`] - Supported planning objectives (min cost, max stars)
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! Planners are strategies behind the [`RoutePlanner`] trait; `plan_route`
//! orchestrates endpoint validation, blocking-registry snapshotting,
//! planner selection and the max-stars fallback.

mod planner;

pub use planner::{select_planner, MaxStarsPlanner, MinCostPlanner, PathFound, RoutePlanner};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::blocking::BlockedEdges;
use crate::error::{Error, Result};
use crate::universe::{Constellation, StarId};

/// Optimisation objective for route planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteObjective {
    /// Minimise total edge weight (classic shortest path).
    MinCost,
    /// Maximise distinct stars visited within the travel budget.
    #[default]
    MaxStars,
}

impl fmt::Display for RouteObjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteObjective::MinCost => "min_cost",
            RouteObjective::MaxStars => "max_stars",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: StarId,
    pub goal: StarId,
    pub objective: RouteObjective,
    /// Travel-distance budget, normally the traveler's remaining life
    /// budget. Only consulted by the max-stars objective.
    pub budget: Option<f64>,
}

impl RouteRequest {
    /// Convenience constructor for a minimum-cost route.
    pub fn min_cost(start: StarId, goal: StarId) -> Self {
        Self {
            start,
            goal,
            objective: RouteObjective::MinCost,
            budget: None,
        }
    }

    /// Convenience constructor for a maximum-coverage route under a budget.
    pub fn max_stars(start: StarId, goal: StarId, budget: f64) -> Self {
        Self {
            start,
            goal,
            objective: RouteObjective::MaxStars,
            budget: Some(budget),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub objective: RouteObjective,
    pub start: StarId,
    pub goal: StarId,
    pub steps: Vec<StarId>,
    pub total_distance: f64,
    pub stars_visited: usize,
    /// `false` when the max-stars search found nothing within budget and the
    /// plan fell back to the minimum-cost route, which may cost more than
    /// the traveler can afford.
    pub within_budget: bool,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route using the requested objective.
///
/// Validates both endpoints, snapshots the blocking registry so editor
/// toggles landing mid-search are not observed, runs the selected planner
/// and, for the max-stars objective, falls back to the minimum-cost result
/// when nothing fits the budget — navigation never silently fails while any
/// path exists, even one the traveler cannot fully afford.
pub fn plan_route(
    constellation: &Constellation,
    blocked: &BlockedEdges,
    request: &RouteRequest,
) -> Result<RoutePlan> {
    for id in [request.start, request.goal] {
        if constellation.star(id).is_none() {
            return Err(Error::UnknownStar { id });
        }
    }

    let blocked = blocked.snapshot();
    let planner = select_planner(request.objective);

    let mut within_budget = true;
    let found = match planner.find_path(
        constellation,
        &blocked,
        request.start,
        request.goal,
        request.budget,
    ) {
        Some(found) => found,
        None if request.objective == RouteObjective::MaxStars => {
            let fallback = MinCostPlanner
                .find_path(
                    constellation,
                    &blocked,
                    request.start,
                    request.goal,
                    request.budget,
                )
                .ok_or(Error::RouteNotFound {
                    start: request.start,
                    goal: request.goal,
                })?;
            within_budget = request
                .budget
                .map_or(true, |budget| fallback.total_distance <= budget);
            tracing::debug!(
                start = request.start,
                goal = request.goal,
                total = fallback.total_distance,
                within_budget,
                "no coverage path within budget; using min-cost fallback"
            );
            fallback
        }
        None => {
            return Err(Error::RouteNotFound {
                start: request.start,
                goal: request.goal,
            })
        }
    };

    Ok(RoutePlan {
        objective: request.objective,
        start: request.start,
        goal: request.goal,
        stars_visited: found.steps.len(),
        total_distance: found.total_distance,
        steps: found.steps,
        within_budget,
    })
}
