//! The step-by-step travel state machine.
//!
//! All progression is driven by discrete external calls issued once per
//! frame: `start_path` stages a planned route, `advance` explicitly begins
//! the next edge (routes are never auto-played), and `tick` accumulates
//! transit time until arrival. The simulator owns the traveler and the
//! pending route; the constellation is borrowed per call and never stored.

use std::collections::{BTreeSet, VecDeque};

use crate::blocking::BlockedEdges;
use crate::error::{Error, Result};
use crate::mission::MissionParams;
use crate::traveler::{Traveler, TravelerConfig};
use crate::universe::{Constellation, Position, StarId};

use super::arrival::{process_arrival, ArrivalRecord};

/// Transits shorter than this are stretched so arrival still takes a visible
/// moment and `distance / speed` never degenerates.
pub const MIN_TRANSIT_SECS: f64 = 0.2;

/// One edge traversal in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transit {
    pub from: StarId,
    pub to: StarId,
    pub distance: f64,
    pub elapsed: f64,
    pub duration: f64,
}

impl Transit {
    /// Completed fraction of this transit in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }
}

/// The simulator's current phase.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TravelPhase {
    /// No active route.
    #[default]
    Idle,
    /// A route is staged; the next edge starts only on an explicit advance.
    AwaitingAdvance,
    /// An edge traversal is underway.
    InTransit(Transit),
    /// Terminal: the traveler's resources hit zero.
    Dead,
}

impl TravelPhase {
    pub fn name(&self) -> &'static str {
        match self {
            TravelPhase::Idle => "idle",
            TravelPhase::AwaitingAdvance => "awaiting advance",
            TravelPhase::InTransit(_) => "in transit",
            TravelPhase::Dead => "dead",
        }
    }
}

/// Outcome of a `tick` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickEvent {
    /// Still in transit; `fraction` is the completed share of the edge.
    Progress { fraction: f64 },
    /// Arrived at a star; `route_finished` when no edges remain.
    Arrived {
        star: StarId,
        route_finished: bool,
    },
    /// The arrival killed the traveler (energy or life budget exhausted).
    Died { star: StarId },
}

/// Drives a traveler edge-by-edge along a planned route.
#[derive(Debug, Clone)]
pub struct TravelSim {
    params: MissionParams,
    traveler: Traveler,
    /// Upcoming targets; the front is the next star to advance towards.
    route: VecDeque<StarId>,
    phase: TravelPhase,
    visited: BTreeSet<StarId>,
    log: Vec<ArrivalRecord>,
}

impl TravelSim {
    /// Create a simulator for a fresh session.
    pub fn new(config: TravelerConfig, params: MissionParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            traveler: Traveler::new(config),
            route: VecDeque::new(),
            phase: TravelPhase::Idle,
            visited: BTreeSet::new(),
            log: Vec::new(),
        })
    }

    pub fn phase(&self) -> &TravelPhase {
        &self.phase
    }

    pub fn params(&self) -> &MissionParams {
        &self.params
    }

    pub fn traveler(&self) -> &Traveler {
        &self.traveler
    }

    pub fn current_star(&self) -> Option<StarId> {
        self.traveler.current_star()
    }

    pub fn is_dead(&self) -> bool {
        self.traveler.is_dead()
    }

    /// Stars visited this session, for presentation highlighting. The path
    /// planner never consults this set.
    pub fn visited(&self) -> &BTreeSet<StarId> {
        &self.visited
    }

    /// Immutable arrival log for reporting.
    pub fn log(&self) -> &[ArrivalRecord] {
        &self.log
    }

    /// Targets not yet reached, in order.
    pub fn remaining_route(&self) -> impl Iterator<Item = StarId> + '_ {
        self.route.iter().copied()
    }

    /// Place the traveler on a star without traversing an edge. No arrival
    /// processing runs; the star is only marked visited.
    pub fn place(&mut self, constellation: &Constellation, star: StarId) -> Result<()> {
        self.reject_if_dead()?;
        if constellation.star(star).is_none() {
            return Err(Error::UnknownStar { id: star });
        }
        self.traveler.set_current_star(star);
        self.visited.insert(star);
        Ok(())
    }

    /// Stage a planned route. Valid while idle or between edges; the first
    /// star of the route becomes the traveler's position. A single-star
    /// route just places the traveler and the simulator stays idle.
    pub fn start_path(&mut self, route: Vec<StarId>) -> Result<()> {
        self.reject_if_dead()?;
        if let TravelPhase::InTransit(_) = self.phase {
            return Err(self.invalid("start a path"));
        }
        let mut steps: VecDeque<StarId> = route.into();
        let Some(first) = steps.pop_front() else {
            return Err(Error::EmptyRoute);
        };

        self.traveler.set_current_star(first);
        self.visited.insert(first);
        self.route = steps;
        self.phase = if self.route.is_empty() {
            TravelPhase::Idle
        } else {
            TravelPhase::AwaitingAdvance
        };
        Ok(())
    }

    /// Begin traversing the next edge of the staged route.
    ///
    /// An edge that went missing or was blocked after planning fails here
    /// with no state change; blocking is never consulted again once the
    /// transit has begun.
    pub fn advance(&mut self, constellation: &Constellation, blocked: &BlockedEdges) -> Result<()> {
        self.reject_if_dead()?;
        if self.phase != TravelPhase::AwaitingAdvance {
            return Err(self.invalid("advance"));
        }
        let Some(from) = self.traveler.current_star() else {
            return Err(self.invalid("advance"));
        };
        let Some(&to) = self.route.front() else {
            return Err(Error::EmptyRoute);
        };

        let Some(distance) = constellation.edge_weight(from, to) else {
            return Err(Error::MissingEdge { from, to });
        };
        if blocked.is_blocked(constellation.id, from, to) {
            return Err(Error::EdgeBlocked { from, to });
        }

        let duration = (distance / self.params.travel_speed_units).max(MIN_TRANSIT_SECS);
        self.phase = TravelPhase::InTransit(Transit {
            from,
            to,
            distance,
            elapsed: 0.0,
            duration,
        });
        Ok(())
    }

    /// Accumulate transit time. On completing the edge the life budget is
    /// debited, arrival processing runs, and the phase moves to awaiting
    /// the next advance (or idle when the route is exhausted, or dead).
    pub fn tick(&mut self, constellation: &Constellation, dt: f64) -> Result<TickEvent> {
        self.reject_if_dead()?;
        let TravelPhase::InTransit(mut transit) = self.phase else {
            return Err(self.invalid("tick"));
        };

        transit.elapsed += dt.max(0.0);
        if transit.elapsed < transit.duration {
            self.phase = TravelPhase::InTransit(transit);
            return Ok(TickEvent::Progress {
                fraction: transit.fraction(),
            });
        }

        let Some(star) = constellation.star(transit.to) else {
            return Err(Error::UnknownStar { id: transit.to });
        };

        self.route.pop_front();
        self.traveler.spend_life(transit.distance);
        let record = process_arrival(&mut self.traveler, star, &self.params);
        self.visited.insert(transit.to);
        self.log.push(record);

        if !self.traveler.is_dead() && self.traveler.life_budget() <= 0.0 {
            tracing::debug!(star = transit.to, "life budget exhausted on arrival");
            self.traveler.mark_dead();
        }

        if self.traveler.is_dead() {
            self.phase = TravelPhase::Dead;
            return Ok(TickEvent::Died { star: transit.to });
        }

        let route_finished = self.route.is_empty();
        self.phase = if route_finished {
            TravelPhase::Idle
        } else {
            TravelPhase::AwaitingAdvance
        };
        Ok(TickEvent::Arrived {
            star: transit.to,
            route_finished,
        })
    }

    /// Completed fraction of the current transit, if any.
    pub fn transit_fraction(&self) -> Option<f64> {
        match &self.phase {
            TravelPhase::InTransit(transit) => Some(transit.fraction()),
            _ => None,
        }
    }

    /// Presentation-only interpolated position during transit: a linear
    /// blend between the endpoint positions.
    pub fn interpolated_position(&self, constellation: &Constellation) -> Option<Position> {
        let TravelPhase::InTransit(transit) = &self.phase else {
            return None;
        };
        let from = constellation.star(transit.from)?.position;
        let to = constellation.star(transit.to)?.position;
        Some(from.lerp(&to, transit.fraction()))
    }

    /// Discard the session and begin a fresh one. The only operation a dead
    /// simulator accepts.
    pub fn reset(&mut self, config: TravelerConfig) {
        self.traveler = Traveler::new(config);
        self.route.clear();
        self.visited.clear();
        self.log.clear();
        self.phase = TravelPhase::Idle;
    }

    fn reject_if_dead(&self) -> Result<()> {
        match self.phase {
            TravelPhase::Dead => Err(Error::TravelerDead),
            _ => Ok(()),
        }
    }

    fn invalid(&self, operation: &'static str) -> Error {
        Error::InvalidTransition {
            phase: self.phase.name(),
            operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_names() {
        assert_eq!(TravelPhase::Idle.name(), "idle");
        assert_eq!(TravelPhase::Dead.name(), "dead");
    }

    #[test]
    fn transit_fraction_clamps() {
        let transit = Transit {
            from: 1,
            to: 2,
            distance: 10.0,
            elapsed: 5.0,
            duration: 2.0,
        };
        assert_eq!(transit.fraction(), 1.0);
    }
}
