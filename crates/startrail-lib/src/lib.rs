//! Constellation route planning and travel simulation.
//!
//! This crate models a universe of star constellations, plans routes over
//! their weighted graphs under dynamically blockable edges, and drives a
//! traveler's resource state machine edge-by-edge along a planned route.
//! It is an embeddable library: the host process owns the window loop,
//! rendering and file I/O, and only calls the functions exported here once
//! per frame.

#![deny(warnings)]

pub mod blocking;
pub mod error;
pub mod mission;
pub mod path;
pub mod routing;
pub mod travel;
pub mod traveler;
pub mod universe;

pub use blocking::BlockedEdges;
pub use error::{Error, Result};
pub use mission::MissionParams;
pub use path::{find_route_max_coverage, find_route_min_cost, CoveragePath};
pub use routing::{plan_route, RouteObjective, RoutePlan, RoutePlanner, RouteRequest};
pub use travel::{ArrivalRecord, TickEvent, TravelPhase, TravelSim};
pub use traveler::{Traveler, TravelerConfig};
pub use universe::{Constellation, ConstellationId, ExternalLink, Position, Star, StarId, Universe};
