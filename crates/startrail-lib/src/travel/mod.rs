//! Travel simulation: the traveler's state machine and arrival processing.
//!
//! - [`sim`] - the `Idle` → `AwaitingAdvance` → `InTransit` → `Dead` state
//!   machine driven by explicit per-frame calls
//! - [`arrival`] - the deterministic resource-update routine and its log
//!   record

pub mod arrival;
pub mod sim;

pub use arrival::ArrivalRecord;
pub use sim::{TickEvent, Transit, TravelPhase, TravelSim, MIN_TRANSIT_SECS};
