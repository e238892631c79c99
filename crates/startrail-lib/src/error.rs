use thiserror::Error;

use crate::universe::StarId;

/// Convenient result alias for the startrail library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a star id could not be found in the constellation.
    #[error("unknown star id {id}")]
    UnknownStar { id: StarId },

    /// Raised when no route could be found between two stars under the
    /// current blocking state.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: StarId, goal: StarId },

    /// Raised when a route with no stars is handed to the simulator.
    #[error("route contained no stars")]
    EmptyRoute,

    /// Raised when a planned route references an edge that no longer exists.
    #[error("no edge between {from} and {to}")]
    MissingEdge { from: StarId, to: StarId },

    /// Raised when a planned route references an edge that was blocked after
    /// planning.
    #[error("edge between {from} and {to} is blocked")]
    EdgeBlocked { from: StarId, to: StarId },

    /// Raised when a simulator operation is invalid in the current phase.
    #[error("cannot {operation} while {phase}")]
    InvalidTransition {
        phase: &'static str,
        operation: &'static str,
    },

    /// Raised when the traveler has died and the session was not reset.
    #[error("traveler is dead; reset the session to continue")]
    TravelerDead,

    /// Raised when mission parameters fail validation.
    #[error("invalid mission parameters: {message}")]
    InvalidMissionParams { message: String },
}
