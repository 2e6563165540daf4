//! Perspective agents and the roster that maps identifiers to them

mod perspective_agent;
mod roster;

pub use perspective_agent::PerspectiveAgent;
pub use roster::AgentRoster;
