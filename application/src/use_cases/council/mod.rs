//! Council steps composed by the analysis controller
//!
//! Each step owns one kind of generation call and the fallback that applies
//! when its answer is unusable:
//!
//! | Step | Meta-query | Fallback |
//! |------|------------|----------|
//! | [`TeamSelector`] | comma-separated names | uniform random sample |
//! | [`DebateEngine`] | revised JSON from the focus agent | keep previous result |
//! | [`ReinforcementGate`] | `{"decision": "Yes/No"}` | [`GatePolicy`](sarcasm_domain::GatePolicy) |
//! | [`Recruiter`] | bare candidate name | random candidate on transport failure |

mod debate;
mod gate;
mod recruit;
mod select_team;

pub use debate::{DebateEngine, DebateOutcome, focus_agent};
pub use gate::ReinforcementGate;
pub use recruit::Recruiter;
pub use select_team::TeamSelector;
