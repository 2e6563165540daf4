//! Analysis domain
//!
//! Data carried through one controller run: per-agent results, the ordered
//! outputs mapping, the mutable round state and the terminal result.
//!
//! ```text
//! INIT → SELECT → (DEBATE → GATE → {STOP | RECRUIT → ADD_AGENT})* → VOTE → SUMMARIZE → DONE
//! ```

pub mod outcome;
pub mod phase;
pub mod result;
pub mod state;

pub use outcome::{AnalysisResult, Verdict};
pub use phase::AnalysisPhase;
pub use result::{AgentOutputs, AgentResult, PARSE_FAILURE_MARKER};
pub use state::RoundState;
