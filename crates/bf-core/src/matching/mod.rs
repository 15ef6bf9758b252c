pub mod checks;
pub mod engine;

pub use checks::{evaluate, run_all_checks, CheckOutcome, MatchDecision};
pub use engine::MatchingEngine;
