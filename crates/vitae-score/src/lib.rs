//! ATS compatibility scoring.
//!
//! Two deterministic modes, selected by the presence of a job profile:
//! unweighted (entity counts with per-section caps) and weighted
//! (required/preferred coverage percentages). Both reduce to a score in
//! [0, 100].

mod engine;

pub use engine::{DEFAULT_EXPERIENCE_WEIGHT, ScoreBreakdown, ScoringEngine};
