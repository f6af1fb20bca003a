use serde::{Deserialize, Serialize};

/// Rubric configuration describing the scoring thresholds. The additive
/// weights live in the rule table; only the bucket edges are tunable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_score: i16,
    pub excellent_turns: f64,
    pub good_turns: f64,
    pub moderate_turns: f64,
    pub large_revenue: f64,
    pub solid_revenue: f64,
    pub small_revenue: f64,
    pub veteran_years: f64,
    pub established_years: f64,
    pub insight_cap: i16,
}
