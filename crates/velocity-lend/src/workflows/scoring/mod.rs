//! Business scoring workflow: intake coercion, the additive rule table, the
//! score-to-rate/decision policy, and the collaborator-backed insight factor.

pub mod domain;
pub mod engine;
pub mod insight;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    BusinessProfile, Decision, FactorKind, Industry, ProfileInput, QuickScore, RawNumber,
    RiskCategory, ScoreComponent, ScoreResult, ScoringInputError,
};
pub use engine::{ScoringConfig, ScoringEngine};
pub use insight::{local_insight, InsightAdjustment};
pub use router::{scoring_router, UploadScoreRequest, UploadScoreResponse};
pub use service::ScoringService;
pub use views::{render_factor, QuickScoreView, ScoreReportView};
