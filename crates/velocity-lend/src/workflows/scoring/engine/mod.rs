mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;

use super::domain::{BusinessProfile, FactorKind, QuickScore, ScoreComponent, ScoreResult};
use super::insight::{local_insight, InsightAdjustment};

/// Stateless engine applying the rubric configuration to a business profile.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a profile with the supplied insight adjustment. Components are
    /// emitted in fixed order (velocity, revenue, industry, experience,
    /// insight); the adjustments are summed once and then clamped to [0,100].
    pub fn score(&self, profile: &BusinessProfile, insight: &InsightAdjustment) -> ScoreResult {
        let (mut components, subtotal) = rules::score_profile(profile, &self.config);

        let capped = insight
            .adjustment
            .clamp(-self.config.insight_cap, self.config.insight_cap);
        components.push(ScoreComponent {
            factor: FactorKind::Insight,
            adjustment: capped,
            notes: insight.note.clone(),
        });

        let total = self.config.base_score + subtotal + capped;
        let final_score = total.clamp(0, 100) as u8;

        ScoreResult {
            final_score,
            components,
            risk_category: policy::risk_category(final_score),
            recommended_rate: policy::recommended_rate(final_score),
            decision: policy::decide(final_score),
            insight_source: insight.source,
        }
    }

    /// Instant-scoring path: same rubric, local insight heuristic, trimmed
    /// output shape.
    pub fn quick_score(&self, profile: &BusinessProfile) -> QuickScore {
        let result = self.score(profile, &local_insight(profile));
        QuickScore {
            score: result.final_score,
            recommended_rate: result.recommended_rate,
            decision: result.decision,
            next_steps: "Contact our lending team to proceed".to_string(),
        }
    }
}
