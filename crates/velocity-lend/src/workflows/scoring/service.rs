use std::sync::Arc;

use tracing::warn;

use super::domain::{BusinessProfile, QuickScore, ScoreResult};
use super::engine::{ScoringConfig, ScoringEngine};
use super::insight::InsightAdjustment;
use crate::insight::{InsightProvider, InsightSource, InsightStatus, ProfileSummary};
use crate::workflows::sku::{heuristic_match, SkuIdentifiers, SkuMatch};

/// Service composing the scoring engine with the insight collaborator.
///
/// Every collaborator failure mode (disabled, timeout, transport, malformed
/// payload) falls back to the local heuristics, so no method here is fallible.
pub struct ScoringService<I> {
    engine: ScoringEngine,
    insight: Arc<I>,
}

impl<I: InsightProvider> ScoringService<I> {
    pub fn new(insight: Arc<I>, config: ScoringConfig) -> Self {
        Self {
            engine: ScoringEngine::new(config),
            insight,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn insight_status(&self) -> InsightStatus {
        self.insight.status()
    }

    /// Full analysis: consult the collaborator for the insight factor, fall
    /// back to the local heuristic on any failure.
    pub async fn analyze(&self, profile: &BusinessProfile) -> ScoreResult {
        let summary = ProfileSummary::from_profile(profile);
        let adjustment = match self.insight.business_insight(&summary).await {
            Ok(insight) => InsightAdjustment {
                adjustment: insight.risk_adjustment,
                note: format!("AI insight: {}", insight.key_insight),
                source: InsightSource::Collaborator,
            },
            Err(err) => {
                warn!(error = %err, "business insight unavailable, using local heuristic");
                super::insight::local_insight(profile)
            }
        };

        self.engine.score(profile, &adjustment)
    }

    /// Instant scoring for uploads and the rate calculator. Synchronous and
    /// deterministic: the local heuristic supplies the insight factor.
    pub fn quick_score(&self, profile: &BusinessProfile) -> QuickScore {
        self.engine.quick_score(profile)
    }

    /// Unify fragmented product identifiers, preferring the collaborator and
    /// falling back to token-overlap heuristics.
    pub async fn match_identifiers(&self, identifiers: &SkuIdentifiers) -> SkuMatch {
        match self.insight.match_identifiers(identifiers).await {
            Ok(matched) => SkuMatch {
                same_product: matched.same_product,
                confidence: matched.confidence.min(100),
                unified_name: matched.unified_name,
                reasoning: matched.reasoning,
                risk_factors: matched.risk_factors,
                source: InsightSource::Collaborator,
            },
            Err(err) => {
                warn!(error = %err, "identifier matching unavailable, using token heuristics");
                heuristic_match(identifiers)
            }
        }
    }
}
