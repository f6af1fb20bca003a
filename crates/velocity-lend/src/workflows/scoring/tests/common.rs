use std::sync::Arc;

use crate::insight::{
    BusinessInsight, CollaboratorMatch, InsightError, InsightProvider, InsightStatus,
    ProfileSummary,
};
use crate::workflows::scoring::domain::{BusinessProfile, Industry};
use crate::workflows::scoring::engine::{ScoringConfig, ScoringEngine};
use crate::workflows::scoring::insight::InsightAdjustment;
use crate::workflows::scoring::service::ScoringService;
use crate::insight::InsightSource;
use crate::workflows::sku::SkuIdentifiers;

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig {
        base_score: 50,
        excellent_turns: 8.0,
        good_turns: 4.0,
        moderate_turns: 2.0,
        large_revenue: 5_000_000.0,
        solid_revenue: 1_000_000.0,
        small_revenue: 500_000.0,
        veteran_years: 5.0,
        established_years: 2.0,
        insight_cap: 10,
    }
}

pub(super) fn scoring_engine() -> ScoringEngine {
    ScoringEngine::new(scoring_config())
}

pub(super) fn profile(
    revenue: f64,
    inventory_turns: f64,
    industry: Industry,
    years_operating: f64,
) -> BusinessProfile {
    BusinessProfile {
        revenue,
        inventory_turns,
        industry,
        years_operating,
    }
}

/// Fast-growing protein bar company with strong direct sales.
pub(super) fn velocity_snacks() -> BusinessProfile {
    profile(3_500_000.0, 12.0, Industry::FoodAndBeverage, 4.0)
}

/// Premium sauce maker with inventory challenges.
pub(super) fn gourmet_sauces() -> BusinessProfile {
    profile(800_000.0, 2.5, Industry::SpecialtyFoods, 6.0)
}

pub(super) fn neutral_insight() -> InsightAdjustment {
    InsightAdjustment {
        adjustment: 0,
        note: "Standard operational patterns detected".to_string(),
        source: InsightSource::LocalHeuristic,
    }
}

pub(super) fn identifiers() -> SkuIdentifiers {
    SkuIdentifiers {
        erp_code: "PB-CHOC-001".to_string(),
        warehouse_code: "PROTBAR_CHOC_12PK".to_string(),
        storefront_slug: "protein-bar-chocolate".to_string(),
        product_name: "Chocolate Protein Bar".to_string(),
    }
}

pub(super) fn service_with<I: InsightProvider>(provider: I) -> ScoringService<I> {
    ScoringService::new(Arc::new(provider), scoring_config())
}

/// Collaborator stub returning a fixed, well-formed reply.
pub(super) struct StaticInsight {
    pub(super) adjustment: i16,
    pub(super) insight: &'static str,
    pub(super) confidence: u8,
}

impl InsightProvider for StaticInsight {
    fn status(&self) -> InsightStatus {
        InsightStatus::Enabled {
            model: "stub".to_string(),
        }
    }

    async fn business_insight(
        &self,
        _summary: &ProfileSummary,
    ) -> Result<BusinessInsight, InsightError> {
        Ok(BusinessInsight {
            risk_adjustment: self.adjustment,
            key_insight: self.insight.to_string(),
        })
    }

    async fn match_identifiers(
        &self,
        identifiers: &SkuIdentifiers,
    ) -> Result<CollaboratorMatch, InsightError> {
        Ok(CollaboratorMatch {
            same_product: true,
            confidence: self.confidence,
            unified_name: identifiers.product_name.clone(),
            reasoning: "identifiers share a token trail".to_string(),
            risk_factors: Vec::new(),
        })
    }
}

/// Collaborator stub that is not configured.
pub(super) struct OfflineInsight;

impl InsightProvider for OfflineInsight {
    fn status(&self) -> InsightStatus {
        InsightStatus::Disabled {
            reason: "no INSIGHT_API_KEY configured".to_string(),
        }
    }

    async fn business_insight(
        &self,
        _summary: &ProfileSummary,
    ) -> Result<BusinessInsight, InsightError> {
        Err(InsightError::Disabled(
            "no INSIGHT_API_KEY configured".to_string(),
        ))
    }

    async fn match_identifiers(
        &self,
        _identifiers: &SkuIdentifiers,
    ) -> Result<CollaboratorMatch, InsightError> {
        Err(InsightError::Disabled(
            "no INSIGHT_API_KEY configured".to_string(),
        ))
    }
}

/// Collaborator stub answering with unparseable payloads.
pub(super) struct MalformedInsight;

impl InsightProvider for MalformedInsight {
    fn status(&self) -> InsightStatus {
        InsightStatus::Enabled {
            model: "stub".to_string(),
        }
    }

    async fn business_insight(
        &self,
        _summary: &ProfileSummary,
    ) -> Result<BusinessInsight, InsightError> {
        Err(InsightError::Malformed("missing field".to_string()))
    }

    async fn match_identifiers(
        &self,
        _identifiers: &SkuIdentifiers,
    ) -> Result<CollaboratorMatch, InsightError> {
        Err(InsightError::Malformed("not json".to_string()))
    }
}

/// Collaborator stub whose calls time out.
pub(super) struct TimeoutInsight;

impl InsightProvider for TimeoutInsight {
    fn status(&self) -> InsightStatus {
        InsightStatus::Enabled {
            model: "stub".to_string(),
        }
    }

    async fn business_insight(
        &self,
        _summary: &ProfileSummary,
    ) -> Result<BusinessInsight, InsightError> {
        Err(InsightError::Timeout)
    }

    async fn match_identifiers(
        &self,
        _identifiers: &SkuIdentifiers,
    ) -> Result<CollaboratorMatch, InsightError> {
        Err(InsightError::Timeout)
    }
}
