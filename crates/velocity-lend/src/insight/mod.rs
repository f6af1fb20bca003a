//! External insight collaborator: an optional language-model service consulted
//! for the insight scoring factor and for product-identity matching. Every
//! failure mode is recovered by local heuristics at the call site; nothing in
//! this module is allowed to surface as a user-facing error.

mod client;

pub use client::InsightClient;

use crate::workflows::scoring::domain::BusinessProfile;
use crate::workflows::sku::SkuIdentifiers;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Construction-time collaborator state, replacing ambient global client
/// state with an explicit enabled/disabled value and reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InsightStatus {
    Enabled { model: String },
    Disabled { reason: String },
}

impl InsightStatus {
    pub fn is_enabled(&self) -> bool {
        matches!(self, InsightStatus::Enabled { .. })
    }

    pub fn message(&self) -> String {
        match self {
            InsightStatus::Enabled { model } => {
                format!("insight collaborator enabled ({model})")
            }
            InsightStatus::Disabled { reason } => {
                format!("insight collaborator disabled: {reason}")
            }
        }
    }
}

/// Which path produced an insight or match result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSource {
    Collaborator,
    LocalHeuristic,
}

impl InsightSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Collaborator => "AI collaborator",
            Self::LocalHeuristic => "Logic engine",
        }
    }
}

/// Compact profile summary forwarded to the collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub revenue: f64,
    pub inventory_turns: f64,
    pub industry: &'static str,
    pub years_operating: f64,
}

impl ProfileSummary {
    pub fn from_profile(profile: &BusinessProfile) -> Self {
        Self {
            revenue: profile.revenue,
            inventory_turns: profile.inventory_turns,
            industry: profile.industry.label(),
            years_operating: profile.years_operating,
        }
    }
}

/// Structured collaborator reply for the insight scoring factor. Both keys
/// are required: a reply missing either is malformed and triggers fallback.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusinessInsight {
    pub risk_adjustment: i16,
    pub key_insight: String,
}

/// Structured collaborator reply for identifier matching.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollaboratorMatch {
    pub same_product: bool,
    pub confidence: u8,
    pub unified_name: String,
    pub reasoning: String,
    #[serde(default)]
    pub risk_factors: Vec<String>,
}

/// Collaborator failure taxonomy. All variants are recovered identically by
/// the caller; the distinctions exist for diagnostics only.
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("collaborator disabled: {0}")]
    Disabled(String),
    #[error("collaborator request failed: {0}")]
    Transport(String),
    #[error("collaborator request timed out")]
    Timeout,
    #[error("collaborator response malformed: {0}")]
    Malformed(String),
}

/// Seam for the collaborator so services and tests can substitute providers.
pub trait InsightProvider: Send + Sync {
    fn status(&self) -> InsightStatus;

    fn business_insight(
        &self,
        summary: &ProfileSummary,
    ) -> impl Future<Output = Result<BusinessInsight, InsightError>> + Send;

    fn match_identifiers(
        &self,
        identifiers: &SkuIdentifiers,
    ) -> impl Future<Output = Result<CollaboratorMatch, InsightError>> + Send;
}
