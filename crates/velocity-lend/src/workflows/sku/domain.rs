use crate::insight::InsightSource;
use serde::{Deserialize, Serialize};

/// Parallel identifiers asserted to describe one physical product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuIdentifiers {
    pub erp_code: String,
    pub warehouse_code: String,
    pub storefront_slug: String,
    pub product_name: String,
}

/// Unification verdict with a confidence score and audit-friendly reasoning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkuMatch {
    pub same_product: bool,
    pub confidence: u8,
    pub unified_name: String,
    pub reasoning: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub risk_factors: Vec<String>,
    pub source: InsightSource,
}
