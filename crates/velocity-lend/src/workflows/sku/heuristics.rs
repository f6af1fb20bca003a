use super::domain::{SkuIdentifiers, SkuMatch};
use crate::insight::InsightSource;

const BASE_CONFIDENCE: u8 = 85;
const CONFIDENCE_CAP: u8 = 98;

/// Token-overlap matcher. Each identifier is split on its structural
/// delimiter; every identifier whose tokens corroborate the product name adds
/// a fixed confidence increment, capped below certainty.
pub fn heuristic_match(identifiers: &SkuIdentifiers) -> SkuMatch {
    let name_lower = identifiers.product_name.to_lowercase();
    let slug_lower = identifiers.storefront_slug.to_lowercase();

    let mut confidence = BASE_CONFIDENCE;
    let mut reasoning = format!("Pattern analysis of '{}':", identifiers.product_name);

    if code_tokens_in_name(&identifiers.erp_code, '-', &name_lower) {
        confidence += 5;
        reasoning.push_str(" ERP code contains product identifiers.");
    }

    if code_tokens_in_name(&identifiers.warehouse_code, '_', &name_lower) {
        confidence += 5;
        reasoning.push_str(" Warehouse code follows logical naming convention.");
    }

    if name_lower
        .split_whitespace()
        .any(|word| slug_lower.contains(word))
    {
        confidence += 5;
        reasoning.push_str(" Storefront slug matches product name structure.");
    }

    let confidence = confidence.min(CONFIDENCE_CAP);
    reasoning.push_str(&format!(
        " All identifiers consistently reference the same {}.",
        identifiers.product_name
    ));

    let risk_factors = if confidence > 90 {
        Vec::new()
    } else {
        vec!["Manual verification recommended".to_string()]
    };

    SkuMatch {
        same_product: true,
        confidence,
        unified_name: identifiers.product_name.clone(),
        reasoning,
        risk_factors,
        source: InsightSource::LocalHeuristic,
    }
}

fn code_tokens_in_name(code: &str, delimiter: char, name_lower: &str) -> bool {
    code.split(delimiter)
        .map(|token| token.trim().to_lowercase())
        .any(|token| !token.is_empty() && name_lower.contains(&token))
}
