use crate::workflows::scoring::domain::{Decision, RiskCategory};

/// Risk band lookup. A pure function of the clamped final score.
pub(crate) fn risk_category(score: u8) -> RiskCategory {
    if score >= 75 {
        RiskCategory::Low
    } else if score >= 60 {
        RiskCategory::Medium
    } else if score >= 45 {
        RiskCategory::High
    } else {
        RiskCategory::VeryHigh
    }
}

/// Recommended annual rate (percent) as a step function of the score.
pub(crate) fn recommended_rate(score: u8) -> f32 {
    if score >= 80 {
        10.5
    } else if score >= 70 {
        12.5
    } else if score >= 60 {
        15.0
    } else if score >= 50 {
        17.5
    } else if score >= 40 {
        20.0
    } else {
        22.0
    }
}

/// Lending decision lookup.
pub(crate) fn decide(score: u8) -> Decision {
    if score >= 60 {
        Decision::Approved
    } else if score >= 45 {
        Decision::ApprovedWithConditions
    } else if score >= 30 {
        Decision::ReferForManualReview
    } else {
        Decision::Declined
    }
}
