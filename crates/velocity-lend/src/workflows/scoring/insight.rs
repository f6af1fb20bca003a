use super::domain::BusinessProfile;
use crate::insight::InsightSource;

/// Tenth factor weight supplied by the insight collaborator or, when the
/// collaborator is unavailable, by the deterministic heuristic below.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightAdjustment {
    pub adjustment: i16,
    pub note: String,
    pub source: InsightSource,
}

/// Deterministic local stand-in for the collaborator: velocity extremes move
/// the score, everything else is neutral.
pub fn local_insight(profile: &BusinessProfile) -> InsightAdjustment {
    let (adjustment, note) = if profile.inventory_turns > 8.0 {
        (10, "Strong operational efficiency indicators")
    } else if profile.inventory_turns < 3.0 {
        (-10, "Inventory management concerns detected")
    } else {
        (0, "Standard operational patterns detected")
    };

    InsightAdjustment {
        adjustment,
        note: note.to_string(),
        source: InsightSource::LocalHeuristic,
    }
}
