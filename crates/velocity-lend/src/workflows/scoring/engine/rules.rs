use super::config::ScoringConfig;
use crate::workflows::scoring::domain::{BusinessProfile, FactorKind, Industry, ScoreComponent};
use crate::workflows::scoring::views::{format_turns, format_usd, format_years};

pub(crate) fn score_profile(
    profile: &BusinessProfile,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, i16) {
    let mut components = Vec::new();
    let mut total: i16 = 0;

    // Inventory velocity carries the dominant weight. Comparisons are strict
    // so a profile sitting exactly on an edge lands in the lower bucket.
    let turns = profile.inventory_turns;
    let (velocity_adjustment, velocity_notes) = if turns > config.excellent_turns {
        (25, format!("Excellent inventory turns ({})", format_turns(turns)))
    } else if turns > config.good_turns {
        (15, format!("Good inventory turns ({})", format_turns(turns)))
    } else if turns > config.moderate_turns {
        (5, format!("Moderate inventory turns ({})", format_turns(turns)))
    } else {
        (-15, format!("Slow inventory turns ({})", format_turns(turns)))
    };
    components.push(ScoreComponent {
        factor: FactorKind::Velocity,
        adjustment: velocity_adjustment,
        notes: velocity_notes,
    });
    total += velocity_adjustment;

    let revenue = profile.revenue;
    let (revenue_adjustment, revenue_notes) = if revenue > config.large_revenue {
        (15, format!("Large revenue ({})", format_usd(revenue)))
    } else if revenue > config.solid_revenue {
        (10, format!("Good revenue ({})", format_usd(revenue)))
    } else if revenue < config.small_revenue {
        (-10, format!("Small revenue ({})", format_usd(revenue)))
    } else {
        (5, format!("Moderate revenue ({})", format_usd(revenue)))
    };
    components.push(ScoreComponent {
        factor: FactorKind::Revenue,
        adjustment: revenue_adjustment,
        notes: revenue_notes,
    });
    total += revenue_adjustment;

    let (industry_adjustment, industry_reason) = industry_risk(profile.industry);
    components.push(ScoreComponent {
        factor: FactorKind::Industry,
        adjustment: industry_adjustment,
        notes: format!("{} industry ({})", profile.industry.label(), industry_reason),
    });
    total += industry_adjustment;

    let years = profile.years_operating;
    let (experience_adjustment, experience_notes) = if years > config.veteran_years {
        (10, format!("Experienced operator ({})", format_years(years)))
    } else if years > config.established_years {
        (5, format!("Established business ({})", format_years(years)))
    } else {
        (-5, format!("Early stage ({})", format_years(years)))
    };
    components.push(ScoreComponent {
        factor: FactorKind::Experience,
        adjustment: experience_adjustment,
        notes: experience_notes,
    });
    total += experience_adjustment;

    (components, total)
}

fn industry_risk(industry: Industry) -> (i16, &'static str) {
    match industry {
        Industry::FoodAndBeverage => (10, "low risk, stable demand"),
        Industry::Supplements => (5, "moderate risk, growing market"),
        Industry::SpecialtyFoods => (-5, "higher risk, niche market"),
        Industry::BeautyAndPersonalCare => (0, "moderate risk, competitive"),
        Industry::General => (0, "standard industry risk"),
    }
}
