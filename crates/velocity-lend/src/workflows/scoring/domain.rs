use crate::insight::InsightSource;
use serde::{Deserialize, Serialize};

pub const DEFAULT_REVENUE: f64 = 1_000_000.0;
pub const DEFAULT_INVENTORY_TURNS: f64 = 4.0;
pub const DEFAULT_YEARS_OPERATING: f64 = 2.0;

/// Loose intake mapping for scoring requests. Every field is optional and
/// numeric fields tolerate string-encoded numbers; anything that cannot be
/// coerced is reported as a recoverable validation failure, never a panic.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileInput {
    #[serde(default)]
    pub revenue: Option<RawNumber>,
    #[serde(default, alias = "inventoryTurns")]
    pub inventory_turns: Option<RawNumber>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default, alias = "yearsOperating")]
    pub years_operating: Option<RawNumber>,
}

impl ProfileInput {
    /// Resolve the raw mapping into a scored profile, applying documented
    /// defaults for absent fields.
    pub fn resolve(&self) -> Result<BusinessProfile, ScoringInputError> {
        let revenue = resolve_field(self.revenue.as_ref(), "revenue", DEFAULT_REVENUE)?;
        let inventory_turns = resolve_field(
            self.inventory_turns.as_ref(),
            "inventory_turns",
            DEFAULT_INVENTORY_TURNS,
        )?;
        let years_operating = resolve_field(
            self.years_operating.as_ref(),
            "years_operating",
            DEFAULT_YEARS_OPERATING,
        )?;
        let industry = self
            .industry
            .as_deref()
            .map(Industry::from_label)
            .unwrap_or(Industry::General);

        Ok(BusinessProfile {
            revenue,
            inventory_turns,
            industry,
            years_operating,
        })
    }
}

fn resolve_field(
    raw: Option<&RawNumber>,
    field: &'static str,
    default: f64,
) -> Result<f64, ScoringInputError> {
    let value = match raw {
        Some(raw) => raw.as_f64(field)?,
        None => default,
    };

    if value < 0.0 {
        return Err(ScoringInputError::Negative { field });
    }

    Ok(value)
}

/// A numeric intake value that may arrive as a JSON number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    pub(crate) fn as_f64(&self, field: &'static str) -> Result<f64, ScoringInputError> {
        match self {
            RawNumber::Number(value) => Ok(*value),
            RawNumber::Text(text) => {
                let cleaned: String = text
                    .trim()
                    .chars()
                    .filter(|c| *c != '$' && *c != ',')
                    .collect();
                cleaned
                    .parse::<f64>()
                    .map_err(|_| ScoringInputError::NotNumeric {
                        field,
                        value: text.clone(),
                    })
            }
        }
    }
}

/// Recoverable intake failure surfaced as a structured `{error, suggestion}`.
#[derive(Debug, thiserror::Error)]
pub enum ScoringInputError {
    #[error("field '{field}' could not be interpreted as a number (got '{value}')")]
    NotNumeric { field: &'static str, value: String },
    #[error("field '{field}' must not be negative")]
    Negative { field: &'static str },
}

/// Resolved, immutable business profile scored by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub revenue: f64,
    pub inventory_turns: f64,
    pub industry: Industry,
    pub years_operating: f64,
}

/// Industry classification used by the risk lookup table. Unrecognized labels
/// fold into `General`, which carries a neutral adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    FoodAndBeverage,
    Supplements,
    SpecialtyFoods,
    BeautyAndPersonalCare,
    General,
}

impl Industry {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "food & beverage" | "food and beverage" => Self::FoodAndBeverage,
            "supplements" => Self::Supplements,
            "specialty foods" => Self::SpecialtyFoods,
            "beauty & personal care" | "beauty and personal care" => Self::BeautyAndPersonalCare,
            _ => Self::General,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FoodAndBeverage => "Food & Beverage",
            Self::Supplements => "Supplements",
            Self::SpecialtyFoods => "Specialty Foods",
            Self::BeautyAndPersonalCare => "Beauty & Personal Care",
            Self::General => "General",
        }
    }
}

/// Factors permitted in the scoring rubric, in fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Velocity,
    Revenue,
    Industry,
    Experience,
    Insight,
}

/// Discrete contribution to a score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: FactorKind,
    pub adjustment: i16,
    pub notes: String,
}

/// Risk band derived solely from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
            Self::VeryHigh => "Very High Risk",
        }
    }
}

/// Lending decision derived solely from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approved,
    ApprovedWithConditions,
    ReferForManualReview,
    Declined,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::ApprovedWithConditions => "APPROVED with conditions",
            Self::ReferForManualReview => "REFER for manual review",
            Self::Declined => "DECLINED",
        }
    }
}

/// Full scoring outcome: the clamped score, the ordered component trail, and
/// the three mappings that depend on the score alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub final_score: u8,
    pub components: Vec<ScoreComponent>,
    pub risk_category: RiskCategory,
    pub recommended_rate: f32,
    pub decision: Decision,
    pub insight_source: InsightSource,
}

/// Trimmed outcome for the instant-scoring surface (uploads, rate calculator).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickScore {
    pub score: u8,
    pub recommended_rate: f32,
    pub decision: Decision,
    pub next_steps: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_applies_defaults_for_absent_fields() {
        let profile = ProfileInput::default().resolve().expect("defaults resolve");
        assert_eq!(profile.revenue, DEFAULT_REVENUE);
        assert_eq!(profile.inventory_turns, DEFAULT_INVENTORY_TURNS);
        assert_eq!(profile.industry, Industry::General);
        assert_eq!(profile.years_operating, DEFAULT_YEARS_OPERATING);
    }

    #[test]
    fn resolve_coerces_string_numbers() {
        let input = ProfileInput {
            revenue: Some(RawNumber::Text("$3,500,000".to_string())),
            inventory_turns: Some(RawNumber::Text(" 12 ".to_string())),
            industry: Some("Food & Beverage".to_string()),
            years_operating: Some(RawNumber::Number(4.0)),
        };
        let profile = input.resolve().expect("strings coerce");
        assert_eq!(profile.revenue, 3_500_000.0);
        assert_eq!(profile.inventory_turns, 12.0);
        assert_eq!(profile.industry, Industry::FoodAndBeverage);
    }

    #[test]
    fn resolve_rejects_garbage_numbers() {
        let input = ProfileInput {
            revenue: Some(RawNumber::Text("lots".to_string())),
            ..ProfileInput::default()
        };
        let error = input.resolve().expect_err("garbage rejected");
        assert!(matches!(
            error,
            ScoringInputError::NotNumeric { field: "revenue", .. }
        ));
    }

    #[test]
    fn resolve_rejects_negative_values() {
        let input = ProfileInput {
            inventory_turns: Some(RawNumber::Number(-1.0)),
            ..ProfileInput::default()
        };
        let error = input.resolve().expect_err("negative rejected");
        assert!(matches!(
            error,
            ScoringInputError::Negative {
                field: "inventory_turns"
            }
        ));
    }

    #[test]
    fn unknown_industry_folds_to_general() {
        assert_eq!(Industry::from_label("Widgets"), Industry::General);
        assert_eq!(
            Industry::from_label("  food & beverage  "),
            Industry::FoodAndBeverage
        );
    }
}
