use super::domain::{Decision, QuickScore, RiskCategory, ScoreComponent, ScoreResult};
use crate::insight::{InsightSource, InsightStatus};
use serde::Serialize;

/// Rendered, human-facing report for the full analysis path. Keeps the typed
/// fields alongside their display labels so API consumers can branch on tags
/// while the demo prints the labels.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReportView {
    pub final_score: u8,
    pub risk_category: RiskCategory,
    pub risk_category_label: &'static str,
    pub recommended_rate: f32,
    pub decision: Decision,
    pub decision_label: &'static str,
    pub factors: Vec<String>,
    pub insight_source: InsightSource,
    pub insight_status: InsightStatus,
}

impl ScoreReportView {
    pub fn from_result(result: &ScoreResult, status: InsightStatus) -> Self {
        Self {
            final_score: result.final_score,
            risk_category: result.risk_category,
            risk_category_label: result.risk_category.label(),
            recommended_rate: result.recommended_rate,
            decision: result.decision,
            decision_label: result.decision.label(),
            factors: result.components.iter().map(render_factor).collect(),
            insight_source: result.insight_source,
            insight_status: status,
        }
    }
}

/// Trimmed payload for the instant-scoring surface.
#[derive(Debug, Clone, Serialize)]
pub struct QuickScoreView {
    pub score: u8,
    pub rate: f32,
    pub decision: Decision,
    pub decision_label: &'static str,
    pub next_steps: String,
}

impl QuickScoreView {
    pub fn from_quick_score(quick: &QuickScore) -> Self {
        Self {
            score: quick.score,
            rate: quick.recommended_rate,
            decision: quick.decision,
            decision_label: quick.decision.label(),
            next_steps: quick.next_steps.clone(),
        }
    }
}

/// One factor line, e.g. "Excellent inventory turns (12x): +25".
pub fn render_factor(component: &ScoreComponent) -> String {
    format!("{}: {:+}", component.notes, component.adjustment)
}

/// Dollar amount with thousands separators, whole dollars only.
pub fn format_usd(amount: f64) -> String {
    let whole = amount.round().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

/// Turns ratio rendered as "12x" or "2.5x".
pub fn format_turns(turns: f64) -> String {
    if (turns - turns.round()).abs() < f64::EPSILON {
        format!("{:.0}x", turns)
    } else {
        format!("{:.1}x", turns)
    }
}

/// Operating tenure rendered as "6 years" or "1.5 years".
pub fn format_years(years: f64) -> String {
    if (years - years.round()).abs() < f64::EPSILON {
        format!("{:.0} years", years)
    } else {
        format!("{:.1} years", years)
    }
}
