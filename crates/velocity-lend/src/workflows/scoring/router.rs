use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::domain::{ProfileInput, RawNumber};
use super::service::ScoringService;
use super::views::{QuickScoreView, ScoreReportView};
use crate::error::AppError;
use crate::insight::InsightProvider;
use crate::workflows::sku::{SkuIdentifiers, SkuMatch};
use crate::workflows::upload::CustomerUploadImporter;

/// Router builder exposing HTTP endpoints for scoring and identifier matching.
pub fn scoring_router<I>(service: Arc<ScoringService<I>>) -> Router
where
    I: InsightProvider + 'static,
{
    Router::new()
        .route("/api/v1/score", post(score_handler::<I>))
        .route("/api/v1/score/quick", post(quick_score_handler::<I>))
        .route("/api/v1/score/upload", post(upload_score_handler::<I>))
        .route("/api/v1/sku/match", post(sku_match_handler::<I>))
        .with_state(service)
}

pub(crate) async fn score_handler<I>(
    State(service): State<Arc<ScoringService<I>>>,
    Json(input): Json<ProfileInput>,
) -> Response
where
    I: InsightProvider + 'static,
{
    let profile = match input.resolve() {
        Ok(profile) => profile,
        Err(err) => return AppError::validation(err.to_string()).into_response(),
    };

    let result = service.analyze(&profile).await;
    let view = ScoreReportView::from_result(&result, service.insight_status());
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn quick_score_handler<I>(
    State(service): State<Arc<ScoringService<I>>>,
    Json(input): Json<ProfileInput>,
) -> Response
where
    I: InsightProvider + 'static,
{
    let profile = match input.resolve() {
        Ok(profile) => profile,
        Err(err) => return AppError::validation(err.to_string()).into_response(),
    };

    let quick = service.quick_score(&profile);
    let view = QuickScoreView::from_quick_score(&quick);
    (StatusCode::OK, Json(view)).into_response()
}

/// Customer export plus the declared profile fields the CSV cannot carry.
#[derive(Debug, Deserialize)]
pub struct UploadScoreRequest {
    pub csv: String,
    #[serde(default)]
    pub revenue: Option<RawNumber>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default, alias = "yearsOperating")]
    pub years_operating: Option<RawNumber>,
}

#[derive(Debug, Serialize)]
pub struct UploadScoreResponse {
    pub sku_count: usize,
    pub inventory_value: f64,
    pub derived_turns: f64,
    pub assessment: QuickScoreView,
}

pub(crate) async fn upload_score_handler<I>(
    State(service): State<Arc<ScoringService<I>>>,
    Json(request): Json<UploadScoreRequest>,
) -> Response
where
    I: InsightProvider + 'static,
{
    let snapshot = match CustomerUploadImporter::from_reader(Cursor::new(request.csv.into_bytes()))
    {
        Ok(snapshot) => snapshot,
        Err(err) => return AppError::from(err).into_response(),
    };

    let declared_revenue = match request
        .revenue
        .as_ref()
        .map(|raw| raw.as_f64("revenue"))
        .transpose()
    {
        Ok(revenue) => revenue,
        Err(err) => return AppError::validation(err.to_string()).into_response(),
    };

    let derived_turns = snapshot.derived_turns(declared_revenue);
    let input = ProfileInput {
        revenue: declared_revenue.map(RawNumber::Number),
        inventory_turns: Some(RawNumber::Number(derived_turns)),
        industry: request.industry,
        years_operating: request.years_operating,
    };
    let profile = match input.resolve() {
        Ok(profile) => profile,
        Err(err) => return AppError::validation(err.to_string()).into_response(),
    };

    let quick = service.quick_score(&profile);
    let response = UploadScoreResponse {
        sku_count: snapshot.rows().len(),
        inventory_value: snapshot.inventory_value(),
        derived_turns,
        assessment: QuickScoreView::from_quick_score(&quick),
    };
    (StatusCode::OK, Json(response)).into_response()
}

pub(crate) async fn sku_match_handler<I>(
    State(service): State<Arc<ScoringService<I>>>,
    Json(identifiers): Json<SkuIdentifiers>,
) -> Response
where
    I: InsightProvider + 'static,
{
    let matched: SkuMatch = service.match_identifiers(&identifiers).await;
    (StatusCode::OK, Json(matched)).into_response()
}
