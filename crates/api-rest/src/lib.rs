//! # API REST
//!
//! REST API implementation for the skrining screening-recommendation engine.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! The engine itself lives in `skrining-core`; this crate is a transport
//! shim. Malformed payloads are rejected by the JSON extractor before they
//! reach the engine, which performs no defensive validation of its own.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use skrining_core::{
    generate_screening_recommendations, get_recommendations_summary, RecommendationRecord,
    RecommendationStore, RecommendationsSummary, RiskProfile, UnimplementedStore,
    GENERAL_SCREENING_ADVICE,
};
use skrining_types::SubjectId;

/// Application state for the REST API server.
///
/// Holds the persistence port shared by all request handlers. The engine
/// itself is stateless, so nothing else is needed here.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecommendationStore + Send + Sync>,
}

impl AppState {
    /// Creates state backed by the given recommendation store.
    pub fn new(store: Arc<dyn RecommendationStore + Send + Sync>) -> Self {
        Self { store }
    }

    /// Creates state backed by the stub store (no persistence).
    pub fn with_stub_store() -> Self {
        Self::new(Arc::new(UnimplementedStore))
    }
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Response for a recommendation-generation request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecommendationsRes {
    /// Generated records, highest risk first.
    pub recommendations: Vec<RecommendationRecord>,
    /// Dashboard summary over the same records.
    pub summary: RecommendationsSummary,
}

/// Response for a stored-recommendations read.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRecommendationsRes {
    pub recommendations: Vec<RecommendationRecord>,
}

/// Request body for marking a recommendation as completed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkCompletedReq {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_notes: Option<String>,
}

/// Response for a mark-completed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkCompletedRes {
    /// The updated record, or `null` if no record with that id exists.
    pub recommendation: Option<RecommendationRecord>,
}

/// One age bracket of general screening advice.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdviceBracketRes {
    pub bracket: String,
    pub tips: Vec<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        generate_recommendations,
        user_recommendations,
        complete_recommendation,
        general_advice,
    ),
    components(schemas(
        HealthRes,
        RiskProfile,
        RecommendationRecord,
        skrining_core::Severity,
        RecommendationsSummary,
        skrining_core::CriticalityBreakdown,
        skrining_core::DiseaseRisk,
        GenerateRecommendationsRes,
        UserRecommendationsRes,
        MarkCompletedReq,
        MarkCompletedRes,
        AdviceBracketRes,
    ))
)]
struct ApiDoc;

/// Builds the REST router with all screening routes, Swagger UI, and CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/screening/recommendations", post(generate_recommendations))
        .route(
            "/screening/users/:user_id/recommendations",
            get(user_recommendations),
        )
        .route(
            "/screening/recommendations/:id/complete",
            put(complete_recommendation),
        )
        .route("/screening/advice", get(general_advice))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API.
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Skrining REST API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/screening/recommendations",
    request_body = RiskProfile,
    responses(
        (status = 200, description = "Generated recommendations with dashboard summary", body = GenerateRecommendationsRes),
        (status = 422, description = "Malformed risk profile payload")
    )
)]
/// Generate screening recommendations for a risk profile.
///
/// Runs the engine over the submitted profile and returns the generated
/// records (highest risk first) together with the dashboard summary. A
/// profile with no disease at or above the risk threshold yields an empty
/// list, which is a normal outcome, not an error.
#[axum::debug_handler]
async fn generate_recommendations(
    State(_state): State<AppState>,
    Json(profile): Json<RiskProfile>,
) -> Json<GenerateRecommendationsRes> {
    let recommendations = generate_screening_recommendations(&profile);
    let summary = get_recommendations_summary(&recommendations);
    Json(GenerateRecommendationsRes {
        recommendations,
        summary,
    })
}

#[utoipa::path(
    get,
    path = "/screening/users/{user_id}/recommendations",
    params(
        ("user_id" = String, Path, description = "Subject identifier")
    ),
    responses(
        (status = 200, description = "Stored active recommendations for the subject", body = UserRecommendationsRes),
        (status = 400, description = "Invalid subject identifier"),
        (status = 500, description = "Internal server error")
    )
)]
/// Read a subject's stored recommendations through the persistence port.
///
/// With the stub store this always returns an empty list.
///
/// # Errors
/// Returns `400 Bad Request` if the subject identifier is empty, and
/// `500 Internal Server Error` if the store read fails.
#[axum::debug_handler]
async fn user_recommendations(
    State(state): State<AppState>,
    AxumPath(user_id): AxumPath<String>,
) -> Result<Json<UserRecommendationsRes>, (StatusCode, &'static str)> {
    let subject = SubjectId::new(&user_id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "invalid subject identifier"))?;

    let recommendations = state
        .store
        .recommendations_for_subject(&subject)
        .map_err(|e| {
            tracing::error!("Recommendation store read error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "store read failed")
        })?;

    Ok(Json(UserRecommendationsRes { recommendations }))
}

#[utoipa::path(
    put,
    path = "/screening/recommendations/{id}/complete",
    params(
        ("id" = String, Path, description = "Recommendation identifier")
    ),
    request_body = MarkCompletedReq,
    responses(
        (status = 200, description = "Completion result; recommendation is null when the id is unknown", body = MarkCompletedRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Mark a stored recommendation as completed through the persistence port.
///
/// With the stub store the returned recommendation is always `null`.
///
/// # Errors
/// Returns `500 Internal Server Error` if the store update fails.
#[axum::debug_handler]
async fn complete_recommendation(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    Json(req): Json<MarkCompletedReq>,
) -> Result<Json<MarkCompletedRes>, (StatusCode, &'static str)> {
    let recommendation = state
        .store
        .mark_completed(&id, req.completion_notes.as_deref())
        .map_err(|e| {
            tracing::error!("Recommendation store update error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "store update failed")
        })?;

    Ok(Json(MarkCompletedRes { recommendation }))
}

#[utoipa::path(
    get,
    path = "/screening/advice",
    responses(
        (status = 200, description = "General screening advice per age bracket", body = [AdviceBracketRes])
    )
)]
/// General screening advice by age bracket.
///
/// Static configuration data for presentation collaborators; independent of
/// any risk profile.
#[axum::debug_handler]
async fn general_advice(State(_state): State<AppState>) -> Json<Vec<AdviceBracketRes>> {
    let brackets = GENERAL_SCREENING_ADVICE
        .iter()
        .map(|b| AdviceBracketRes {
            bracket: b.bracket.to_owned(),
            tips: b.tips.iter().map(|t| (*t).to_owned()).collect(),
        })
        .collect();
    Json(brackets)
}
