//! Risk profile input model.
//!
//! A [`RiskProfile`] is the per-request input to the recommendation engine: the
//! four disease risk scores produced by the external prediction collaborator,
//! plus the demographic and lifestyle modifiers used for personalisation. It is
//! constructed by the caller for a single invocation and discarded afterwards.

use serde::{Deserialize, Serialize};
use skrining_types::SubjectId;
use utoipa::ToSchema;

/// Per-request risk profile for one subject.
///
/// Scores are conceptually percentages in `[0, 100]` but the engine takes any
/// numeric value literally: thresholding still behaves for out-of-range input
/// and nothing is clamped. Range validation, if wanted, belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    /// Opaque reference to the subject this profile describes.
    #[schema(value_type = String)]
    pub user_id: SubjectId,
    /// Risk score for type 2 diabetes mellitus.
    pub diabetes2_score: f64,
    /// Risk score for hypertension.
    pub hypertension_score: f64,
    /// Risk score for coronary heart disease.
    pub coronary_heart_score: f64,
    /// Risk score for stroke.
    pub stroke_score: f64,
    /// Age in years.
    pub age: u32,
    /// Body mass index, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    /// Whether the subject smokes, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoker: Option<bool>,
}
