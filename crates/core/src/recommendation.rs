//! Screening-recommendation generation.
//!
//! This module turns a [`RiskProfile`] into an ordered list of
//! [`RecommendationRecord`]s: diseases are ranked by risk score, filtered by
//! the fixed risk threshold, and matched against the static catalog, with
//! personalised lifestyle warnings appended for smokers, obese subjects, and
//! the elderly.
//!
//! Generation is a pure function over its input and the static catalog: no
//! shared mutable state, no I/O, and an empty result is a normal outcome for
//! low-risk profiles.

use serde::{Deserialize, Serialize};
use skrining_types::SubjectId;
use utoipa::ToSchema;

use crate::catalog::{self, CatalogEntry, SCREENING_CATALOG};
use crate::constants::{
    CRITICAL_SEVERITY_CUTOFF, ELDERLY_AGE_CUTOFF, ELDERLY_WARNING, HIGH_SEVERITY_CUTOFF,
    OBESE_BMI_CUTOFF, OBESITY_WARNING, RISK_THRESHOLD, SMOKER_WARNING,
};
use crate::profile::RiskProfile;

/// Categorical urgency bucket derived from a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Risk score at or above 85.
    Critical,
    /// Risk score at or above 70.
    High,
    /// Risk score below 70. Scores below the risk threshold never qualify for
    /// a recommendation, so the generator itself never emits this bucket; it
    /// exists for classifying scores outside that path.
    Medium,
}

impl Severity {
    /// Classifies a risk score into its severity bucket.
    pub fn from_score(score: f64) -> Self {
        if score >= CRITICAL_SEVERITY_CUTOFF {
            Severity::Critical
        } else if score >= HIGH_SEVERITY_CUTOFF {
            Severity::High
        } else {
            Severity::Medium
        }
    }

    /// Wire-format name of this severity bucket.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated screening recommendation.
///
/// Catalog content is copied by value into the record so that the static
/// catalog is never shared mutably and records can outlive the request that
/// produced them (rendered, persisted, or composed into a notification by
/// collaborators).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRecord {
    /// Subject this recommendation is for, copied from the risk profile.
    #[schema(value_type = String)]
    pub user_id: SubjectId,
    /// Disease name, one of the four catalog keys.
    pub disease: String,
    /// Risk score, copied verbatim from the profile.
    pub risk_score: f64,
    /// Severity bucket derived from the risk score.
    pub severity: Severity,
    /// Recommended screening tests.
    pub recommended_tests: Vec<String>,
    /// How often to screen. Free text.
    pub recommendation_frequency: String,
    /// Baseline catalog advice plus any personalised warnings, in order.
    pub lifestyle_advice: Vec<String>,
    /// Base priority copied from the catalog entry. Not adjusted per subject.
    pub priority: u8,
}

/// The four (disease, score) pairs of a profile, in catalog order.
fn disease_risks(profile: &RiskProfile) -> [(&'static str, f64); 4] {
    [
        (catalog::DIABETES_TYPE_2, profile.diabetes2_score),
        (catalog::HYPERTENSION, profile.hypertension_score),
        (catalog::CORONARY_HEART_DISEASE, profile.coronary_heart_score),
        (catalog::STROKE, profile.stroke_score),
    ]
}

/// Builds one record for a disease that cleared the risk threshold.
fn build_record(
    profile: &RiskProfile,
    disease: &str,
    score: f64,
    entry: &'static CatalogEntry,
) -> RecommendationRecord {
    let mut lifestyle_advice: Vec<String> = entry
        .lifestyle_advice
        .iter()
        .map(|advice| (*advice).to_owned())
        .collect();

    // Personalised warnings are appended after the catalog advice, in a fixed
    // order: smoker, then BMI, then age.
    if profile.smoker == Some(true) {
        lifestyle_advice.push(SMOKER_WARNING.to_owned());
    }
    if profile.bmi.is_some_and(|bmi| bmi >= OBESE_BMI_CUTOFF) {
        lifestyle_advice.push(OBESITY_WARNING.to_owned());
    }
    if profile.age >= ELDERLY_AGE_CUTOFF {
        lifestyle_advice.push(ELDERLY_WARNING.to_owned());
    }

    RecommendationRecord {
        user_id: profile.user_id.clone(),
        disease: disease.to_owned(),
        risk_score: score,
        severity: Severity::from_score(score),
        recommended_tests: entry.tests.iter().map(|t| (*t).to_owned()).collect(),
        recommendation_frequency: entry.frequency.to_owned(),
        lifestyle_advice,
        priority: entry.priority,
    }
}

/// Generates personalised screening recommendations for a risk profile.
///
/// Diseases are ranked by risk score descending and only those at or above
/// the risk threshold (70) produce a record. The sort is stable, so diseases
/// with equal scores keep their catalog-order relative position; the returned
/// records are in the same ranked order, highest risk first.
///
/// An empty result is not an error: it simply means no disease cleared the
/// threshold.
pub fn generate_screening_recommendations(profile: &RiskProfile) -> Vec<RecommendationRecord> {
    let mut risks = disease_risks(profile);
    // Stable sort: ties keep catalog order.
    risks.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut recommendations = Vec::with_capacity(SCREENING_CATALOG.len());
    for (disease, score) in risks {
        // Positive comparison: a NaN score fails the gate and is skipped.
        if score >= RISK_THRESHOLD {
            if let Some(entry) = catalog::catalog_entry(disease) {
                recommendations.push(build_record(profile, disease, score, entry));
            }
        }
    }

    tracing::debug!(
        subject = %profile.user_id,
        total = recommendations.len(),
        "generated screening recommendations"
    );

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(
        diabetes2: f64,
        hypertension: f64,
        coronary: f64,
        stroke: f64,
        age: u32,
    ) -> RiskProfile {
        RiskProfile {
            user_id: SubjectId::new("user-123").expect("valid id"),
            diabetes2_score: diabetes2,
            hypertension_score: hypertension,
            coronary_heart_score: coronary,
            stroke_score: stroke,
            age,
            bmi: None,
            smoker: None,
        }
    }

    #[test]
    fn all_scores_below_threshold_yield_no_recommendations() {
        let recs = generate_screening_recommendations(&profile(69.9, 0.0, 45.0, 12.5, 40));
        assert!(recs.is_empty());
    }

    #[test]
    fn all_critical_scores_yield_four_critical_records() {
        let recs = generate_screening_recommendations(&profile(85.0, 99.0, 90.0, 88.0, 40));
        assert_eq!(recs.len(), 4);
        for rec in &recs {
            assert_eq!(rec.severity, Severity::Critical);
            assert_eq!(rec.user_id.as_str(), "user-123");
        }
    }

    #[test]
    fn records_are_ordered_by_score_descending() {
        let recs = generate_screening_recommendations(&profile(72.0, 95.0, 70.0, 88.0, 40));
        let scores: Vec<f64> = recs.iter().map(|r| r.risk_score).collect();
        assert_eq!(scores, vec![95.0, 88.0, 72.0, 70.0]);
        assert_eq!(recs[0].disease, "Hipertensi");
        assert_eq!(recs[1].disease, "Stroke");
        assert_eq!(recs[2].disease, "Diabetes Mellitus Tipe 2");
        assert_eq!(recs[3].disease, "Jantung Koroner");
    }

    #[test]
    fn equal_scores_keep_catalog_order() {
        let recs = generate_screening_recommendations(&profile(90.0, 90.0, 90.0, 90.0, 40));
        let diseases: Vec<&str> = recs.iter().map(|r| r.disease.as_str()).collect();
        assert_eq!(
            diseases,
            vec![
                "Diabetes Mellitus Tipe 2",
                "Hipertensi",
                "Jantung Koroner",
                "Stroke"
            ]
        );
    }

    #[test]
    fn partial_ties_keep_catalog_order_among_equals() {
        let recs = generate_screening_recommendations(&profile(70.0, 75.0, 70.0, 75.0, 40));
        let diseases: Vec<&str> = recs.iter().map(|r| r.disease.as_str()).collect();
        assert_eq!(
            diseases,
            vec![
                "Hipertensi",
                "Stroke",
                "Diabetes Mellitus Tipe 2",
                "Jantung Koroner"
            ]
        );
    }

    #[test]
    fn threshold_is_inclusive_at_70() {
        let recs = generate_screening_recommendations(&profile(70.0, 0.0, 0.0, 0.0, 40));
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].severity, Severity::High);
    }

    #[test]
    fn severity_boundary_sits_at_85() {
        assert_eq!(Severity::from_score(84.9), Severity::High);
        assert_eq!(Severity::from_score(85.0), Severity::Critical);
        assert_eq!(Severity::from_score(70.0), Severity::High);
        assert_eq!(Severity::from_score(69.9), Severity::Medium);
    }

    #[test]
    fn nan_scores_never_clear_the_threshold() {
        let recs = generate_screening_recommendations(&profile(f64::NAN, 0.0, 0.0, 0.0, 40));
        assert!(recs.is_empty(), "NaN score produced records: {recs:?}");

        // A NaN score must not suppress other qualifying diseases either.
        let recs = generate_screening_recommendations(&profile(f64::NAN, 90.0, 0.0, 0.0, 40));
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].disease, "Hipertensi");
    }

    #[test]
    fn out_of_range_scores_are_taken_literally() {
        let recs = generate_screening_recommendations(&profile(120.0, -5.0, 0.0, 0.0, 40));
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].risk_score, 120.0);
        assert_eq!(recs[0].severity, Severity::Critical);
    }

    #[test]
    fn smoker_warning_comes_right_after_catalog_advice() {
        let mut p = profile(90.0, 0.0, 0.0, 0.0, 40);
        p.smoker = Some(true);

        let recs = generate_screening_recommendations(&p);
        let advice = &recs[0].lifestyle_advice;
        let base: Vec<String> = crate::catalog::catalog_entry("Diabetes Mellitus Tipe 2")
            .expect("catalog entry")
            .lifestyle_advice
            .iter()
            .map(|s| (*s).to_owned())
            .collect();
        assert_eq!(advice.len(), base.len() + 1);
        assert_eq!(&advice[..base.len()], base.as_slice());
        assert_eq!(advice.last().map(String::as_str), Some(super::SMOKER_WARNING));
    }

    #[test]
    fn smoker_false_appends_no_warning() {
        let mut p = profile(90.0, 0.0, 0.0, 0.0, 40);
        p.smoker = Some(false);

        let recs = generate_screening_recommendations(&p);
        assert!(!recs[0]
            .lifestyle_advice
            .iter()
            .any(|a| a == super::SMOKER_WARNING));
    }

    #[test]
    fn bmi_warning_boundary_sits_at_30() {
        let mut p = profile(90.0, 0.0, 0.0, 0.0, 40);

        p.bmi = Some(30.0);
        let recs = generate_screening_recommendations(&p);
        assert!(recs[0].lifestyle_advice.iter().any(|a| a == super::OBESITY_WARNING));

        p.bmi = Some(29.9);
        let recs = generate_screening_recommendations(&p);
        assert!(!recs[0].lifestyle_advice.iter().any(|a| a == super::OBESITY_WARNING));
    }

    #[test]
    fn age_warning_boundary_sits_at_60() {
        let recs = generate_screening_recommendations(&profile(90.0, 0.0, 0.0, 0.0, 60));
        assert!(recs[0].lifestyle_advice.iter().any(|a| a == super::ELDERLY_WARNING));

        let recs = generate_screening_recommendations(&profile(90.0, 0.0, 0.0, 0.0, 59));
        assert!(!recs[0].lifestyle_advice.iter().any(|a| a == super::ELDERLY_WARNING));
    }

    #[test]
    fn reference_scenario_produces_three_ranked_records_with_all_warnings() {
        let p = RiskProfile {
            user_id: SubjectId::new("user-123").expect("valid id"),
            diabetes2_score: 90.0,
            hypertension_score: 50.0,
            coronary_heart_score: 85.0,
            stroke_score: 70.0,
            age: 65,
            bmi: Some(31.0),
            smoker: Some(true),
        };

        let recs = generate_screening_recommendations(&p);
        assert_eq!(recs.len(), 3);

        assert_eq!(recs[0].disease, "Diabetes Mellitus Tipe 2");
        assert_eq!(recs[0].risk_score, 90.0);
        assert_eq!(recs[0].severity, Severity::Critical);

        assert_eq!(recs[1].disease, "Jantung Koroner");
        assert_eq!(recs[1].risk_score, 85.0);
        assert_eq!(recs[1].severity, Severity::Critical);

        assert_eq!(recs[2].disease, "Stroke");
        assert_eq!(recs[2].risk_score, 70.0);
        assert_eq!(recs[2].severity, Severity::High);

        for rec in &recs {
            let n = rec.lifestyle_advice.len();
            assert_eq!(rec.lifestyle_advice[n - 3], super::SMOKER_WARNING);
            assert_eq!(rec.lifestyle_advice[n - 2], super::OBESITY_WARNING);
            assert_eq!(rec.lifestyle_advice[n - 1], super::ELDERLY_WARNING);
        }
    }

    #[test]
    fn records_copy_catalog_content_verbatim() {
        let recs = generate_screening_recommendations(&profile(0.0, 0.0, 0.0, 75.0, 40));
        assert_eq!(recs.len(), 1);
        let entry = crate::catalog::catalog_entry("Stroke").expect("catalog entry");
        assert_eq!(recs[0].recommended_tests.len(), entry.tests.len());
        assert_eq!(recs[0].recommendation_frequency, entry.frequency);
        assert_eq!(recs[0].priority, entry.priority);
    }

    #[test]
    fn record_serializes_with_camel_case_fields() {
        let recs = generate_screening_recommendations(&profile(90.0, 0.0, 0.0, 0.0, 40));
        let json = serde_json::to_value(&recs[0]).expect("serialize record");
        assert_eq!(json["userId"], "user-123");
        assert_eq!(json["riskScore"], 90.0);
        assert_eq!(json["severity"], "critical");
        assert!(json["recommendedTests"].is_array());
        assert!(json["recommendationFrequency"].is_string());
        assert!(json["lifestyleAdvice"].is_array());
    }
}
