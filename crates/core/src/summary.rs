//! Dashboard summary over generated recommendations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::TOP_DISEASES_LIMIT;
use crate::recommendation::{RecommendationRecord, Severity};

/// Pending recommendation counts per severity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriticalityBreakdown {
    pub critical_pending: usize,
    pub high_pending: usize,
    pub medium_pending: usize,
}

/// A disease and its risk score, projected for the top-risk view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseRisk {
    pub disease: String,
    pub risk_score: f64,
}

/// Aggregated view of a subject's recommendations for dashboard display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsSummary {
    /// Total number of recommendations.
    pub total: usize,
    /// Completed recommendations. Completion tracking lives behind the
    /// persistence port and is unimplemented, so this is always zero.
    pub completed: usize,
    /// Recommendations still pending. With no completion tracking this always
    /// equals `total`.
    pub pending: usize,
    /// Pending counts broken down by severity.
    pub by_criticality_and_completeness: CriticalityBreakdown,
    /// The highest-risk diseases, at most three, score descending.
    pub top_diseases: Vec<DiseaseRisk>,
}

/// Aggregates recommendation records into counts and a top-risk view.
///
/// The top-risk view re-sorts its own copy of the input by score descending
/// rather than assuming generator order, so callers may pass records in any
/// order (for example after reloading them from storage).
pub fn get_recommendations_summary(records: &[RecommendationRecord]) -> RecommendationsSummary {
    let count_by_severity = |severity: Severity| {
        records.iter().filter(|r| r.severity == severity).count()
    };

    let mut ranked: Vec<&RecommendationRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));

    let top_diseases = ranked
        .iter()
        .take(TOP_DISEASES_LIMIT)
        .map(|r| DiseaseRisk {
            disease: r.disease.clone(),
            risk_score: r.risk_score,
        })
        .collect();

    RecommendationsSummary {
        total: records.len(),
        completed: 0,
        pending: records.len(),
        by_criticality_and_completeness: CriticalityBreakdown {
            critical_pending: count_by_severity(Severity::Critical),
            high_pending: count_by_severity(Severity::High),
            medium_pending: count_by_severity(Severity::Medium),
        },
        top_diseases,
    }
}
