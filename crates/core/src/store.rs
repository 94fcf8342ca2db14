//! Persistence port for stored recommendations.
//!
//! Storing recommendations and tracking their completion is an external
//! collaborator concern. This module only defines the port the REST layer
//! talks to, plus the stub implementation used until a real backend lands.

use skrining_types::SubjectId;

use crate::recommendation::RecommendationRecord;
use crate::StoreResult;

/// Port to the recommendation persistence collaborator.
pub trait RecommendationStore {
    /// Returns the stored active recommendations for a subject.
    fn recommendations_for_subject(
        &self,
        subject: &SubjectId,
    ) -> StoreResult<Vec<RecommendationRecord>>;

    /// Marks a stored recommendation as completed.
    ///
    /// Returns the updated record, or `None` if no record with that id exists.
    fn mark_completed(
        &self,
        recommendation_id: &str,
        completion_notes: Option<&str>,
    ) -> StoreResult<Option<RecommendationRecord>>;
}

/// Stub store used until database persistence is implemented.
///
/// Reads return nothing and completion updates affect nothing. It does not
/// invent behaviour beyond that.
#[derive(Debug, Default, Clone)]
pub struct UnimplementedStore;

impl RecommendationStore for UnimplementedStore {
    fn recommendations_for_subject(
        &self,
        _subject: &SubjectId,
    ) -> StoreResult<Vec<RecommendationRecord>> {
        Ok(Vec::new())
    }

    fn mark_completed(
        &self,
        _recommendation_id: &str,
        _completion_notes: Option<&str>,
    ) -> StoreResult<Option<RecommendationRecord>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_store_reports_no_stored_recommendations() {
        let store = UnimplementedStore;
        let subject = SubjectId::new("user-123").expect("valid id");
        let stored = store
            .recommendations_for_subject(&subject)
            .expect("stub read");
        assert!(stored.is_empty());
    }

    #[test]
    fn stub_store_completes_nothing() {
        let store = UnimplementedStore;
        let updated = store
            .mark_completed("rec-1", Some("done at clinic"))
            .expect("stub update");
        assert!(updated.is_none());
    }
}
