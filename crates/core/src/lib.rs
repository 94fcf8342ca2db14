//! # Skrining Core
//!
//! Core screening-recommendation engine for the skrining health-risk
//! application.
//!
//! This crate contains pure data transformation over a static catalog:
//! - Ranking the four chronic-disease risk scores and filtering by threshold
//! - Building personalised recommendation records from catalog content
//! - Aggregating records into a dashboard summary
//! - Static general-advice configuration per age bracket
//!
//! **No API concerns**: authentication, HTTP servers, chat/notification
//! integrations, and UI belong to the surrounding application, not here. The
//! engine consumes a [`RiskProfile`] and produces [`RecommendationRecord`]s;
//! what collaborators do with them (render, persist, compose a WhatsApp
//! message) is their business.
//!
//! Everything here is synchronous and stateless: the catalog and advice
//! tables are immutable `'static` data, so any number of invocations may run
//! concurrently without coordination.

pub mod advice;
pub mod bmi;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod profile;
pub mod recommendation;
pub mod store;
pub mod summary;

pub use advice::{AdviceBracket, GENERAL_SCREENING_ADVICE};
pub use bmi::{calculate_bmi, BmiCategory};
pub use catalog::{catalog_entry, CatalogEntry, SCREENING_CATALOG};
pub use error::{ScreeningError, ScreeningResult, StoreError, StoreResult};
pub use profile::RiskProfile;
pub use recommendation::{generate_screening_recommendations, RecommendationRecord, Severity};
pub use store::{RecommendationStore, UnimplementedStore};
pub use summary::{
    get_recommendations_summary, CriticalityBreakdown, DiseaseRisk, RecommendationsSummary,
};
