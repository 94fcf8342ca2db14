//! Constants used throughout the skrining core crate.
//!
//! This module contains the fixed clinical cutoffs and warning texts to ensure
//! consistency across the codebase and make maintenance easier.

/// Minimum risk score at which a disease qualifies for a screening recommendation.
pub const RISK_THRESHOLD: f64 = 70.0;

/// Risk score at or above which a recommendation is classified as critical.
pub const CRITICAL_SEVERITY_CUTOFF: f64 = 85.0;

/// Risk score at or above which a recommendation is classified as high.
pub const HIGH_SEVERITY_CUTOFF: f64 = 70.0;

/// BMI at or above which the weight-loss warning is appended to lifestyle advice.
pub const OBESE_BMI_CUTOFF: f64 = 30.0;

/// Age (in years) at or above which the intensified-monitoring warning is appended.
pub const ELDERLY_AGE_CUTOFF: u32 = 60;

/// Number of diseases reported in the dashboard summary's top-risk view.
pub const TOP_DISEASES_LIMIT: usize = 3;

/// Warning appended to lifestyle advice for smokers.
pub const SMOKER_WARNING: &str = "⚠️ PRIORITAS: Berhenti merokok sangat penting!";

/// Warning appended to lifestyle advice when BMI is at or above [`OBESE_BMI_CUTOFF`].
pub const OBESITY_WARNING: &str = "⚠️ PRIORITAS: Turunkan berat badan ke BMI < 25";

/// Warning appended to lifestyle advice when age is at or above [`ELDERLY_AGE_CUTOFF`].
pub const ELDERLY_WARNING: &str = "⚠️ Intensifkan pemantauan karena usia > 60 tahun";
