//! Body-mass-index calculation and classification.
//!
//! The intake collaborator records height and weight; the risk profile only
//! carries the derived BMI. This module computes and classifies that value,
//! applying the same input validation the intake service performs.

use crate::constants::OBESE_BMI_CUTOFF;
use crate::{ScreeningError, ScreeningResult};

/// WHO BMI classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    /// BMI below 18.5.
    Underweight,
    /// BMI in [18.5, 25).
    Normal,
    /// BMI in [25, 30).
    Overweight,
    /// BMI at or above 30. Shares its cutoff with the generator's weight-loss warning.
    Obese,
}

impl BmiCategory {
    /// Classifies a BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi >= OBESE_BMI_CUTOFF {
            BmiCategory::Obese
        } else if bmi >= 25.0 {
            BmiCategory::Overweight
        } else if bmi >= 18.5 {
            BmiCategory::Normal
        } else {
            BmiCategory::Underweight
        }
    }
}

/// Computes BMI from height in centimetres and weight in kilograms.
///
/// # Errors
///
/// Returns `ScreeningError::InvalidInput` if either measurement is not a
/// finite, strictly positive number.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> ScreeningResult<f64> {
    if !height_cm.is_finite() || !weight_kg.is_finite() {
        return Err(ScreeningError::InvalidInput(
            "tinggi dan berat badan harus berupa angka".into(),
        ));
    }
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return Err(ScreeningError::InvalidInput(
            "tinggi dan berat badan harus lebih dari 0".into(),
        ));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_bmi_from_centimetres_and_kilograms() {
        let bmi = calculate_bmi(170.0, 65.0).expect("valid measurements");
        assert!((bmi - 22.49).abs() < 0.01);
    }

    #[test]
    fn rejects_non_positive_measurements() {
        assert!(calculate_bmi(0.0, 65.0).is_err());
        assert!(calculate_bmi(170.0, -1.0).is_err());
    }

    #[test]
    fn rejects_non_finite_measurements() {
        assert!(calculate_bmi(f64::NAN, 65.0).is_err());
        assert!(calculate_bmi(170.0, f64::INFINITY).is_err());
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }
}
