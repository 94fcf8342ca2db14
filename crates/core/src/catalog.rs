//! The static screening-recommendation catalog.
//!
//! This module holds the fixed clinical-recommendation content per disease:
//! which screening tests to take, how often, and which lifestyle changes to
//! make. The content is domain configuration curated with clinicians, not
//! algorithmic output; it is defined once at compile time, never mutated, and
//! safe to share across concurrent requests without synchronisation.

/// Disease name key for type 2 diabetes mellitus.
pub const DIABETES_TYPE_2: &str = "Diabetes Mellitus Tipe 2";

/// Disease name key for hypertension.
pub const HYPERTENSION: &str = "Hipertensi";

/// Disease name key for coronary heart disease.
pub const CORONARY_HEART_DISEASE: &str = "Jantung Koroner";

/// Disease name key for stroke.
pub const STROKE: &str = "Stroke";

/// Fixed screening-recommendation content for one disease.
///
/// All fields borrow from static data; recommendation records copy them into
/// owned values so that catalog data is never shared mutably.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Disease name, used as the lookup key.
    pub disease: &'static str,
    /// Recommended screening tests, in the order they should be presented.
    pub tests: &'static [&'static str],
    /// Human-readable description of how often to screen. Free text, not machine-parsed.
    pub frequency: &'static str,
    /// Baseline lifestyle advice, in presentation order.
    pub lifestyle_advice: &'static [&'static str],
    /// Base urgency of this disease's screening programme. Higher is more urgent.
    pub priority: u8,
}

/// The four recognised diseases, in catalog order.
///
/// The order here is an observable contract: the generator uses it as the
/// tie-break when two diseases carry equal risk scores.
pub static SCREENING_CATALOG: [CatalogEntry; 4] = [
    CatalogEntry {
        disease: DIABETES_TYPE_2,
        tests: &[
            "Fasting Blood Sugar Test",
            "HbA1c Test",
            "Oral Glucose Tolerance Test (OGTT)",
            "Lipid Panel",
        ],
        frequency: "Every 6 months if score > 70%",
        lifestyle_advice: &[
            "Kurangi asupan gula dan karbohidrat sederhana",
            "Olahraga teratur minimal 150 menit per minggu",
            "Jaga berat badan ideal",
            "Kelola stres dengan baik",
            "Hindari minuman bergula",
            "Perbanyak konsumsi serat",
        ],
        priority: 5,
    },
    CatalogEntry {
        disease: HYPERTENSION,
        tests: &[
            "Blood Pressure Monitoring (daily)",
            "24-hour Ambulatory Blood Pressure Monitoring",
            "Kidney Function Tests",
            "Lipid Panel",
            "ECG (Electrocardiogram)",
        ],
        frequency: "Every 3 months",
        lifestyle_advice: &[
            "Kurangi konsumsi garam (< 2.3g per hari)",
            "Olahraga rutin 30 menit setiap hari",
            "Kelola berat badan",
            "Hindari alkohol berlebihan",
            "Kelola stres dengan meditasi/yoga",
            "Perbanyak konsumsi kalium dan magnesium",
        ],
        priority: 5,
    },
    CatalogEntry {
        disease: CORONARY_HEART_DISEASE,
        tests: &[
            "Stress Test/Treadmill Test",
            "Coronary CT Angiography",
            "Troponin Blood Test",
            "Lipid Panel",
            "ECG",
            "Echocardiogram",
        ],
        frequency: "Every 3-6 months",
        lifestyle_advice: &[
            "Hindari makanan tinggi lemak jenuh",
            "Olahraga kardio 150 menit/minggu",
            "Berhenti merokok (jika perokok)",
            "Kelola kolesterol dengan diet sehat",
            "Kelola stres",
            "Istirahat cukup 7-9 jam per malam",
        ],
        priority: 4,
    },
    CatalogEntry {
        disease: STROKE,
        tests: &[
            "Carotid Ultrasound",
            "Brain MRI",
            "Echocardiogram",
            "Blood Pressure Monitoring",
            "Lipid Panel",
            "Blood Glucose Test",
        ],
        frequency: "Every 3-6 months if high risk",
        lifestyle_advice: &[
            "Kontrol tekanan darah secara ketat",
            "Kelola kolesterol tinggi",
            "Berhenti merokok",
            "Hindari alkohol berlebihan",
            "Olahraga teratur",
            "Kelola diabetes jika ada",
            "Hindari stres kronis",
        ],
        priority: 4,
    },
];

/// Looks up the catalog entry for a disease name.
///
/// Returns `None` for names outside the four recognised diseases. A miss is
/// not an error condition: the generator treats it as "no recommendation
/// produced" for that disease.
pub fn catalog_entry(disease: &str) -> Option<&'static CatalogEntry> {
    SCREENING_CATALOG.iter().find(|entry| entry.disease == disease)
}
