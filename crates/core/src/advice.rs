//! General screening advice per age bracket.
//!
//! Pure configuration data for presentation collaborators. Unlike the
//! per-disease catalog this is not keyed by risk score; it is the generic
//! check-up guidance shown alongside personalised recommendations.

/// General screening tips for one age bracket.
#[derive(Debug, Clone, Copy)]
pub struct AdviceBracket {
    /// Human-readable bracket label.
    pub bracket: &'static str,
    /// Tips for this bracket, in presentation order.
    pub tips: &'static [&'static str],
}

/// The fixed age-bracket advice table, in presentation order.
pub static GENERAL_SCREENING_ADVICE: [AdviceBracket; 4] = [
    AdviceBracket {
        bracket: "Untuk Semua Usia",
        tips: &[
            "Lakukan pemeriksaan kesehatan rutin setahun sekali",
            "Vaksinasi sesuai jadwal nasional",
            "Pertahankan pola makan sehat seimbang",
            "Olahraga minimal 150 menit per minggu",
            "Kelola stres dengan baik",
            "Tidur cukup 7-9 jam setiap malam",
            "Hindari rokok dan alkohol berlebihan",
            "Monitor berat badan secara berkala",
        ],
    },
    AdviceBracket {
        bracket: "Usia 30-40 tahun",
        tips: &[
            "Screening tekanan darah setiap tahun",
            "Cholesterol screening setiap 4-6 tahun",
            "Blood sugar testing",
            "Cancer screening mulai pada usia 40",
        ],
    },
    AdviceBracket {
        bracket: "Usia 40-50 tahun",
        tips: &[
            "Screening tekanan darah setiap tahun",
            "Cholesterol screening setiap 2 tahun",
            "Diabetes screening setiap 3 tahun",
            "ECG dasar",
        ],
    },
    AdviceBracket {
        bracket: "Usia 50+ tahun",
        tips: &[
            "Screening tekanan darah 3-6 bulan",
            "Cholesterol monitoring teratur",
            "Diabetes screening setiap tahun",
            "Cardiac screening sesuai faktor risiko",
            "Cancer screening (colorectal, breast, prostate)",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_are_in_presentation_order() {
        let labels: Vec<&str> = GENERAL_SCREENING_ADVICE.iter().map(|b| b.bracket).collect();
        assert_eq!(
            labels,
            vec![
                "Untuk Semua Usia",
                "Usia 30-40 tahun",
                "Usia 40-50 tahun",
                "Usia 50+ tahun"
            ]
        );
    }

    #[test]
    fn every_bracket_carries_tips() {
        for bracket in &GENERAL_SCREENING_ADVICE {
            assert!(!bracket.tips.is_empty(), "{} has no tips", bracket.bracket);
        }
    }
}
