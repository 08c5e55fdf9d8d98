//! Core domain types for the admissions prediction service.
//!
//! This crate provides the types shared between the serving and training
//! sides:
//!
//! - [`Applicant`] — the seven-field applicant feature record
//! - [`FEATURE_COLUMNS`] — the fixed column order the model is trained with
//!
//! # Example
//!
//! ```rust
//! use admit_core::{Applicant, FEATURE_COLUMNS};
//!
//! let applicant = Applicant {
//!     gre_score: 337.0,
//!     toefl_score: 118.0,
//!     university_rating: 4.0,
//!     sop: 4.5,
//!     lor: 4.5,
//!     cgpa: 9.65,
//!     research: 1.0,
//! };
//!
//! let features = applicant.to_features();
//! assert_eq!(features.len(), FEATURE_COLUMNS.len());
//! ```

use serde::{Deserialize, Serialize};

/// Column order the regression model is trained with.
///
/// Inference must feed features in exactly this order. The mapping from
/// [`Applicant`] fields to positions is [`Applicant::to_features`];
/// reordering either side silently produces wrong predictions rather than
/// an error, so both are pinned here and asserted in tests.
pub const FEATURE_COLUMNS: [&str; 7] = [
    "GRE_Score",
    "TOEFL_Score",
    "University_Rating",
    "SOP",
    "LOR",
    "CGPA",
    "Research",
];

/// Applicant feature record accepted by the predict endpoint.
///
/// All seven fields are required and numeric; a missing or non-numeric
/// field is a deserialization error. No range checks are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    /// GRE score.
    #[serde(rename = "GRE_Score")]
    pub gre_score: f64,
    /// TOEFL score.
    #[serde(rename = "TOEFL_Score")]
    pub toefl_score: f64,
    /// University rating.
    #[serde(rename = "University_Rating")]
    pub university_rating: f64,
    /// Statement-of-purpose strength.
    #[serde(rename = "SOP")]
    pub sop: f64,
    /// Letter-of-recommendation strength.
    #[serde(rename = "LOR")]
    pub lor: f64,
    /// Undergraduate CGPA.
    #[serde(rename = "CGPA")]
    pub cgpa: f64,
    /// Research experience flag (0 or 1).
    #[serde(rename = "Research")]
    pub research: f64,
}

impl Applicant {
    /// Feature vector in [`FEATURE_COLUMNS`] order.
    pub fn to_features(&self) -> [f64; 7] {
        [
            self.gre_score,
            self.toefl_score,
            self.university_rating,
            self.sop,
            self.lor,
            self.cgpa,
            self.research,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "GRE_Score": 337,
            "TOEFL_Score": 118,
            "University_Rating": 4,
            "SOP": 4.5,
            "LOR": 4.5,
            "CGPA": 9.65,
            "Research": 1
        })
    }

    #[test]
    fn test_feature_order_matches_columns() {
        let applicant = Applicant {
            gre_score: 1.0,
            toefl_score: 2.0,
            university_rating: 3.0,
            sop: 4.0,
            lor: 5.0,
            cgpa: 6.0,
            research: 7.0,
        };

        assert_eq!(applicant.to_features(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(
            FEATURE_COLUMNS,
            [
                "GRE_Score",
                "TOEFL_Score",
                "University_Rating",
                "SOP",
                "LOR",
                "CGPA",
                "Research",
            ]
        );
    }

    #[test]
    fn test_deserializes_integers_and_floats() {
        let applicant: Applicant = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(applicant.gre_score, 337.0);
        assert_eq!(applicant.cgpa, 9.65);
        assert_eq!(applicant.research, 1.0);
    }

    #[test]
    fn test_rejects_missing_field() {
        for column in FEATURE_COLUMNS {
            let mut value = sample_json();
            value.as_object_mut().unwrap().remove(column);
            let result: Result<Applicant, _> = serde_json::from_value(value);
            assert!(result.is_err(), "payload without {column} should be rejected");
        }
    }

    #[test]
    fn test_rejects_non_numeric_field() {
        let mut value = sample_json();
        value["CGPA"] = serde_json::json!("high");
        let result: Result<Applicant, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trips_wire_names() {
        let applicant: Applicant = serde_json::from_value(sample_json()).unwrap();
        let value = serde_json::to_value(&applicant).unwrap();
        for column in FEATURE_COLUMNS {
            assert!(value.get(column).is_some(), "missing {column} in output");
        }
    }
}
