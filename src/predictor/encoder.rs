//! Feature encoding: raw `(age, gender label)` input to the numeric row
//! the fitted model expects.

use ndarray::{array, Array1};

use super::error::PredictorError;

/// A gender label accepted by the encoder. Matching is exact and
/// case-sensitive; anything outside the two labels is rejected rather than
/// silently defaulted, keeping the encode/model contract safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn from_label(label: &str) -> Result<Self, PredictorError> {
        match label {
            "Female" => Ok(Self::Female),
            "Male" => Ok(Self::Male),
            other => Err(PredictorError::Encoding(format!(
                "unrecognized gender label '{}', expected \"Female\" or \"Male\"",
                other
            ))),
        }
    }

    /// Numeric encoding the model was trained on: Female=0, Male=1.
    pub fn encoded(self) -> u8 {
        match self {
            Self::Female => 0,
            Self::Male => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

/// The fixed-order numeric encoding submitted to the classifier.
///
/// Column order is part of the artifact contract: the model was fitted on
/// exactly `[Age, Gender]`, and reordering would change semantics silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureVector {
    pub age: u32,
    pub gender: u8,
}

impl FeatureVector {
    /// The `[Age, Gender]` row handed to the artifact.
    pub fn to_row(&self) -> Array1<f64> {
        array![f64::from(self.age), f64::from(self.gender)]
    }
}

/// Encodes raw input into a [`FeatureVector`].
///
/// Pure and deterministic. Age is passed through numerically; range
/// enforcement (the 18-80 slider bound) is the presentation layer's job.
pub fn encode(age: u32, gender_label: &str) -> Result<FeatureVector, PredictorError> {
    let gender = Gender::from_label(gender_label)?;
    Ok(FeatureVector {
        age,
        gender: gender.encoded(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_labels_across_age_range() {
        for age in 18..=80 {
            let female = encode(age, "Female").unwrap();
            assert_eq!(female.age, age);
            assert_eq!(female.gender, 0);

            let male = encode(age, "Male").unwrap();
            assert_eq!(male.age, age);
            assert_eq!(male.gender, 1);
        }
    }

    #[test]
    fn rejects_unknown_label() {
        let err = encode(25, "Other").unwrap_err();
        assert!(matches!(err, PredictorError::Encoding(_)));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(encode(25, "female").is_err());
        assert!(encode(25, "MALE").is_err());
        assert!(encode(25, "").is_err());
    }

    #[test]
    fn row_order_is_age_then_gender() {
        let row = encode(42, "Male").unwrap().to_row();
        assert_eq!(row.to_vec(), vec![42.0, 1.0]);
    }

    #[test]
    fn out_of_range_age_passes_through() {
        // The core does not re-validate the slider bound.
        assert_eq!(encode(120, "Female").unwrap().age, 120);
    }
}
