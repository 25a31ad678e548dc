//! The classification inference pipeline: feature encoding, model
//! invocation, and confidence derivation.

pub mod encoder;
pub mod engine;
pub mod error;

pub use encoder::{encode, FeatureVector, Gender};
pub use engine::{predict_interest, InterestPredictor, ModelState};
pub use error::PredictorError;

use std::fmt;

/// Glyph shown for labels outside the known class set.
const FALLBACK_GLYPH: &str = "\u{1f3af}";

/// The closed set of interest classes the artifact was fitted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interest {
    Animation,
    Action,
    Drama,
}

impl Interest {
    pub const ALL: [Interest; 3] = [Interest::Animation, Interest::Action, Interest::Drama];

    /// Parses a class label from the artifact; `None` for anything outside
    /// the known set (the engine surfaces that as an error, never a guess).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Animation" => Some(Self::Animation),
            "Action" => Some(Self::Action),
            "Drama" => Some(Self::Drama),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Animation => "Animation",
            Self::Action => "Action",
            Self::Drama => "Drama",
        }
    }

    /// Display glyph for the presentation layer.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Animation => "\u{1f3ac}",
            Self::Action => "\u{1f4a5}",
            Self::Drama => "\u{1f3ad}",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display glyph for an arbitrary label, with a generic fallback for labels
/// outside the three known classes.
pub fn glyph_for(label: &str) -> &'static str {
    match Interest::from_label(label) {
        Some(interest) => interest.glyph(),
        None => FALLBACK_GLYPH,
    }
}

/// The outcome of a single prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub interest: Interest,
    /// Maximum class posterior probability scaled to a percentage, in
    /// [0, 100]. Raw value; no calibration or temperature scaling.
    pub confidence: f64,
}

impl Prediction {
    /// Confidence rounded to one decimal place for display.
    pub fn display_confidence(&self) -> f64 {
        (self.confidence * 10.0).round() / 10.0
    }
}

/// Returns information about a predictor's loaded artifact.
#[derive(Debug, Clone)]
pub struct PredictorInfo {
    pub num_classes: usize,
    pub class_labels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trip() {
        for interest in Interest::ALL {
            assert_eq!(Interest::from_label(interest.as_str()), Some(interest));
        }
        assert_eq!(Interest::from_label("Comedy"), None);
    }

    #[test]
    fn glyph_lookup_falls_back_for_unknown_labels() {
        assert_eq!(glyph_for("Animation"), "\u{1f3ac}");
        assert_eq!(glyph_for("Action"), "\u{1f4a5}");
        assert_eq!(glyph_for("Drama"), "\u{1f3ad}");
        assert_eq!(glyph_for("Comedy"), FALLBACK_GLYPH);
        assert_eq!(glyph_for(""), FALLBACK_GLYPH);
    }

    #[test]
    fn display_confidence_rounds_to_one_decimal() {
        let prediction = Prediction {
            interest: Interest::Drama,
            confidence: 66.666,
        };
        assert_eq!(prediction.display_confidence(), 66.7);
    }
}
