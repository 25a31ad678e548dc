use std::path::PathBuf;
use thiserror::Error;

/// Represents the different types of errors the inference core can produce.
///
/// All variants are local to a single request or load attempt; none of them
/// should bring down the hosting process. The presentation layer is expected
/// to catch these and render a non-technical message.
#[derive(Debug, Error)]
pub enum PredictorError {
    /// Artifact present but could not be deserialized (corrupt or
    /// incompatible). Terminal for the process's inference capability.
    #[error("failed to load model artifact: {0}")]
    ModelLoad(String),
    /// No artifact at the expected location. Recoverable once an operator
    /// supplies the file; predictions are withheld until then.
    #[error("no model artifact found at {}", .0.display())]
    ModelUnavailable(PathBuf),
    /// Unrecognized gender label reached the encoder; a contract violation
    /// by the caller that fails the single request.
    #[error("encoding error: {0}")]
    Encoding(String),
    /// The artifact faulted while answering predict/predict_proba.
    #[error("prediction error: {0}")]
    Prediction(String),
    /// The artifact returned a label outside the known class set,
    /// indicating artifact/schema drift.
    #[error("model returned unknown label '{0}'")]
    UnknownLabel(String),
}
