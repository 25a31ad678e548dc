//! The inference engine: artifact lifecycle and prediction.
//!
//! The artifact is the only piece of state and is immutable after load, so
//! a loaded [`InterestPredictor`] can be shared freely across threads. The
//! process-wide instance lives behind a mutex-guarded cache: the first
//! successful load is memoized for the process lifetime, while an absent
//! artifact leaves the cache empty so an operator can still supply the file.

use std::sync::{Arc, Mutex};

use lazy_static::lazy_static;
use log::{info, warn};

use super::encoder::{encode, FeatureVector};
use super::error::PredictorError;
use super::{Interest, Prediction, PredictorInfo};
use crate::model::InterestModel;
use crate::model_store::ModelStore;

lazy_static! {
    static ref SHARED: Mutex<Option<Arc<InterestPredictor>>> = Mutex::new(None);
}

/// Resolution of the process-wide model: ready to serve, or degraded
/// because no artifact exists at the well-known location.
#[derive(Debug, Clone)]
pub enum ModelState {
    Ready(Arc<InterestPredictor>),
    Unavailable,
}

/// A predictor over a loaded classifier artifact.
#[derive(Debug)]
pub struct InterestPredictor {
    model: InterestModel,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<InterestPredictor>();
    }
};

impl InterestPredictor {
    /// Wraps a deserialized artifact, rejecting one with no classes.
    pub fn new(model: InterestModel) -> Result<Self, PredictorError> {
        if model.classes().is_empty() {
            return Err(PredictorError::ModelLoad(
                "artifact declares no classes".to_string(),
            ));
        }
        Ok(Self { model })
    }

    /// Returns the process-wide predictor, loading the artifact from the
    /// default [`ModelStore`] on first use.
    ///
    /// Only a successful load is cached; [`ModelState::Unavailable`] is
    /// re-checked on every call so a freshly supplied artifact is picked up
    /// without restarting the process. A corrupt artifact is an error.
    pub fn shared() -> Result<ModelState, PredictorError> {
        let mut cached = SHARED.lock().expect("shared predictor lock poisoned");
        if let Some(predictor) = cached.as_ref() {
            return Ok(ModelState::Ready(Arc::clone(predictor)));
        }

        let store = ModelStore::new_default();
        match store.load()? {
            Some(model) => {
                let predictor = Arc::new(Self::new(model)?);
                *cached = Some(Arc::clone(&predictor));
                info!("Model artifact cached for the process lifetime");
                Ok(ModelState::Ready(predictor))
            }
            None => {
                warn!(
                    "No model artifact at {:?}, serving degraded",
                    store.model_path()
                );
                Ok(ModelState::Unavailable)
            }
        }
    }

    /// Returns information about the loaded artifact.
    pub fn info(&self) -> PredictorInfo {
        PredictorInfo {
            num_classes: self.model.classes().len(),
            class_labels: self.model.classes().to_vec(),
        }
    }

    /// Predicts the interest label and confidence for an encoded input.
    ///
    /// Stateless and idempotent: the same feature vector always yields the
    /// same label and confidence. Confidence is the maximum class posterior
    /// probability scaled to a percentage.
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictorError> {
        let row = features.to_row();

        let label = self
            .model
            .predict(row.view())
            .map_err(|e| PredictorError::Prediction(e.to_string()))?;
        let interest = Interest::from_label(label)
            .ok_or_else(|| PredictorError::UnknownLabel(label.to_string()))?;

        let proba = self
            .model
            .predict_proba(row.view())
            .map_err(|e| PredictorError::Prediction(e.to_string()))?;
        let confidence = proba.iter().copied().fold(0.0_f64, f64::max) * 100.0;

        Ok(Prediction {
            interest,
            confidence,
        })
    }
}

/// End-to-end convenience: encode raw input and predict against the
/// process-wide model, failing with [`PredictorError::ModelUnavailable`]
/// when no artifact has been supplied.
pub fn predict_interest(age: u32, gender_label: &str) -> Result<Prediction, PredictorError> {
    let features = encode(age, gender_label)?;
    match InterestPredictor::shared()? {
        ModelState::Ready(predictor) => predictor.predict(&features),
        ModelState::Unavailable => Err(PredictorError::ModelUnavailable(
            ModelStore::new_default().model_path(),
        )),
    }
}
