//! A thread-safe demographic interest classifier.
//!
//! Predicts a categorical viewing-interest label (Animation, Action or
//! Drama) from two features, age and gender, using a pre-fitted
//! decision-tree artifact loaded from disk. Training is out of scope; the
//! crate only encodes input, invokes the artifact and derives a confidence
//! percentage from the class probabilities.
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use interest_predictor::{encode, InterestPredictor, ModelStore};
//!
//! let model = ModelStore::new_default()
//!     .load()?
//!     .expect("model artifact not present");
//! let predictor = InterestPredictor::new(model)?;
//!
//! let prediction = predictor.predict(&encode(25, "Female")?)?;
//! println!(
//!     "{} {} ({:.1}%)",
//!     prediction.interest.glyph(),
//!     prediction.interest,
//!     prediction.display_confidence()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Degraded mode
//!
//! An absent artifact is not a crash: [`ModelStore::load`] returns
//! `Ok(None)` and the process-wide [`InterestPredictor::shared`] accessor
//! reports [`ModelState::Unavailable`], letting the presentation layer
//! render a notice instead of a prediction.
//!
//! # Thread Safety
//!
//! The artifact is immutable after load, so a predictor can be shared
//! across threads with `Arc`; `InterestPredictor::shared()` hands out a
//! process-wide instance memoized behind a mutex.

pub mod model;
pub mod model_store;
pub mod predictor;

pub use model::{InterestModel, ModelFault, TreeNode};
pub use model_store::{ModelStore, MODEL_FILE};
pub use predictor::{
    encode, glyph_for, predict_interest, FeatureVector, Gender, Interest, InterestPredictor,
    ModelState, Prediction, PredictorError, PredictorInfo,
};

pub fn init_logger() {
    env_logger::init();
}
