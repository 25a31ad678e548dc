use std::env;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use log;

use crate::model::InterestModel;
use crate::predictor::PredictorError;

/// File name of the artifact inside the store directory.
pub const MODEL_FILE: &str = "model.msgpack";

/// Resolves the well-known artifact location and loads the fitted model.
///
/// An absent artifact is not an error: `load` returns `Ok(None)` so callers
/// can serve a degraded response while an operator supplies the file. A
/// present-but-undecodable artifact is a [`PredictorError::ModelLoad`] and
/// is terminal for the serving capability.
#[derive(Debug, Clone)]
pub struct ModelStore {
    model_dir: PathBuf,
}

impl ModelStore {
    /// Creates a store rooted at the default artifact directory.
    pub fn new_default() -> Self {
        Self::new(Self::default_model_dir())
    }

    /// Returns the default artifact directory.
    pub fn default_model_dir() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var("INTEREST_PREDICTOR_CACHE") {
            return PathBuf::from(path);
        }

        // 2. Use platform-specific cache directory
        if let Some(cache_dir) = dirs::cache_dir() {
            return cache_dir.join("interest-predictor");
        }

        // 3. Fallback to user's home directory
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(".cache").join("interest-predictor");
        }

        // 4. If all else fails, use system temp directory (platform agnostic)
        env::temp_dir().join("interest-predictor")
    }

    pub fn new<P: AsRef<Path>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.as_ref().to_path_buf(),
        }
    }

    pub fn model_path(&self) -> PathBuf {
        self.model_dir.join(MODEL_FILE)
    }

    pub fn is_model_present(&self) -> bool {
        let path = self.model_path();
        log::info!("Checking for model artifact at {:?} (exists: {})", path, path.exists());
        path.exists()
    }

    /// Deserializes the artifact, or returns `Ok(None)` if the file is absent.
    pub fn load(&self) -> Result<Option<InterestModel>, PredictorError> {
        let path = self.model_path();
        if !path.exists() {
            log::info!("No model artifact at {:?}", path);
            return Ok(None);
        }

        let file = fs::File::open(&path).map_err(|e| {
            PredictorError::ModelLoad(format!("failed to open {}: {}", path.display(), e))
        })?;
        let model: InterestModel =
            rmp_serde::decode::from_read(BufReader::new(file)).map_err(|e| {
                PredictorError::ModelLoad(format!("failed to decode {}: {}", path.display(), e))
            })?;

        log::info!(
            "Loaded model artifact from {:?} ({} classes)",
            path,
            model.classes().len()
        );
        Ok(Some(model))
    }

    /// Persists an artifact into the store, creating the directory if needed.
    pub fn save(&self, model: &InterestModel) -> Result<(), PredictorError> {
        fs::create_dir_all(&self.model_dir).map_err(|e| {
            PredictorError::ModelLoad(format!(
                "failed to create {}: {}",
                self.model_dir.display(),
                e
            ))
        })?;

        let path = self.model_path();
        let file = fs::File::create(&path).map_err(|e| {
            PredictorError::ModelLoad(format!("failed to create {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        rmp_serde::encode::write_named(&mut writer, model).map_err(|e| {
            PredictorError::ModelLoad(format!("failed to encode {}: {}", path.display(), e))
        })?;

        log::info!("Saved model artifact to {:?}", path);
        Ok(())
    }
}
