use crate::Config;
use kh_core::{Error, LanguageModel, Result};
use std::sync::Arc;

pub mod dummy;
pub mod gemini;

pub use dummy::DummyModel;
pub use gemini::GeminiModel;

pub fn create_model(kind: &str, config: &Config) -> Result<Arc<dyn LanguageModel>> {
    match kind {
        "gemini" => Ok(Arc::new(GeminiModel::new(
            config.api_key.clone(),
            config.model_name.clone(),
        )?)),
        "dummy" => Ok(Arc::new(DummyModel::new())),
        other => Err(Error::Inference(format!("unknown model: {}", other))),
    }
}
