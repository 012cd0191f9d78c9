use kh_core::{ArticleStore, LanguageModel};
use kh_inference::CascadeConfig;
use std::sync::Arc;

pub struct AppState {
    pub store: Arc<dyn ArticleStore>,
    pub model: Arc<dyn LanguageModel>,
    pub cascade: CascadeConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn ArticleStore>, model: Arc<dyn LanguageModel>) -> Self {
        Self {
            store,
            model,
            cascade: CascadeConfig::default(),
        }
    }
}
