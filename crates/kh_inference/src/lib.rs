pub mod assistant;
pub mod keywords;
pub mod models;
pub mod related;
pub mod sections;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
}

pub use keywords::KeywordExtractor;
pub use models::create_model;
pub use related::{CascadeConfig, RelatedFinder};
pub use sections::{parse_sections, render_sections};

pub mod prelude {
    pub use super::assistant::Assistant;
    pub use super::keywords::KeywordExtractor;
    pub use super::models::create_model;
    pub use super::related::{CascadeConfig, RelatedFinder};
    pub use super::sections::{parse_sections, render_sections};
    pub use super::Config;
    pub use kh_core::{Article, Error, LanguageModel, RelationResult, Result, Section};
}
