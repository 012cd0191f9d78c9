pub mod error;
pub mod models;
pub mod storage;
pub mod types;

pub use error::Error;
pub use models::LanguageModel;
pub use storage::ArticleStore;
pub use types::{Article, RelationResult, Section};

pub type Result<T> = std::result::Result<T, Error>;
