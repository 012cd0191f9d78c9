pub mod backends;

pub use backends::*;

pub mod prelude {
    pub use super::backends::*;
    pub use kh_core::{Article, ArticleStore, Error, Result};
}
