use crate::types::Article;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Store an article, replacing any existing entry with the same link
    async fn store_article(&self, article: &Article) -> Result<()>;

    /// Get every stored article
    async fn list_articles(&self) -> Result<Vec<Article>>;

    /// Get the most recently fetched articles, newest first
    async fn recent_articles(&self, limit: usize) -> Result<Vec<Article>>;

    /// Find articles whose title matches a `kw1|kw2|...` alternation,
    /// case-insensitive. `exclude_title` is an exact-string exclusion.
    async fn match_title_alternation(
        &self,
        pattern: &str,
        exclude_title: &str,
        limit: usize,
    ) -> Result<Vec<Article>>;

    /// Find articles whose title or summary contains the keyword,
    /// case-insensitive. `exclude_title` is an exact-string exclusion.
    async fn match_keyword(
        &self,
        keyword: &str,
        exclude_title: &str,
        limit: usize,
    ) -> Result<Vec<Article>>;
}
