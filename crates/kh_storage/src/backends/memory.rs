use async_trait::async_trait;
use kh_core::{Article, ArticleStore, Error, Result};
use regex::Regex;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct MemoryStore {
    articles: Vec<Article>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
        }
    }

    pub fn store_article(&mut self, article: &Article) -> Result<()> {
        if let Some(existing) = self.articles.iter_mut().find(|a| a.link == article.link) {
            *existing = article.clone();
        } else {
            self.articles.push(article.clone());
        }
        Ok(())
    }

    pub fn list_articles(&self) -> Result<Vec<Article>> {
        Ok(self.articles.clone())
    }

    pub fn recent_articles(&self, limit: usize) -> Result<Vec<Article>> {
        let mut articles = self.articles.clone();
        articles.sort_by(|a, b| b.fetched_at.cmp(&a.fetched_at));
        Ok(articles.into_iter().take(limit).collect())
    }

    pub fn match_title_alternation(
        &self,
        pattern: &str,
        exclude_title: &str,
        limit: usize,
    ) -> Result<Vec<Article>> {
        // alternates are plain keywords, not regex fragments; escape each so
        // metacharacters in extracted keywords cannot break the query
        let escaped = pattern
            .split('|')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        let re = Regex::new(&format!("(?i){}", escaped))
            .map_err(|e| Error::Storage(format!("bad title pattern {:?}: {}", pattern, e)))?;
        Ok(self
            .articles
            .iter()
            .filter(|a| a.title != exclude_title && re.is_match(&a.title))
            .take(limit)
            .cloned()
            .collect())
    }

    pub fn match_keyword(
        &self,
        keyword: &str,
        exclude_title: &str,
        limit: usize,
    ) -> Result<Vec<Article>> {
        let needle = keyword.to_lowercase();
        Ok(self
            .articles
            .iter()
            .filter(|a| {
                a.title != exclude_title
                    && (a.title.to_lowercase().contains(&needle)
                        || a.summary.to_lowercase().contains(&needle))
            })
            .take(limit)
            .cloned()
            .collect())
    }
}

pub struct MemoryStorage {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new())),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleStore for MemoryStorage {
    async fn store_article(&self, article: &Article) -> Result<()> {
        let mut store = self.store.write().await;
        store.store_article(article)
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        let store = self.store.read().await;
        store.list_articles()
    }

    async fn recent_articles(&self, limit: usize) -> Result<Vec<Article>> {
        let store = self.store.read().await;
        store.recent_articles(limit)
    }

    async fn match_title_alternation(
        &self,
        pattern: &str,
        exclude_title: &str,
        limit: usize,
    ) -> Result<Vec<Article>> {
        let store = self.store.read().await;
        store.match_title_alternation(pattern, exclude_title, limit)
    }

    async fn match_keyword(
        &self,
        keyword: &str,
        exclude_title: &str,
        limit: usize,
    ) -> Result<Vec<Article>> {
        let store = self.store.read().await;
        store.match_keyword(keyword, exclude_title, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn article(title: &str, summary: &str) -> Article {
        Article {
            title: title.to_string(),
            source: "test".to_string(),
            category: "Politics".to_string(),
            summary: summary.to_string(),
            link: format!("http://test.com/{}", title.replace(' ', "-")),
            published: "today".to_string(),
            fetched_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_store_replaces_same_link() {
        let storage = MemoryStorage::new();
        let mut a = article("Budget Talks Stall", "no deal yet");
        storage.store_article(&a).await.unwrap();
        a.summary = "deal reached".to_string();
        storage.store_article(&a).await.unwrap();

        let articles = storage.list_articles().await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].summary, "deal reached");
    }

    #[tokio::test]
    async fn test_recent_articles_newest_first() {
        let storage = MemoryStorage::new();
        let mut old = article("Old Story", "stale");
        old.fetched_at = Utc::now() - Duration::hours(2);
        storage.store_article(&old).await.unwrap();
        storage
            .store_article(&article("New Story", "fresh"))
            .await
            .unwrap();

        let recent = storage.recent_articles(1).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].title, "New Story");
    }

    #[tokio::test]
    async fn test_title_alternation_is_case_insensitive() {
        let storage = MemoryStorage::new();
        storage
            .store_article(&article("Election Day Looms", "polls open soon"))
            .await
            .unwrap();
        storage
            .store_article(&article("Budget Talks Stall", "no deal yet"))
            .await
            .unwrap();
        storage
            .store_article(&article("Sports Roundup", "scores"))
            .await
            .unwrap();

        let matches = storage
            .match_title_alternation("election|budget", "", 6)
            .await
            .unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[tokio::test]
    async fn test_exclude_title_is_exact() {
        let storage = MemoryStorage::new();
        storage
            .store_article(&article("Budget Talks Stall", "no deal yet"))
            .await
            .unwrap();
        storage
            .store_article(&article("Budget Talks Resume", "back at the table"))
            .await
            .unwrap();

        let matches = storage
            .match_title_alternation("budget", "Budget Talks Stall", 6)
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Budget Talks Resume");
    }

    #[tokio::test]
    async fn test_alternation_treats_keywords_as_literals() {
        let storage = MemoryStorage::new();
        storage
            .store_article(&article("AI (ML) Boom Continues", "models everywhere"))
            .await
            .unwrap();
        storage
            .store_article(&article("C++ Standard Update", "new release"))
            .await
            .unwrap();

        // metacharacters in extracted keywords must not break the query
        let matches = storage
            .match_title_alternation("ai (ml|rust", "", 6)
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "AI (ML) Boom Continues");

        let matches = storage
            .match_title_alternation("c++", "", 6)
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[tokio::test]
    async fn test_keyword_matches_summary_too() {
        let storage = MemoryStorage::new();
        storage
            .store_article(&article("Markets Close Mixed", "budget worries weigh on stocks"))
            .await
            .unwrap();

        let matches = storage.match_keyword("BUDGET", "", 3).await.unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[tokio::test]
    async fn test_match_respects_limit() {
        let storage = MemoryStorage::new();
        for i in 0..5 {
            storage
                .store_article(&article(&format!("Election Update {}", i), "polls"))
                .await
                .unwrap();
        }

        let matches = storage
            .match_title_alternation("election", "", 3)
            .await
            .unwrap();
        assert_eq!(matches.len(), 3);
    }
}
