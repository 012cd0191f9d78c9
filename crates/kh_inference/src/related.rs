use kh_core::{ArticleStore, RelationResult};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Hand-tuned cascade limits, kept overridable rather than baked in.
#[derive(Debug, Clone)]
pub struct CascadeConfig {
    /// Ceiling on the related list and the primary-stage query limit.
    pub max_related: usize,
    /// Fallback runs only when the primary stage yields fewer than this.
    pub fallback_threshold: usize,
    /// Per-keyword query limit in the fallback stage.
    pub per_keyword_limit: usize,
    /// At most this many keywords are used, in list order.
    pub max_keywords: usize,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            max_related: 6,
            fallback_threshold: 3,
            per_keyword_limit: 3,
            max_keywords: 5,
        }
    }
}

/// Two-stage related-articles lookup: one precise title-alternation query
/// first, then per-keyword title/summary queries only if that under-delivers.
/// Store round trips are bounded by 1 + number of keywords.
pub struct RelatedFinder {
    store: Arc<dyn ArticleStore>,
    config: CascadeConfig,
}

impl fmt::Debug for RelatedFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelatedFinder")
            .field("store", &"<dyn ArticleStore>")
            .field("config", &self.config)
            .finish()
    }
}

impl RelatedFinder {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self::with_config(store, CascadeConfig::default())
    }

    pub fn with_config(store: Arc<dyn ArticleStore>, config: CascadeConfig) -> Self {
        Self { store, config }
    }

    /// Never fails: a store fault degrades to an empty related list with the
    /// keywords still echoed back.
    pub async fn find_related(&self, exclude_title: &str, keywords: Vec<String>) -> RelationResult {
        let mut keywords = keywords;
        keywords.truncate(self.config.max_keywords);

        if keywords.is_empty() {
            return RelationResult::empty(keywords);
        }

        let pattern = keywords.join("|");
        let mut related = match self
            .store
            .match_title_alternation(&pattern, exclude_title, self.config.max_related)
            .await
        {
            Ok(articles) => articles,
            Err(e) => {
                warn!("related lookup: primary query failed: {}", e);
                return RelationResult::empty(keywords);
            }
        };
        debug!(
            "related lookup: primary stage matched {} for {:?}",
            related.len(),
            pattern
        );

        if related.len() < self.config.fallback_threshold {
            for keyword in &keywords {
                let extra = match self
                    .store
                    .match_keyword(keyword, exclude_title, self.config.per_keyword_limit)
                    .await
                {
                    Ok(articles) => articles,
                    Err(e) => {
                        warn!("related lookup: fallback query for {:?} failed: {}", keyword, e);
                        break;
                    }
                };
                for candidate in extra {
                    if !related.iter().any(|r| r.title == candidate.title) {
                        related.push(candidate);
                    }
                }
                if related.len() >= self.config.max_related {
                    break;
                }
            }
        }

        related.truncate(self.config.max_related);
        RelationResult { related, keywords }
    }
}
