use kh_core::LanguageModel;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

pub const MAX_KEYWORDS: usize = 5;

/// Asks the model for search keywords describing an article. Failures
/// degrade to an empty list so the related-articles lookup can still
/// answer with an empty result.
pub struct KeywordExtractor {
    model: Arc<dyn LanguageModel>,
}

impl fmt::Debug for KeywordExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordExtractor")
            .field("model", &"<dyn LanguageModel>")
            .finish()
    }
}

impl KeywordExtractor {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub async fn extract(&self, title: &str, category: &str, summary: &str) -> Vec<String> {
        let prompt = format!(
            "Given this news article, suggest {} search keywords (single words) that would help \
             find related news articles. Return ONLY the keywords separated by commas, nothing else.\n\n\
             Title: {}\nCategory: {}\nSummary: {}\n\nKeywords:",
            MAX_KEYWORDS, title, category, summary
        );

        match self.model.complete(&prompt).await {
            Ok(reply) => parse_keywords(&reply),
            Err(e) => {
                warn!("keyword extraction failed: {}", e);
                Vec::new()
            }
        }
    }
}

/// Split a comma-separated model reply into lowercase, trimmed keywords,
/// dropping empties and capping at [`MAX_KEYWORDS`].
pub fn parse_keywords(reply: &str) -> Vec<String> {
    reply
        .split(',')
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .take(MAX_KEYWORDS)
        .collect()
}
