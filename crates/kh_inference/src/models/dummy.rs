use async_trait::async_trait;
use kh_core::{LanguageModel, Result};

/// Offline stand-in for a real model. Keyword prompts get a fixed keyword
/// list, everything else gets a short canned briefing, so the rest of the
/// pipeline can run without an API key.
#[derive(Debug, Default)]
pub struct DummyModel;

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LanguageModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        if prompt.trim_end().ends_with("Keywords:") {
            return Ok("news, local, update".to_string());
        }
        Ok("## Briefing\nNothing new to report.\n\n- check back later".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_keyword_prompts_get_a_comma_list() {
        let model = DummyModel::new();
        let reply = model.complete("suggest 5 keywords\n\nKeywords:").await.unwrap();
        assert!(reply.contains(','));
    }

    #[tokio::test]
    async fn test_other_prompts_get_markdown() {
        let model = DummyModel::new();
        let reply = model.complete("What happened today?").await.unwrap();
        assert!(reply.starts_with("## "));
    }
}
