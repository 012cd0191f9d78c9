use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait LanguageModel: Send + Sync {
    fn name(&self) -> &str;

    /// Send a prompt and return the model's text reply
    async fn complete(&self, prompt: &str) -> Result<String>;
}
