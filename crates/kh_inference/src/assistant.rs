use crate::sections::parse_sections;
use kh_core::{Article, ArticleStore, LanguageModel, Result, Section};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// How many recent articles are folded into the chat prompt.
const CONTEXT_ARTICLES: usize = 40;

#[derive(Debug, Clone, serde::Serialize)]
pub struct ChatReply {
    pub text: String,
    pub sections: Vec<Section>,
}

/// News assistant: answers reader questions grounded in recent headlines and
/// produces detailed article summaries.
pub struct Assistant {
    model: Arc<dyn LanguageModel>,
    store: Arc<dyn ArticleStore>,
}

impl fmt::Debug for Assistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assistant")
            .field("model", &"<dyn LanguageModel>")
            .field("store", &"<dyn ArticleStore>")
            .finish()
    }
}

impl Assistant {
    pub fn new(model: Arc<dyn LanguageModel>, store: Arc<dyn ArticleStore>) -> Self {
        Self { model, store }
    }

    pub async fn chat(&self, query: &str) -> Result<ChatReply> {
        let articles = match self.store.recent_articles(CONTEXT_ARTICLES).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!("chat: recent-articles lookup failed, answering without context: {}", e);
                Vec::new()
            }
        };

        let prompt = format!(
            "You are a news assistant. Your goal is to provide helpful, detailed, and accurate \
             information about news and current events.\n\
             {}\n\
             Guidelines for your response:\n\
             - Use professional and engaging language.\n\
             - Provide detailed answers with context when possible.\n\
             - Use Markdown headers (## and ###) for organization.\n\
             - Use bullet points (-) or numbered lists (1.) for clarity.\n\
             - You can use **bold** or *italic* text for emphasis.\n\
             - If referring to specific news above, mention the source.\n\
             - If the user asks for a summary or what's new, use the RECENT NEWS CONTEXT provided.\n\
             - If the context doesn't cover the query, use your general knowledge but mention \
             you're doing so.\n\n\
             User Query: {}",
            news_context(&articles),
            query
        );

        let text = self.model.complete(&prompt).await?.trim().to_string();
        let sections = parse_sections(&text);
        Ok(ChatReply { text, sections })
    }

    pub async fn summarize(&self, title: &str, summary: &str) -> Result<String> {
        let prompt = format!(
            "You are a professional news editor. Summarize this news article with more detail \
             than a standard TL;DR.\n\n\
             Provide:\n\
             1. A comprehensive summary paragraph (3-5 sentences) explaining the key events, \
             context, and significance.\n\
             2. A list of 2-3 key takeaway bullet points (start each with '- ').\n\n\
             Keep the tone informative and objective. Use plain text but keep the bullet point \
             structure.\n\n\
             Title: {}\nContent: {}\n\nDETAILED SUMMARY:",
            title, summary
        );

        let reply = self.model.complete(&prompt).await?;
        Ok(strip_emphasis(reply.trim()))
    }
}

/// Format recent articles as the numbered context block the chat prompt
/// expects; empty when there are no articles.
pub fn news_context(articles: &[Article]) -> String {
    if articles.is_empty() {
        return String::new();
    }
    let mut context = String::from("\nRECENT NEWS CONTEXT:\n");
    for (i, article) in articles.iter().enumerate() {
        context.push_str(&format!(
            "{}. [{}] {} ({})\n",
            i + 1,
            article.category,
            article.title,
            article.source
        ));
    }
    context
}

/// Drop markdown emphasis and header markers, keeping line and bullet
/// structure intact for the client.
fn strip_emphasis(text: &str) -> String {
    text.replace("**", "")
        .replace("__", "")
        .replace("###", "")
        .replace("##", "")
        .replace('#', "")
        .replace('`', "")
}
