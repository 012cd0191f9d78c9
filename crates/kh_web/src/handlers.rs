use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use kh_core::{Article, RelationResult};
use kh_inference::assistant::Assistant;
use kh_inference::{KeywordExtractor, RelatedFinder};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct RelatedRequest {
    pub title: String,
    pub category: String,
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub title: String,
    pub summary: String,
}

pub async fn list_articles(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let articles = match state.store.list_articles().await {
        Ok(articles) => articles,
        Err(e) => {
            warn!("listing articles failed: {}", e);
            Vec::new()
        }
    };
    Json(json!({ "articles": articles }))
}

pub async fn create_article(
    State(state): State<Arc<AppState>>,
    Json(article): Json<Article>,
) -> impl IntoResponse {
    match state.store.store_article(&article).await {
        Ok(()) => (StatusCode::CREATED, Json(article)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": e.to_string() })),
        )
            .into_response(),
    }
}

pub async fn related_articles(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RelatedRequest>,
) -> Json<RelationResult> {
    let extractor = KeywordExtractor::new(state.model.clone());
    let keywords = extractor
        .extract(&request.title, &request.category, &request.summary)
        .await;

    let finder = RelatedFinder::with_config(state.store.clone(), state.cascade.clone());
    Json(finder.find_related(&request.title, keywords).await)
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    let assistant = Assistant::new(state.model.clone(), state.store.clone());
    match assistant.chat(&request.query).await {
        Ok(reply) => Json(json!({
            "text": reply.text,
            "formatted": true,
            "sections": reply.sections,
        })),
        Err(e) => {
            warn!("chat failed: {}", e);
            Json(json!({ "error": e.to_string() }))
        }
    }
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeRequest>,
) -> impl IntoResponse {
    let assistant = Assistant::new(state.model.clone(), state.store.clone());
    match assistant.summarize(&request.title, &request.summary).await {
        Ok(tldr) => Json(json!({ "tldr": tldr })).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": format!("Summarization failed: {}", e) })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_app;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use chrono::Utc;
    use kh_inference::models::DummyModel;
    use kh_storage::MemoryStorage;
    use kh_core::ArticleStore;
    use tower::ServiceExt;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            source: "test".to_string(),
            category: "Politics".to_string(),
            summary: "a summary".to_string(),
            link: format!("http://test.com/{}", title.replace(' ', "-")),
            published: "today".to_string(),
            fetched_at: Utc::now(),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_articles_empty() {
        let app = create_app(AppState::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(DummyModel::new()),
        ));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/articles")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["articles"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_related_round_trip() {
        let store = Arc::new(MemoryStorage::new());
        store
            .store_article(&article("Local Elections Update"))
            .await
            .unwrap();
        store
            .store_article(&article("Weather Watch"))
            .await
            .unwrap();
        let app = create_app(AppState::new(store, Arc::new(DummyModel::new())));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/related")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"title":"City Hall Shakeup","category":"Politics","summary":"local government news"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        // the dummy model always suggests "news, local, update"
        assert_eq!(json["keywords"][1], "local");
        assert_eq!(json["related"][0]["title"], "Local Elections Update");
    }

    #[tokio::test]
    async fn test_chat_returns_sections() {
        let app = create_app(AppState::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(DummyModel::new()),
        ));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"query":"what's new?"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["formatted"], true);
        assert_eq!(json["sections"][0]["type"], "header");
    }
}
