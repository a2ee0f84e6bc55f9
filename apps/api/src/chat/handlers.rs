//! Axum route handler for the chat relay.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chat::prompts::build_chat_prompt;
use crate::errors::AppError;
use crate::llm_client::prompts::CAREER_STRATEGIST_SYSTEM;
use crate::state::AppState;

const UPSTREAM_FAILURE: &str = "Failed to generate AI response.";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /chatbot
///
/// Wraps the message in the career-strategist template and returns the model's text.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;

    let message = request
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::validation("Message is required."))?;

    info!(chars = message.chars().count(), "Chat message received");

    let prompt = build_chat_prompt(message);
    let reply = state
        .llm
        .generate(&prompt, CAREER_STRATEGIST_SYSTEM)
        .await
        .map_err(AppError::llm(UPSTREAM_FAILURE))?;

    Ok(Json(ChatResponse {
        reply: reply.trim().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::llm_client::stub::StubModel;
    use crate::routes::test_support::{post_json, test_router};

    #[tokio::test]
    async fn test_data_science_question_gets_reply() {
        let stub = Arc::new(StubModel::replying(
            "  **Python**, **SQL** and • statistics.\n",
        ));
        let app = test_router(stub.clone());

        let (status, body) = post_json(
            app,
            "/chatbot",
            json!({"message": "What skills should I learn for data science?"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], "**Python**, **SQL** and • statistics.");
        assert_eq!(stub.calls(), 1);
        assert!(stub
            .last_prompt()
            .unwrap()
            .contains("What skills should I learn for data science?"));
    }

    #[tokio::test]
    async fn test_missing_message_is_bad_request() {
        let stub = Arc::new(StubModel::replying("unused"));
        let (status, body) = post_json(test_router(stub.clone()), "/chatbot", json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Message is required.");
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_and_null_messages_are_bad_request() {
        for payload in [json!({"message": ""}), json!({"message": "   \n"}), json!({"message": null})] {
            let stub = Arc::new(StubModel::replying("unused"));
            let (status, body) = post_json(test_router(stub.clone()), "/chatbot", payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body["error"].is_string());
            assert_eq!(stub.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_wrong_type_is_bad_request_with_error_field() {
        let stub = Arc::new(StubModel::replying("unused"));
        let (status, body) =
            post_json(test_router(stub), "/chatbot", json!({"message": 42})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_upstream_failure_is_internal_error() {
        let stub = Arc::new(StubModel::failing());
        let (status, body) = post_json(
            test_router(stub),
            "/chatbot",
            json!({"message": "Is cloud computing a good career?"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to generate AI response."}));
    }

    #[tokio::test]
    async fn test_repeated_requests_have_same_shape() {
        let stub = Arc::new(StubModel::replying("Try a portfolio project."));
        let payload = json!({"message": "Next step after a bootcamp?"});

        let (first_status, first) =
            post_json(test_router(stub.clone()), "/chatbot", payload.clone()).await;
        let (second_status, second) =
            post_json(test_router(stub.clone()), "/chatbot", payload).await;

        assert_eq!(first_status, second_status);
        let keys = |v: &serde_json::Value| {
            v.as_object().unwrap().keys().cloned().collect::<Vec<_>>()
        };
        assert_eq!(keys(&first), keys(&second));
        assert_eq!(stub.calls(), 2);
    }
}
