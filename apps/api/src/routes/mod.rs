pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assessment::handlers::handle_career_assessment;
use crate::chat::handlers::handle_chat;
use crate::screening::handlers::handle_screen_resume;
use crate::skills::handlers::{handle_analyze_skills, handle_extract_skills};
use crate::state::AppState;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/chatbot", post(handle_chat))
        .route("/career-assessment", post(handle_career_assessment))
        .route("/extract-skills", post(handle_extract_skills))
        .route("/analyze-skills", post(handle_analyze_skills))
        .route("/resume", post(handle_screen_resume))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::build_router;
    use crate::config::Config;
    use crate::llm_client::stub::StubModel;
    use crate::state::AppState;

    const BOUNDARY: &str = "----pathfinder-test-boundary";

    pub fn test_config() -> Config {
        Config {
            gemini_api_key: "test-key".to_string(),
            gemini_model: "stub".to_string(),
            gemini_base_url: "http://127.0.0.1:1".to_string(),
            llm_timeout: Duration::from_secs(1),
            max_upload_bytes: 20 * 1024 * 1024,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }

    pub fn test_router(llm: Arc<StubModel>) -> Router {
        test_router_with_config(llm, test_config())
    }

    pub fn test_router_with_config(llm: Arc<StubModel>, config: Config) -> Router {
        build_router(AppState { llm, config })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        send(app, request).await
    }

    pub async fn post_json(app: Router, uri: &str, payload: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();
        send(app, request).await
    }

    pub async fn post_raw(
        app: Router,
        uri: &str,
        content_type: &str,
        body: &'static str,
    ) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();
        send(app, request).await
    }

    /// Sends a single-file multipart form.
    pub async fn post_multipart(
        app: Router,
        uri: &str,
        field: &str,
        file_name: &str,
        content_type: Option<&str>,
        data: &[u8],
    ) -> (StatusCode, Value) {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n")
                .as_bytes(),
        );
        if let Some(ct) = content_type {
            body.extend_from_slice(format!("Content-Type: {ct}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let request = Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        send(app, request).await
    }
}
