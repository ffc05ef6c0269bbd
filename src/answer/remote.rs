use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::{timeout, Duration};

use super::{AnswerError, Answerer};

#[derive(Serialize)]
struct BackendRequest<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Deserialize)]
struct BackendResponse {
    answer: String,
}

/// Forwards questions to an HTTP backend speaking the same
/// `{"question","context"} -> {"answer"}` shape as `/ask`.
pub struct RemoteAnswerer {
    client: Client,
    backend_url: String,
    timeout_ms: u64,
}

impl RemoteAnswerer {
    pub fn new(client: Client, backend_url: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            client,
            backend_url: backend_url.into(),
            timeout_ms,
        }
    }

    async fn call(&self, question: &str, context: &str) -> Result<String, AnswerError> {
        let response = self
            .client
            .post(&self.backend_url)
            .json(&BackendRequest { question, context })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(AnswerError::Backend { status, body });
        }

        let body: BackendResponse = response.json().await?;
        Ok(body.answer)
    }
}

#[async_trait]
impl Answerer for RemoteAnswerer {
    async fn answer(&self, question: &str, context: &str) -> Result<String, AnswerError> {
        timeout(
            Duration::from_millis(self.timeout_ms),
            self.call(question, context),
        )
        .await
        .map_err(|_| AnswerError::Timeout)?
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};

    async fn spawn_backend(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/answer")
    }

    #[tokio::test]
    async fn reports_backend_status_and_body() {
        let app = Router::new().route(
            "/answer",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "model loading") }),
        );
        let url = spawn_backend(app).await;

        let err = RemoteAnswerer::new(Client::new(), url, 5_000)
            .answer("q", "c")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "answer backend returned 503: model loading"
        );
    }

    #[tokio::test]
    async fn success_without_answer_field_is_a_request_error() {
        let app = Router::new().route(
            "/answer",
            post(|| async { Json(serde_json::json!({ "text": "no answer key" })) }),
        );
        let url = spawn_backend(app).await;

        let err = RemoteAnswerer::new(Client::new(), url, 5_000)
            .answer("q", "c")
            .await
            .unwrap_err();
        assert!(matches!(err, AnswerError::Request(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn slow_backend_times_out() {
        let app = Router::new().route(
            "/answer",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(serde_json::json!({ "answer": "late" }))
            }),
        );
        let url = spawn_backend(app).await;

        let err = RemoteAnswerer::new(Client::new(), url, 50)
            .answer("q", "c")
            .await
            .unwrap_err();
        assert!(matches!(err, AnswerError::Timeout));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_request_error() {
        let err = RemoteAnswerer::new(Client::new(), "http://127.0.0.1:1/answer", 5_000)
            .answer("q", "c")
            .await
            .unwrap_err();
        assert!(matches!(err, AnswerError::Request(_)));
    }
}
