use crate::types::greeting::GreetingResponse;

pub const HELLO_PATH: &str = "/api/hello";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(reqwest::Error),
    #[error("{status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid greeting payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Issues `GET /api/hello` against one backend.
#[derive(Debug, Clone)]
pub struct GreetingClient {
    http: reqwest::Client,
    base_url: String,
}

impl GreetingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn hello_url(&self) -> String {
        format!("{}{HELLO_PATH}", self.base_url.trim_end_matches('/'))
    }

    pub async fn fetch_greeting(&self) -> Result<GreetingResponse, FetchError> {
        let url = self.hello_url();
        tracing::debug!(url = %url, "fetching greeting");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;
        let status = response.status();
        let text = response.text().await.map_err(FetchError::Transport)?;

        if !status.is_success() {
            let body = if text.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                text
            };
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
