use super::http::{FetchError, HELLO_PATH};
use crate::types::greeting::GreetingResponse;

pub const FALLBACK_ERROR: &str =
    "Failed to fetch data from the API. Please check your connection and try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Success(GreetingResponse),
    Failed(String),
}

/// Terminal rendition of the greeting page.
///
/// Clicking starts a fetch unless one is already in flight; the caller
/// performs the request and hands the outcome to [`GreetingPage::settle`].
/// Retrying only returns to idle, it never fetches on its own.
#[derive(Debug)]
pub struct GreetingPage {
    state: ViewState,
}

impl Default for GreetingPage {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingPage {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn button_enabled(&self) -> bool {
        !matches!(self.state, ViewState::Loading)
    }

    /// Returns `true` when the click should start a request.
    pub fn click(&mut self) -> bool {
        if !self.button_enabled() {
            return false;
        }
        self.state = ViewState::Loading;
        true
    }

    pub fn settle(&mut self, result: Result<GreetingResponse, FetchError>) {
        if self.state != ViewState::Loading {
            tracing::debug!("ignoring fetch result outside of loading state");
            return;
        }
        self.state = match result {
            Ok(greeting) => ViewState::Success(greeting),
            Err(err) => {
                let message = err.to_string();
                if message.is_empty() {
                    ViewState::Failed(FALLBACK_ERROR.to_string())
                } else {
                    ViewState::Failed(message)
                }
            }
        };
    }

    pub fn retry(&mut self) {
        if matches!(self.state, ViewState::Failed(_)) {
            self.state = ViewState::Idle;
        }
    }

    pub fn render(&self) -> String {
        match &self.state {
            ViewState::Idle => "[ Fetch API Data ]".to_string(),
            ViewState::Loading => "Fetching data from API...".to_string(),
            ViewState::Success(greeting) => {
                let pretty = serde_json::to_string_pretty(greeting)
                    .unwrap_or_else(|e| format!("<unrenderable response: {e}>"));
                format!("API Response\n200 OK • GET {HELLO_PATH}\n{pretty}")
            }
            ViewState::Failed(message) => {
                format!("Error Occurred\n{message}\n[ Try Again ]")
            }
        }
    }
}
