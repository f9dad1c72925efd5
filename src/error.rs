use crate::fairings::request_span_for;
use rocket::http::{Header, Status};
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{Request, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Methods accepted by routes that answer 405 for everything else.
pub const ALLOWED_METHODS: &str = "GET, OPTIONS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"error": "Method not allowed"}))]
pub struct ApiErrorResponse {
    #[schema(example = "Method not allowed")]
    pub error: String,
}

impl ApiErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Not found")]
    NotFound,
    #[error("Internal server error")]
    Internal(String),
    #[error("{}", .0.reason_lossy())]
    Rejected(Status),
}

impl ApiError {
    fn status(&self) -> Status {
        match self {
            ApiError::MethodNotAllowed => Status::MethodNotAllowed,
            ApiError::NotFound => Status::NotFound,
            ApiError::Internal(_) => Status::InternalServerError,
            ApiError::Rejected(status) => *status,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> rocket::response::Result<'static> {
        let status = self.status();
        let span = request_span_for(req);
        span.in_scope(|| match &self {
            ApiError::Internal(detail) => tracing::error!(
                status = status.code,
                detail = %detail,
                "request failed"
            ),
            other => tracing::warn!(
                status = status.code,
                error_message = %other,
                "request failed"
            ),
        });

        let body = ApiErrorResponse::new(self.to_string());
        let json_response = match Json(body).respond_to(req) {
            Ok(r) => r,
            Err(s) => {
                tracing::error!(status = %s.code, "failed to serialize error response");
                return Err(s);
            }
        };
        let mut response = Response::build_from(json_response)
            .status(status)
            .finalize();
        if matches!(self, ApiError::MethodNotAllowed) {
            response.set_header(Header::new("Allow", ALLOWED_METHODS));
        }
        Ok(response)
    }
}
