use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::request::{FromRequest, Outcome};
use rocket::{Data, Request, Response};
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";
const MAX_REQUEST_ID_LEN: usize = 128;

struct RequestMeta {
    start: Instant,
    request_id: String,
    span: tracing::Span,
}

impl RequestMeta {
    fn untracked() -> Self {
        Self {
            start: Instant::now(),
            request_id: "unknown".to_string(),
            span: tracing::Span::none(),
        }
    }
}

/// Opens a `request` span per request and tags every response with
/// an `X-Request-Id` header.
pub struct RequestLogger;

/// Request guard handing the current request span to a handler.
pub struct TracingSpan(pub tracing::Span);

/// Reuses a caller-supplied request id when it is printable ASCII of
/// reasonable length, otherwise mints a fresh one.
fn request_id_for(req: &Request<'_>) -> String {
    req.headers()
        .get_one(REQUEST_ID_HEADER)
        .map(str::trim)
        .filter(|id| {
            !id.is_empty()
                && id.len() <= MAX_REQUEST_ID_LEN
                && id.chars().all(|c| c.is_ascii_graphic())
        })
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

pub(crate) fn request_span_for(req: &Request<'_>) -> tracing::Span {
    req.local_cache(RequestMeta::untracked).span.clone()
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for TracingSpan {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(TracingSpan(request_span_for(req)))
    }
}

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request Logger",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, req: &mut Request<'_>, _data: &mut Data<'_>) {
        let request_id = request_id_for(req);
        let span = tracing::info_span!(
            "request",
            method = %req.method(),
            uri = %req.uri(),
            request_id = %request_id,
        );
        span.in_scope(|| tracing::debug!("request started"));
        req.local_cache(|| RequestMeta {
            start: Instant::now(),
            request_id,
            span,
        });
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let meta = req.local_cache(RequestMeta::untracked);
        let duration_ms = meta.start.elapsed().as_secs_f64() * 1000.0;
        let status = res.status().code;

        meta.span.in_scope(|| match status {
            500.. => tracing::error!(status, duration_ms, "request completed"),
            400..=499 => tracing::warn!(status, duration_ms, "request completed"),
            _ => tracing::info!(status, duration_ms, "request completed"),
        });

        res.set_header(Header::new(REQUEST_ID_HEADER, meta.request_id.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::REQUEST_ID_HEADER;
    use crate::test_helpers::client;
    use rocket::http::Header;

    #[test]
    fn test_request_id_is_echoed() {
        let client = client();
        let response = client
            .get("/api/hello")
            .header(Header::new(REQUEST_ID_HEADER, "trace-42"))
            .dispatch();
        assert_eq!(response.headers().get_one(REQUEST_ID_HEADER), Some("trace-42"));
    }

    #[test]
    fn test_request_id_is_generated_when_missing() {
        let client = client();
        let response = client.get("/api/hello").dispatch();
        let id = response
            .headers()
            .get_one(REQUEST_ID_HEADER)
            .expect("request id header");
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }

    #[test]
    fn test_invalid_request_id_is_replaced() {
        let client = client();
        let response = client
            .get("/api/hello")
            .header(Header::new(REQUEST_ID_HEADER, "has space"))
            .dispatch();
        let id = response.headers().get_one(REQUEST_ID_HEADER).unwrap();
        assert_ne!(id, "has space");
    }
}
