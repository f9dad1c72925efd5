use crate::error::{ApiError, ApiErrorResponse};
use crate::fairings::TracingSpan;
use crate::types::status::StatusResponse;
use rocket::serde::json::Json;
use rocket::Route;

pub const STATUS_PATH: &str = "/api/status";

#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Status",
    responses(
        (status = 200, description = "Service status and endpoint catalog", body = StatusResponse),
    )
)]
#[get("/status")]
pub async fn get_status(span: TracingSpan) -> Json<StatusResponse> {
    let status = StatusResponse::now();
    let endpoints = status.endpoints.len();
    span.0.in_scope(|| tracing::info!(endpoints, "status served"));
    Json(status)
}

#[utoipa::path(
    options,
    path = "/api/status",
    tag = "Status",
    responses(
        (status = 200, description = "CORS preflight, empty body"),
    )
)]
#[options("/status")]
pub async fn options_status(span: TracingSpan) {
    span.0.in_scope(|| tracing::debug!("preflight answered"));
}

// Every method besides GET and OPTIONS is routed here explicitly: Rocket
// answers an unrouted method with 404, and derives HEAD from GET.

#[utoipa::path(
    post,
    path = "/api/status",
    tag = "Status",
    responses(
        (status = 405, description = "Only GET and OPTIONS are accepted", body = ApiErrorResponse),
    )
)]
#[post("/status")]
pub async fn post_status() -> ApiError {
    ApiError::MethodNotAllowed
}

#[utoipa::path(
    put,
    path = "/api/status",
    tag = "Status",
    responses(
        (status = 405, description = "Only GET and OPTIONS are accepted", body = ApiErrorResponse),
    )
)]
#[put("/status")]
pub async fn put_status() -> ApiError {
    ApiError::MethodNotAllowed
}

#[utoipa::path(
    delete,
    path = "/api/status",
    tag = "Status",
    responses(
        (status = 405, description = "Only GET and OPTIONS are accepted", body = ApiErrorResponse),
    )
)]
#[delete("/status")]
pub async fn delete_status() -> ApiError {
    ApiError::MethodNotAllowed
}

#[utoipa::path(
    patch,
    path = "/api/status",
    tag = "Status",
    responses(
        (status = 405, description = "Only GET and OPTIONS are accepted", body = ApiErrorResponse),
    )
)]
#[patch("/status")]
pub async fn patch_status() -> ApiError {
    ApiError::MethodNotAllowed
}

#[utoipa::path(
    head,
    path = "/api/status",
    tag = "Status",
    responses(
        (status = 405, description = "Only GET and OPTIONS are accepted"),
    )
)]
#[head("/status")]
pub async fn head_status() -> ApiError {
    ApiError::MethodNotAllowed
}

#[route(TRACE, uri = "/status")]
pub async fn trace_status() -> ApiError {
    ApiError::MethodNotAllowed
}

#[route(CONNECT, uri = "/status")]
pub async fn connect_status() -> ApiError {
    ApiError::MethodNotAllowed
}

pub fn routes() -> Vec<Route> {
    rocket::routes![
        get_status,
        options_status,
        post_status,
        put_status,
        delete_status,
        patch_status,
        head_status,
        trace_status,
        connect_status
    ]
}
