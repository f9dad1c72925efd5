use crate::fairings::TracingSpan;
use crate::types::greeting::GreetingResponse;
use rocket::serde::json::Json;
use rocket::Route;

#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "Greeting",
    responses(
        (status = 200, description = "Greeting with the current server time", body = GreetingResponse),
    )
)]
#[get("/hello")]
pub async fn get_hello(span: TracingSpan) -> Json<GreetingResponse> {
    let greeting = GreetingResponse::now();
    span.0
        .in_scope(|| tracing::info!(timestamp = %greeting.timestamp, "greeting served"));
    Json(greeting)
}

pub fn routes() -> Vec<Route> {
    rocket::routes![get_hello]
}
