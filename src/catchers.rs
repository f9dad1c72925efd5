use crate::error::ApiError;
use rocket::http::Status;
use rocket::Catcher;
use rocket::Request;

#[catch(404)]
pub fn not_found() -> ApiError {
    ApiError::NotFound
}

#[catch(500)]
pub fn internal_server_error(req: &Request<'_>) -> ApiError {
    ApiError::Internal(format!("unhandled error on {} {}", req.method(), req.uri()))
}

#[catch(default)]
pub fn fallback(status: Status, _req: &Request<'_>) -> ApiError {
    ApiError::Rejected(status)
}

pub fn catchers() -> Vec<Catcher> {
    rocket::catchers![not_found, internal_server_error, fallback]
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::client;
    use rocket::http::Status;

    #[test]
    fn test_unknown_route_returns_json_404() {
        let client = client();
        let response = client.get("/api/missing").dispatch();
        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(response.into_string().unwrap(), r#"{"error":"Not found"}"#);
    }

    #[test]
    fn test_unrouted_method_on_hello_is_json_404() {
        let client = client();
        let response = client.post("/api/hello").dispatch();
        assert_eq!(response.status(), Status::NotFound);
    }
}
