use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Request, Response};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Adds permissive CORS headers to every response on one path, whatever
/// the method, status or request headers. A trailing `/` on the request
/// path still counts, since Rocket routes `/a/` to the handlers of `/a`.
pub struct PermissiveCors {
    path: &'static str,
}

impl PermissiveCors {
    pub fn for_path(path: &'static str) -> Self {
        Self {
            path: path.trim_end_matches('/'),
        }
    }

    fn covers(&self, req: &Request<'_>) -> bool {
        req.uri().path().as_str().trim_end_matches('/') == self.path
    }
}

#[rocket::async_trait]
impl Fairing for PermissiveCors {
    fn info(&self) -> Info {
        Info {
            name: "Permissive CORS",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        if !self.covers(req) {
            return;
        }
        res.set_header(Header::new("Access-Control-Allow-Origin", ALLOW_ORIGIN));
        res.set_header(Header::new("Access-Control-Allow-Methods", ALLOW_METHODS));
        res.set_header(Header::new("Access-Control-Allow-Headers", ALLOW_HEADERS));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::client;

    #[test]
    fn test_headers_absent_outside_path() {
        let client = client();
        let response = client.get("/api/hello").dispatch();
        assert!(response
            .headers()
            .get_one("Access-Control-Allow-Origin")
            .is_none());
    }

    #[test]
    fn test_headers_absent_on_longer_path() {
        let client = client();
        let response = client.get("/api/status/extra").dispatch();
        assert_eq!(response.status().code, 404);
        assert!(response
            .headers()
            .get_one("Access-Control-Allow-Origin")
            .is_none());
    }

    #[test]
    fn test_headers_present_with_trailing_slash() {
        let client = client();
        let response = client.post("/api/status/").dispatch();
        let headers = response.headers();
        assert_eq!(headers.get_one("Access-Control-Allow-Origin"), Some(ALLOW_ORIGIN));
        assert_eq!(headers.get_one("Access-Control-Allow-Methods"), Some(ALLOW_METHODS));
        assert_eq!(headers.get_one("Access-Control-Allow-Headers"), Some(ALLOW_HEADERS));
    }

    #[test]
    fn test_headers_present_without_origin() {
        let client = client();
        let response = client.get("/api/status").dispatch();
        let headers = response.headers();
        assert_eq!(headers.get_one("Access-Control-Allow-Origin"), Some(ALLOW_ORIGIN));
        assert_eq!(headers.get_one("Access-Control-Allow-Methods"), Some(ALLOW_METHODS));
        assert_eq!(headers.get_one("Access-Control-Allow-Headers"), Some(ALLOW_HEADERS));
    }
}
