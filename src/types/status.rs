use super::common::iso_timestamp;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_ONLINE: &str = "online";
pub const STATUS_MESSAGE: &str = "Rust API is running successfully";
pub const RUNTIME: &str = "Rust / Rocket 0.5";

/// Routes advertised by `GET /api/status`, as `(path, method, description)`.
const ENDPOINTS: [(&str, &str, &str); 2] = [
    ("/api/hello", "GET", "Returns greeting message"),
    ("/api/status", "GET", "Returns API status"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EndpointInfo {
    #[schema(example = "/api/hello")]
    pub path: String,
    #[schema(example = "GET")]
    pub method: String,
    #[schema(example = "Returns greeting message")]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "online")]
    pub status: String,
    #[schema(example = "Rust API is running successfully")]
    pub message: String,
    #[schema(example = "Rust / Rocket 0.5")]
    pub runtime: String,
    #[schema(example = "2024-05-01T12:30:45.123Z")]
    pub timestamp: String,
    pub endpoints: Vec<EndpointInfo>,
}

impl StatusResponse {
    pub fn now() -> Self {
        Self {
            status: STATUS_ONLINE.into(),
            message: STATUS_MESSAGE.into(),
            runtime: RUNTIME.into(),
            timestamp: iso_timestamp(),
            endpoints: endpoint_catalog(),
        }
    }
}

pub fn endpoint_catalog() -> Vec<EndpointInfo> {
    ENDPOINTS
        .iter()
        .map(|(path, method, description)| EndpointInfo {
            path: (*path).into(),
            method: (*method).into(),
            description: (*description).into(),
        })
        .collect()
}
