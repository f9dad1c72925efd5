use super::common::iso_timestamp;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const GREETING_MESSAGE: &str = "Hello from Vercel Backend!";
pub const GREETING_STATUS: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GreetingResponse {
    #[schema(example = "Hello from Vercel Backend!")]
    pub message: String,
    #[schema(example = "2024-05-01T12:30:45.123Z")]
    pub timestamp: String,
    #[schema(example = "success")]
    pub status: String,
}

impl GreetingResponse {
    pub fn now() -> Self {
        Self {
            message: GREETING_MESSAGE.into(),
            timestamp: iso_timestamp(),
            status: GREETING_STATUS.into(),
        }
    }
}
