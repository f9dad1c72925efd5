mod cors;
mod request_logger;

pub use cors::PermissiveCors;
pub(crate) use request_logger::request_span_for;
pub use request_logger::RequestLogger;
pub use request_logger::TracingSpan;

#[cfg(test)]
pub(crate) use cors::{ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
