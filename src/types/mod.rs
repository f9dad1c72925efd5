pub mod common;
pub mod greeting;
pub mod status;
