pub mod hello;
pub mod page;
pub mod status;
