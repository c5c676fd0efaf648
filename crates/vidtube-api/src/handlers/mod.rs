//! HTTP request handlers, one module per resource.

pub mod debug;
pub mod drive;
pub mod health;
pub mod object;
pub mod upload;
