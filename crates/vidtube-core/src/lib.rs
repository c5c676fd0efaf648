//! # vidtube-core
//!
//! Core crate for the VideoTube drive service. Contains configuration
//! schemas, the transfer-backend trait, typed identifiers, byte-unit
//! helpers, and the unified error system.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
