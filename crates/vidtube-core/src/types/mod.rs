//! Core type definitions used across the VideoTube drive workspace.

pub mod id;
pub mod units;

pub use id::ObjectId;
pub use units::{BYTES_PER_GB, BYTES_PER_KB, BYTES_PER_MB, format_bytes, format_gb};
