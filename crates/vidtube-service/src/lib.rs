//! # vidtube-service
//!
//! Drive use cases. Each service orchestrates the capacity ledger and the
//! transfer backend; services follow constructor injection with all
//! dependencies provided as `Arc` references.

pub mod drive;

pub use drive::{DriveService, UploadService};
