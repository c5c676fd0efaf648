//! Drive quota, upload, and removal services.

pub mod service;
pub mod upload;

pub use service::{DriveService, SimulationOutcome};
pub use upload::{UploadReceipt, UploadRequest, UploadService};
