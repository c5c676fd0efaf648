//! Request and response DTOs.

pub mod request;
pub mod response;

pub use request::{SimulateUsageRequest, UploadBody};
pub use response::{
    ContentResponse, DeleteResponse, DetailedHealthResponse, HandleResponse, HealthResponse,
    SimulateUsageResponse, UploadResponse,
};
