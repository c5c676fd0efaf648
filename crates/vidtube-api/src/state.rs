//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use vidtube_core::config::AppConfig;
use vidtube_core::traits::TransferBackend;
use vidtube_service::{DriveService, UploadService};
use vidtube_storage::CapacityLedger;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Capacity ledger, the one owner of drive usage
    pub ledger: Arc<CapacityLedger>,
    /// Drive quota and object service
    pub drive_service: Arc<DriveService>,
    /// Upload service
    pub upload_service: Arc<UploadService>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Wire a fresh ledger and the services around the given backend.
    pub fn new(config: AppConfig, backend: Arc<dyn TransferBackend>) -> Self {
        let ledger = Arc::new(CapacityLedger::from_config(&config.drive));

        let drive_service = Arc::new(DriveService::new(
            Arc::clone(&ledger),
            Arc::clone(&backend),
        ));
        let upload_service = Arc::new(UploadService::new(Arc::clone(&ledger), backend));

        Self {
            config: Arc::new(config),
            ledger,
            drive_service,
            upload_service,
            started_at: Instant::now(),
        }
    }
}
