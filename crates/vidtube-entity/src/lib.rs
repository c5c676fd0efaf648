//! # vidtube-entity
//!
//! Domain value types shared between the ledger, the services, and the
//! HTTP layer.

pub mod drive;
