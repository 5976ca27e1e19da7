// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deployed resource naming
//!
//! Names the shared stack assigns to resources it provisions, so services can
//! derive them when the resolved parameter is not available.

/// Shared event bus: `arcade-{environment}-{account}-{region}`
pub fn shared_event_bus_name(environment: &str, account_id: &str, region: &str) -> String {
    format!("arcade-{}-{}-{}", environment, account_id, region)
}

/// Shared bucket: `arcade-{environment}-{account}-{region}-shared`
pub fn shared_bucket_name(environment: &str, account_id: &str, region: &str) -> String {
    format!("{}-shared", shared_event_bus_name(environment, account_id, region))
}
