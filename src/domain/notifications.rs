// Copyright (c) 2025 - Cowboy AI, Inc.
//! Notifications module payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's subscription to a region's result notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResource {
    pub id: String,
    pub region_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}
