// Copyright (c) 2025 - Cowboy AI, Inc.
//! Results module payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::regions::StateResource;

/// Engine job details carried by Result domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultResource {
    pub id: String,
    pub region_id: String,
    /// Engine status (`queued`, `inProgress`, `succeeded`, `failed`)
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Detail of the CLI catalog create command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDetails {
    pub id: String,
    pub region_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon_id: Option<String>,
    /// STAC catalog the results are published against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stac_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Engine processing request for a single polygon
///
/// `coordinates` is a multipolygon: polygons, each a list of rings, each a
/// list of `[longitude, latitude]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonProcessingDetails {
    pub schedule_date_time: DateTime<Utc>,
    #[serde(default)]
    pub coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    pub group_id: String,
    pub group_name: String,
    pub region_id: String,
    pub region_name: String,
    pub polygon_id: String,
    pub polygon_name: String,
    pub output_prefix: String,
    pub result_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateResource>,
}
