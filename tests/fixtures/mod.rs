// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for agie-events
//!
//! Provides deterministic resources and events for serialization, publishing
//! and routing tests. All ids and timestamps are fixed constants so tests are
//! reproducible.
//!
//! # Design Principles
//! - All test data is deterministic (no `Utc::now()`)
//! - Fixtures build resources; tests wrap them in envelopes as needed

#![allow(dead_code)]

use chrono::{DateTime, Utc};

use agie_events::domain::{
    GroupResource, JobResource, JobStatus, PolygonResource, ProcessingConfig, RegionResource,
    ResultResource, SubscriptionResource, Tags,
};

pub const GROUP_ID_1: &str = "grp-0001";
pub const REGION_ID_1: &str = "rgn-0001";
pub const POLYGON_ID_1: &str = "plg-0001";
pub const RESULT_ID_1: &str = "res-0001";
pub const JOB_ID_1: &str = "job-0001";
pub const SUBSCRIPTION_ID_1: &str = "sub-0001";
pub const USER_ID_1: &str = "user-0001";

pub const ACCOUNT_ID: &str = "123";
pub const AWS_REGION: &str = "us-east-1";
pub const ENVIRONMENT: &str = "dev";

// Fixed test timestamps
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";
pub const LATER_TIMESTAMP: &str = "2026-01-19T13:30:00Z";

fn parse(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

/// Parse the fixed timestamp
pub fn fixed_timestamp() -> DateTime<Utc> {
    parse(FIXED_TIMESTAMP)
}

pub fn later_timestamp() -> DateTime<Utc> {
    parse(LATER_TIMESTAMP)
}

fn tags(pairs: &[(&str, &str)]) -> Tags {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn group_fixture() -> GroupResource {
    GroupResource {
        id: GROUP_ID_1.to_string(),
        name: "Northern Farms".to_string(),
        description: Some("Farms north of the river".to_string()),
        tags: tags(&[("owner", "agronomy")]),
        created_by: USER_ID_1.to_string(),
        created_at: fixed_timestamp(),
        updated_by: None,
        updated_at: None,
    }
}

pub fn region_fixture() -> RegionResource {
    RegionResource {
        id: REGION_ID_1.to_string(),
        group_id: GROUP_ID_1.to_string(),
        name: "North Field".to_string(),
        processing_config: Some(ProcessingConfig {
            mode: "scheduled".to_string(),
            schedule_expression: Some("rate(5 days)".to_string()),
            schedule_expression_timezone: Some("UTC".to_string()),
            priority: Some("standard".to_string()),
        }),
        tags: Tags::new(),
        created_by: USER_ID_1.to_string(),
        created_at: fixed_timestamp(),
        updated_by: None,
        updated_at: None,
    }
}

/// The region after a rename
pub fn region_renamed_fixture() -> RegionResource {
    RegionResource {
        name: "North Field (irrigated)".to_string(),
        updated_by: Some(USER_ID_1.to_string()),
        updated_at: Some(later_timestamp()),
        ..region_fixture()
    }
}

pub fn polygon_fixture() -> PolygonResource {
    PolygonResource {
        id: POLYGON_ID_1.to_string(),
        name: "Block A".to_string(),
        region_id: REGION_ID_1.to_string(),
        boundary: vec![
            [-104.4995, 39.6682],
            [-104.4863, 39.6682],
            [-104.4863, 39.6601],
            [-104.4995, 39.6601],
            [-104.4995, 39.6682],
        ],
        area: Some(1042.5),
        schedule_expression: Some("rate(5 days)".to_string()),
        schedule_expression_timezone: Some("Australia/Perth".to_string()),
        tags: tags(&[("crop", "wheat")]),
        created_by: USER_ID_1.to_string(),
        created_at: fixed_timestamp(),
        updated_by: None,
        updated_at: None,
    }
}

pub fn result_fixture() -> ResultResource {
    ResultResource {
        id: RESULT_ID_1.to_string(),
        region_id: REGION_ID_1.to_string(),
        status: "queued".to_string(),
        schedule_date_time: Some(fixed_timestamp()),
        message: None,
        created_at: fixed_timestamp(),
        updated_at: None,
    }
}

pub fn job_fixture() -> JobResource {
    JobResource {
        id: JOB_ID_1.to_string(),
        region_id: REGION_ID_1.to_string(),
        status: JobStatus::InProgress,
        start_date_time: Some(fixed_timestamp()),
        end_date_time: None,
        message: None,
    }
}

pub fn subscription_fixture() -> SubscriptionResource {
    SubscriptionResource {
        id: SUBSCRIPTION_ID_1.to_string(),
        region_id: REGION_ID_1.to_string(),
        user_id: USER_ID_1.to_string(),
        created_at: fixed_timestamp(),
    }
}
