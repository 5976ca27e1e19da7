// Copyright (c) 2025 - Cowboy AI, Inc.
//! Envelope Serialization Tests
//!
//! Tests verify:
//! - camelCase field names on the wire
//! - Snapshot presence per event type
//! - JSON round-trip for every module's change events
//! - Decoding bus events as delivered by EventBridge
//!
//! All tests use deterministic fixtures

use pretty_assertions::assert_eq;
use serde_json::json;

use agie_events::domain::{
    CatalogDetails, EventType, JobResource, JobStatus, RegionResource, ResourceType,
};
use agie_events::events::{
    BusEvent, CatalogCreateEvent, Change, DomainEvent, EventError, JobChangeEvent,
    RegionChangeEvent,
};
use agie_events::topics::{
    EventSource, CLI_CATALOG_CREATE_EVENT, EXECUTOR_JOB_UPDATED_EVENT,
    REGIONS_REGION_UPDATED_EVENT,
};
use agie_events::AgieError;

use crate::fixtures::*;

#[test]
fn test_region_created_wire_shape() {
    let event = DomainEvent::created(ResourceType::Region, REGION_ID_1, region_fixture());

    let value = serde_json::to_value(&event).expect("Failed to serialize");

    assert_eq!(value["resourceType"], json!("Region"));
    assert_eq!(value["eventType"], json!("created"));
    assert_eq!(value["id"], json!(REGION_ID_1));
    assert_eq!(value["new"]["groupId"], json!(GROUP_ID_1));
    assert_eq!(value["new"]["createdAt"], json!(FIXED_TIMESTAMP));
    assert_eq!(
        value["new"]["processingConfig"]["scheduleExpression"],
        json!("rate(5 days)")
    );
    assert!(value.get("old").is_none());
    assert!(value.get("error").is_none());
}

#[test]
fn test_region_updated_round_trip() {
    let event = DomainEvent::updated(
        ResourceType::Region,
        REGION_ID_1,
        region_fixture(),
        region_renamed_fixture(),
    );

    let json = serde_json::to_string(&event).expect("Failed to serialize");
    let decoded: DomainEvent<RegionResource> =
        serde_json::from_str(&json).expect("Failed to deserialize");

    assert_eq!(event, decoded);
    assert!(decoded.check_convention().is_ok());
}

#[test]
fn test_polygon_deleted_carries_only_old() {
    let event = DomainEvent::deleted(ResourceType::Polygon, POLYGON_ID_1, polygon_fixture());

    let value = serde_json::to_value(&event).expect("Failed to serialize");

    assert_eq!(value["eventType"], json!("deleted"));
    assert_eq!(value["old"]["regionId"], json!(REGION_ID_1));
    assert_eq!(value["old"]["boundary"][0], json!([-104.4995, 39.6682]));
    assert_eq!(value["old"]["scheduleExpressionTimezone"], json!("Australia/Perth"));
    assert!(value.get("new").is_none());
}

#[test]
fn test_group_and_subscription_round_trip() {
    let group = DomainEvent::created(ResourceType::Group, GROUP_ID_1, group_fixture());
    let decoded: DomainEvent<_> =
        serde_json::from_value(serde_json::to_value(&group).unwrap()).unwrap();
    assert_eq!(group, decoded);

    let subscription = DomainEvent::deleted(
        ResourceType::Subscription,
        SUBSCRIPTION_ID_1,
        subscription_fixture(),
    );
    let decoded: DomainEvent<_> =
        serde_json::from_value(serde_json::to_value(&subscription).unwrap()).unwrap();
    assert_eq!(subscription, decoded);
}

#[test]
fn test_failure_envelope_skips_convention() {
    let mut event = DomainEvent::created(ResourceType::Result, RESULT_ID_1, result_fixture())
        .with_error(EventError::named("EngineFailure", "tile fetch timed out"));
    event.new = None;

    assert!(event.is_failure());
    assert!(event.check_convention().is_ok());

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(
        value["error"],
        json!({ "name": "EngineFailure", "message": "tile fetch timed out" })
    );
}

#[test]
fn test_created_without_new_is_rejected() {
    let mut event = DomainEvent::created(ResourceType::Region, REGION_ID_1, region_fixture());
    event.new = None;

    let result = event.check_convention();
    assert!(matches!(
        result,
        Err(AgieError::ConventionViolation {
            event_type: EventType::Created,
            ..
        })
    ));
}

#[test]
fn test_into_change_gives_latest_state() {
    let event = DomainEvent::updated(
        ResourceType::Region,
        REGION_ID_1,
        region_fixture(),
        region_renamed_fixture(),
    );

    let change = event.into_change().expect("convention holds");

    assert_eq!(change.event_type(), EventType::Updated);
    assert_eq!(change.latest().name, "North Field (irrigated)");
    assert!(matches!(change, Change::Updated { .. }));
}

#[test]
fn test_decode_eventbridge_delivery() {
    let delivered = json!({
        "version": "0",
        "id": "6a7e8feb-b491-4cf7-a9f1-bf3703467718",
        "detail-type": REGIONS_REGION_UPDATED_EVENT,
        "source": "com.aws.agie.regions",
        "account": ACCOUNT_ID,
        "time": FIXED_TIMESTAMP,
        "region": AWS_REGION,
        "resources": [],
        "detail": serde_json::to_value(DomainEvent::updated(
            ResourceType::Region,
            REGION_ID_1,
            region_fixture(),
            region_renamed_fixture(),
        ))
        .unwrap()
    });

    let event: RegionChangeEvent = serde_json::from_value(delivered).expect("Failed to decode");

    assert_eq!(event.account, ACCOUNT_ID);
    assert_eq!(event.time, Some(fixed_timestamp()));
    let topic = event.topic().expect("domain topic");
    assert_eq!(topic.source, EventSource::Regions);
    assert_eq!(topic.event, EventType::Updated);
    assert_eq!(event.detail.new, Some(region_renamed_fixture()));
}

#[test]
fn test_job_status_in_envelope() {
    let job = job_fixture();
    let finished = JobResource {
        status: JobStatus::Succeeded,
        end_date_time: Some(later_timestamp()),
        ..job.clone()
    };
    let event: JobChangeEvent = BusEvent {
        id: None,
        account: ACCOUNT_ID.to_string(),
        region: AWS_REGION.to_string(),
        source: EventSource::Executor.to_string(),
        detail_type: EXECUTOR_JOB_UPDATED_EVENT.to_string(),
        time: None,
        detail: DomainEvent::updated(ResourceType::Job, JOB_ID_1, job, finished),
    };

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["detail"]["old"]["status"], json!("inProgress"));
    assert_eq!(value["detail"]["new"]["status"], json!("succeeded"));
    assert_eq!(value["detail-type"], json!(EXECUTOR_JOB_UPDATED_EVENT));

    let decoded: JobChangeEvent = serde_json::from_value(value).unwrap();
    assert!(decoded.detail.new.map(|job| job.status.is_terminal()).unwrap_or(false));
}

#[test]
fn test_catalog_command_has_no_domain_topic() {
    let event: CatalogCreateEvent = serde_json::from_value(json!({
        "source": "com.aws.agie.cli",
        "detail-type": CLI_CATALOG_CREATE_EVENT,
        "detail": {
            "id": "cat-0001",
            "regionId": REGION_ID_1,
            "createdAt": FIXED_TIMESTAMP
        }
    }))
    .expect("Failed to decode");

    assert_eq!(
        event.detail,
        CatalogDetails {
            id: "cat-0001".to_string(),
            region_id: REGION_ID_1.to_string(),
            polygon_id: None,
            stac_url: None,
            created_at: fixed_timestamp(),
        }
    );
    assert!(matches!(event.topic(), Err(AgieError::InvalidTopic(_))));
}
