// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topic Registry Tests
//!
//! Published topics are a wire contract. These tests pin every literal and
//! check the registry agrees with the builder.

use std::collections::HashSet;
use test_case::test_case;

use agie_events::domain::{EventType, ResourceType};
use agie_events::topics::{
    self, nats_subject, source_prefix, DomainTopic, EventSource, TopicBuilder, TopicResource,
    REGISTRY,
};

use EventSource as S;
use EventType as E;
use ResourceType as R;

#[test_case(S::Regions, R::Group, E::Created, "com.aws.agie.regions>Group>created")]
#[test_case(S::Regions, R::Group, E::Updated, "com.aws.agie.regions>Group>updated")]
#[test_case(S::Regions, R::Group, E::Deleted, "com.aws.agie.regions>Group>deleted")]
#[test_case(S::Regions, R::Region, E::Created, "com.aws.agie.regions>Region>created")]
#[test_case(S::Regions, R::Region, E::Updated, "com.aws.agie.regions>Region>updated")]
#[test_case(S::Regions, R::Region, E::Deleted, "com.aws.agie.regions>Region>deleted")]
#[test_case(S::Regions, R::Polygon, E::Created, "com.aws.agie.regions>Polygon>created")]
#[test_case(S::Regions, R::Polygon, E::Updated, "com.aws.agie.regions>Polygon>updated")]
#[test_case(S::Regions, R::Polygon, E::Deleted, "com.aws.agie.regions>Polygon>deleted")]
#[test_case(S::Results, R::Result, E::Created, "com.aws.agie.results>Result>created")]
#[test_case(S::Results, R::Result, E::Updated, "com.aws.agie.results>Result>updated")]
#[test_case(S::Results, R::Result, E::Deleted, "com.aws.agie.results>Result>deleted")]
#[test_case(S::Notifications, R::Subscription, E::Created,
    "com.aws.agie.notifications>Subscription>created")]
#[test_case(S::Notifications, R::Subscription, E::Updated,
    "com.aws.agie.notifications>Subscription>updated")]
#[test_case(S::Notifications, R::Subscription, E::Deleted,
    "com.aws.agie.notifications>Subscription>deleted")]
#[test_case(S::Executor, R::Job, E::Created, "com.aws.agie.executor>Job>created")]
#[test_case(S::Executor, R::Job, E::Updated, "com.aws.agie.executor>Job>updated")]
fn test_topic_literal(
    source: EventSource,
    resource: ResourceType,
    event: EventType,
    expected: &str,
) {
    let built = TopicBuilder::new()
        .source(source)
        .resource(resource)
        .event(event)
        .build()
        .unwrap();

    assert_eq!(built, expected);
    assert!(topics::is_registered(expected), "{} not registered", expected);

    let parsed: DomainTopic = expected.parse().unwrap();
    assert_eq!(parsed, DomainTopic::for_resource(source, resource, event));
}

#[test]
fn test_polygon_metadata_topic() {
    let topic = TopicBuilder::new()
        .source(EventSource::Executor)
        .resource(TopicResource::PolygonMetadata)
        .event(EventType::Created)
        .build()
        .unwrap();

    assert_eq!(topic, topics::EXECUTOR_POLYGON_METADATA_CREATED_EVENT);
    assert_eq!(topic, "com.aws.agie.executor>PolygonMetadata>created");
}

#[test]
fn test_source_literals() {
    assert_eq!(topics::AGIE_EVENT_SOURCE, "com.aws.agie");
    assert_eq!(topics::AWS_EVENT_BRIDGE_SCHEDULED_EVENT_SOURCE, "aws.events");
    assert_eq!(topics::AWS_EVENT_BRIDGE_SCHEDULED_EVENT, "Scheduled Event");
    assert_eq!(EventSource::Engine.as_str(), "com.aws.agie.engine");
    assert_eq!(EventSource::Scheduler.as_str(), "com.aws.agie.scheduler");
    assert_eq!(topics::CLI_CATALOG_CREATE_EVENT, "com.aws.agie>results>catalog>create");
}

#[test]
fn test_registry_topics_unique() {
    let mut seen = HashSet::new();
    for entry in REGISTRY {
        assert!(seen.insert(entry.topic), "duplicate topic {}", entry.topic);
    }

    let names: HashSet<&str> = REGISTRY.iter().map(|entry| entry.name).collect();
    assert_eq!(names.len(), REGISTRY.len());
}

#[test]
fn test_registry_domain_entries_render_their_literal() {
    for entry in REGISTRY {
        match entry.domain {
            Some(domain) => {
                assert_eq!(domain.to_string(), entry.topic);
                assert_eq!(domain.source, entry.source);
                assert!(entry.topic.starts_with(&source_prefix(entry.source)));
            }
            None => assert_eq!(entry.topic, topics::CLI_CATALOG_CREATE_EVENT),
        }
    }
}

#[test]
fn test_topics_for_module() {
    let executor: Vec<&str> = topics::topics_for(EventSource::Executor)
        .map(|entry| entry.topic)
        .collect();

    assert_eq!(
        executor,
        vec![
            topics::EXECUTOR_JOB_CREATED_EVENT,
            topics::EXECUTOR_JOB_UPDATED_EVENT,
            topics::EXECUTOR_POLYGON_METADATA_CREATED_EVENT,
        ]
    );
    assert_eq!(topics::topics_for(EventSource::Engine).count(), 0);
}

#[test]
fn test_invalid_topics_rejected() {
    assert!("com.aws.agie.regions>Region".parse::<DomainTopic>().is_err());
    assert!("com.aws.agie.regions>Region>renamed".parse::<DomainTopic>().is_err());
    assert!("com.aws.agie.other>Region>created".parse::<DomainTopic>().is_err());
    assert!("com.aws.agie.regions>region>created".parse::<DomainTopic>().is_err());
    assert!(!topics::is_registered("com.aws.agie.results>Result>archived"));
}

#[test]
fn test_incomplete_builder_is_error() {
    assert!(TopicBuilder::new().source(EventSource::Regions).build().is_err());
}

#[test]
fn test_nats_subject_mapping() {
    assert_eq!(
        nats_subject(topics::REGIONS_REGION_CREATED_EVENT),
        "com.aws.agie.regions.Region.created"
    );
}
