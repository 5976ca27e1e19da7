// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Topics
//!
//! Every (module, resource, event) triple renders to a distinct topic that
//! parses back to the same triple.

use agie_events::domain::{EventType, ResourceType};
use agie_events::topics::{self, DomainTopic, EventSource, TopicResource, REGISTRY};
use proptest::prelude::*;
use proptest::sample::select;

fn arb_source() -> impl Strategy<Value = EventSource> {
    select(EventSource::ALL.to_vec())
}

fn arb_resource() -> impl Strategy<Value = TopicResource> {
    prop_oneof![
        select(ResourceType::ALL.to_vec()).prop_map(TopicResource::Resource),
        Just(TopicResource::PolygonMetadata),
    ]
}

fn arb_event() -> impl Strategy<Value = EventType> {
    select(EventType::ALL.to_vec())
}

fn arb_topic() -> impl Strategy<Value = DomainTopic> {
    (arb_source(), arb_resource(), arb_event())
        .prop_map(|(source, resource, event)| DomainTopic::new(source, resource, event))
}

proptest! {
    /// Property: rendering then parsing a topic is the identity
    #[test]
    fn prop_topic_parse_inverts_display(topic in arb_topic()) {
        let rendered = topic.to_string();
        let parsed: DomainTopic = rendered.parse().unwrap();
        prop_assert_eq!(parsed, topic);
    }

    /// Property: distinct triples never share a topic string
    #[test]
    fn prop_distinct_triples_distinct_topics(a in arb_topic(), b in arb_topic()) {
        prop_assert_eq!(a == b, a.to_string() == b.to_string());
    }

    /// Property: distinct registry entries have distinct topics
    #[test]
    fn prop_registry_entries_unique(
        i in 0..REGISTRY.len(),
        j in 0..REGISTRY.len(),
    ) {
        prop_assume!(i != j);
        prop_assert_ne!(REGISTRY[i].topic, REGISTRY[j].topic);
    }

    /// Property: a registered domain topic looks up to its own entry
    #[test]
    fn prop_registered_topic_lookup(topic in arb_topic()) {
        let rendered = topic.to_string();
        if let Some(entry) = topics::lookup(&rendered) {
            prop_assert_eq!(entry.domain, Some(topic));
            prop_assert_eq!(entry.source, topic.source);
        }
    }
}
