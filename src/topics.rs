// Copyright (c) 2025 - Cowboy AI, Inc.

//! Event topic registry
//!
//! Every domain change event published on the shared bus carries a topic
//! (the bus `detail-type`) that subscribers filter on.
//!
//! # Topic Pattern
//!
//! ```text
//! {event-source}>{ResourceType}>{created|updated|deleted}
//! ```
//!
//! `{event-source}` is the reverse-DNS source of the publishing module, for
//! example `com.aws.agie.regions`. Published topics are a wire contract:
//! the literals below must never change without migrating every subscriber.
//!
//! # Examples
//!
//! ```rust
//! use agie_events::domain::{EventType, ResourceType};
//! use agie_events::topics::{EventSource, TopicBuilder, REGIONS_REGION_CREATED_EVENT};
//!
//! let topic = TopicBuilder::new()
//!     .source(EventSource::Regions)
//!     .resource(ResourceType::Region)
//!     .event(EventType::Created)
//!     .build()
//!     .unwrap();
//! assert_eq!(topic, REGIONS_REGION_CREATED_EVENT);
//! assert_eq!(topic, "com.aws.agie.regions>Region>created");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::domain::{EventType, ResourceType};
use crate::errors::{AgieError, AgieResult};

/// Separator between topic segments
pub const TOPIC_SEPARATOR: char = '>';

pub const AWS_EVENT_BRIDGE_SCHEDULED_EVENT_SOURCE: &str = "aws.events";
pub const AGIE_EVENT_SOURCE: &str = "com.aws.agie";
pub const ENGINE_EVENT_SOURCE: &str = "com.aws.agie.engine";
pub const SCHEDULER_EVENT_SOURCE: &str = "com.aws.agie.scheduler";

/// Detail type of EventBridge scheduler ticks consumed by the results module
pub const AWS_EVENT_BRIDGE_SCHEDULED_EVENT: &str = "Scheduled Event";

// CLI module
pub const CLI_EVENT_SOURCE: &str = "com.aws.agie.cli";
pub const CLI_CATALOG_CREATE_EVENT: &str = "com.aws.agie>results>catalog>create";

// Regions module
pub const REGIONS_EVENT_SOURCE: &str = "com.aws.agie.regions";
pub const REGIONS_GROUP_CREATED_EVENT: &str = "com.aws.agie.regions>Group>created";
pub const REGIONS_GROUP_UPDATED_EVENT: &str = "com.aws.agie.regions>Group>updated";
pub const REGIONS_GROUP_DELETED_EVENT: &str = "com.aws.agie.regions>Group>deleted";
pub const REGIONS_REGION_CREATED_EVENT: &str = "com.aws.agie.regions>Region>created";
pub const REGIONS_REGION_UPDATED_EVENT: &str = "com.aws.agie.regions>Region>updated";
pub const REGIONS_REGION_DELETED_EVENT: &str = "com.aws.agie.regions>Region>deleted";
pub const REGIONS_POLYGON_CREATED_EVENT: &str = "com.aws.agie.regions>Polygon>created";
pub const REGIONS_POLYGON_UPDATED_EVENT: &str = "com.aws.agie.regions>Polygon>updated";
pub const REGIONS_POLYGON_DELETED_EVENT: &str = "com.aws.agie.regions>Polygon>deleted";

// Results module
pub const RESULTS_EVENT_SOURCE: &str = "com.aws.agie.results";
pub const RESULTS_RESULT_CREATED_EVENT: &str = "com.aws.agie.results>Result>created";
pub const RESULTS_RESULT_UPDATED_EVENT: &str = "com.aws.agie.results>Result>updated";
pub const RESULTS_RESULT_DELETED_EVENT: &str = "com.aws.agie.results>Result>deleted";

// Notifications module
pub const NOTIFICATIONS_EVENT_SOURCE: &str = "com.aws.agie.notifications";
pub const NOTIFICATIONS_SUBSCRIPTION_CREATED_EVENT: &str =
    "com.aws.agie.notifications>Subscription>created";
pub const NOTIFICATIONS_SUBSCRIPTION_UPDATED_EVENT: &str =
    "com.aws.agie.notifications>Subscription>updated";
pub const NOTIFICATIONS_SUBSCRIPTION_DELETED_EVENT: &str =
    "com.aws.agie.notifications>Subscription>deleted";

// Executor module
pub const EXECUTOR_EVENT_SOURCE: &str = "com.aws.agie.executor";
pub const EXECUTOR_JOB_CREATED_EVENT: &str = "com.aws.agie.executor>Job>created";
pub const EXECUTOR_JOB_UPDATED_EVENT: &str = "com.aws.agie.executor>Job>updated";
pub const EXECUTOR_POLYGON_METADATA_CREATED_EVENT: &str =
    "com.aws.agie.executor>PolygonMetadata>created";

/// Publishing module, identified on the bus by its event source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventSource {
    Regions,
    Results,
    Notifications,
    Executor,
    Engine,
    Scheduler,
    Cli,
}

impl EventSource {
    /// Every publishing module
    pub const ALL: [EventSource; 7] = [
        Self::Regions,
        Self::Results,
        Self::Notifications,
        Self::Executor,
        Self::Engine,
        Self::Scheduler,
        Self::Cli,
    ];

    /// Reverse-DNS source string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Regions => REGIONS_EVENT_SOURCE,
            Self::Results => RESULTS_EVENT_SOURCE,
            Self::Notifications => NOTIFICATIONS_EVENT_SOURCE,
            Self::Executor => EXECUTOR_EVENT_SOURCE,
            Self::Engine => ENGINE_EVENT_SOURCE,
            Self::Scheduler => SCHEDULER_EVENT_SOURCE,
            Self::Cli => CLI_EVENT_SOURCE,
        }
    }
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventSource {
    type Err = AgieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| AgieError::InvalidTopic(format!("unknown event source '{}'", s)))
    }
}

/// Resource segment of a topic
///
/// Almost always a [`ResourceType`]; the executor also publishes polygon
/// metadata, which has no envelope resource type of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TopicResource {
    Resource(ResourceType),
    PolygonMetadata,
}

impl TopicResource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Resource(resource) => resource.as_str(),
            Self::PolygonMetadata => "PolygonMetadata",
        }
    }

    /// Envelope resource type, `None` for segments without one
    pub const fn resource_type(&self) -> Option<ResourceType> {
        match self {
            Self::Resource(resource) => Some(*resource),
            Self::PolygonMetadata => None,
        }
    }
}

impl From<ResourceType> for TopicResource {
    fn from(resource: ResourceType) -> Self {
        Self::Resource(resource)
    }
}

impl fmt::Display for TopicResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicResource {
    type Err = AgieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::PolygonMetadata.as_str() {
            return Ok(Self::PolygonMetadata);
        }
        s.parse::<ResourceType>().map(Self::Resource)
    }
}

/// A parsed `{source}>{resource}>{event}` topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainTopic {
    pub source: EventSource,
    pub resource: TopicResource,
    pub event: EventType,
}

impl DomainTopic {
    pub const fn new(source: EventSource, resource: TopicResource, event: EventType) -> Self {
        Self {
            source,
            resource,
            event,
        }
    }

    /// Topic for an envelope resource type
    pub const fn for_resource(
        source: EventSource,
        resource: ResourceType,
        event: EventType,
    ) -> Self {
        Self::new(source, TopicResource::Resource(resource), event)
    }
}

impl fmt::Display for DomainTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.source,
            self.resource,
            self.event,
            sep = TOPIC_SEPARATOR
        )
    }
}

impl FromStr for DomainTopic {
    type Err = AgieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split(TOPIC_SEPARATOR).collect();
        match segments.as_slice() {
            [source, resource, event] => Ok(Self {
                source: source.parse()?,
                resource: resource.parse()?,
                event: event.parse()?,
            }),
            _ => Err(AgieError::InvalidTopic(format!(
                "expected 3 '{}'-separated segments in '{}', found {}",
                TOPIC_SEPARATOR,
                s,
                segments.len()
            ))),
        }
    }
}

/// Builder for topic strings
#[derive(Debug, Clone, Default)]
pub struct TopicBuilder {
    source: Option<EventSource>,
    resource: Option<TopicResource>,
    event: Option<EventType>,
}

impl TopicBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the publishing module
    pub fn source(mut self, source: EventSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the resource segment
    pub fn resource(mut self, resource: impl Into<TopicResource>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Set the event type
    pub fn event(mut self, event: EventType) -> Self {
        self.event = Some(event);
        self
    }

    /// Build the typed topic
    pub fn build_topic(self) -> AgieResult<DomainTopic> {
        let source = self
            .source
            .ok_or_else(|| AgieError::Configuration("topic source must be set".to_string()))?;
        let resource = self
            .resource
            .ok_or_else(|| AgieError::Configuration("topic resource must be set".to_string()))?;
        let event = self
            .event
            .ok_or_else(|| AgieError::Configuration("topic event must be set".to_string()))?;
        Ok(DomainTopic::new(source, resource, event))
    }

    /// Build the complete topic string
    pub fn build(self) -> AgieResult<String> {
        self.build_topic().map(|topic| topic.to_string())
    }
}

/// Prefix matching every topic a module publishes
///
/// Returns: `{source}>`
pub fn source_prefix(source: EventSource) -> String {
    format!("{}{}", source, TOPIC_SEPARATOR)
}

/// NATS subject for a topic
///
/// NATS reserves `>` as its tail wildcard, so topic separators become
/// subject token separators: `com.aws.agie.regions.Region.created`.
pub fn nats_subject(topic: &str) -> String {
    topic.replace(TOPIC_SEPARATOR, ".")
}

/// A topic constant known to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredTopic {
    /// Constant name, e.g. `REGIONS_REGION_CREATED_EVENT`
    pub name: &'static str,
    /// Literal topic string
    pub topic: &'static str,
    /// Module that publishes it
    pub source: EventSource,
    /// Parsed form, `None` for command topics outside the domain pattern
    pub domain: Option<DomainTopic>,
}

impl RegisteredTopic {
    const fn domain(
        name: &'static str,
        topic: &'static str,
        source: EventSource,
        resource: TopicResource,
        event: EventType,
    ) -> Self {
        Self {
            name,
            topic,
            source,
            domain: Some(DomainTopic::new(source, resource, event)),
        }
    }

    const fn command(name: &'static str, topic: &'static str, source: EventSource) -> Self {
        Self {
            name,
            topic,
            source,
            domain: None,
        }
    }
}

use EventSource as S;
use EventType as E;
use ResourceType as R;

/// Every published topic
pub static REGISTRY: &[RegisteredTopic] = &[
    RegisteredTopic::domain(
        "REGIONS_GROUP_CREATED_EVENT",
        REGIONS_GROUP_CREATED_EVENT,
        S::Regions,
        TopicResource::Resource(R::Group),
        E::Created,
    ),
    RegisteredTopic::domain(
        "REGIONS_GROUP_UPDATED_EVENT",
        REGIONS_GROUP_UPDATED_EVENT,
        S::Regions,
        TopicResource::Resource(R::Group),
        E::Updated,
    ),
    RegisteredTopic::domain(
        "REGIONS_GROUP_DELETED_EVENT",
        REGIONS_GROUP_DELETED_EVENT,
        S::Regions,
        TopicResource::Resource(R::Group),
        E::Deleted,
    ),
    RegisteredTopic::domain(
        "REGIONS_REGION_CREATED_EVENT",
        REGIONS_REGION_CREATED_EVENT,
        S::Regions,
        TopicResource::Resource(R::Region),
        E::Created,
    ),
    RegisteredTopic::domain(
        "REGIONS_REGION_UPDATED_EVENT",
        REGIONS_REGION_UPDATED_EVENT,
        S::Regions,
        TopicResource::Resource(R::Region),
        E::Updated,
    ),
    RegisteredTopic::domain(
        "REGIONS_REGION_DELETED_EVENT",
        REGIONS_REGION_DELETED_EVENT,
        S::Regions,
        TopicResource::Resource(R::Region),
        E::Deleted,
    ),
    RegisteredTopic::domain(
        "REGIONS_POLYGON_CREATED_EVENT",
        REGIONS_POLYGON_CREATED_EVENT,
        S::Regions,
        TopicResource::Resource(R::Polygon),
        E::Created,
    ),
    RegisteredTopic::domain(
        "REGIONS_POLYGON_UPDATED_EVENT",
        REGIONS_POLYGON_UPDATED_EVENT,
        S::Regions,
        TopicResource::Resource(R::Polygon),
        E::Updated,
    ),
    RegisteredTopic::domain(
        "REGIONS_POLYGON_DELETED_EVENT",
        REGIONS_POLYGON_DELETED_EVENT,
        S::Regions,
        TopicResource::Resource(R::Polygon),
        E::Deleted,
    ),
    RegisteredTopic::domain(
        "RESULTS_RESULT_CREATED_EVENT",
        RESULTS_RESULT_CREATED_EVENT,
        S::Results,
        TopicResource::Resource(R::Result),
        E::Created,
    ),
    RegisteredTopic::domain(
        "RESULTS_RESULT_UPDATED_EVENT",
        RESULTS_RESULT_UPDATED_EVENT,
        S::Results,
        TopicResource::Resource(R::Result),
        E::Updated,
    ),
    RegisteredTopic::domain(
        "RESULTS_RESULT_DELETED_EVENT",
        RESULTS_RESULT_DELETED_EVENT,
        S::Results,
        TopicResource::Resource(R::Result),
        E::Deleted,
    ),
    RegisteredTopic::domain(
        "NOTIFICATIONS_SUBSCRIPTION_CREATED_EVENT",
        NOTIFICATIONS_SUBSCRIPTION_CREATED_EVENT,
        S::Notifications,
        TopicResource::Resource(R::Subscription),
        E::Created,
    ),
    RegisteredTopic::domain(
        "NOTIFICATIONS_SUBSCRIPTION_UPDATED_EVENT",
        NOTIFICATIONS_SUBSCRIPTION_UPDATED_EVENT,
        S::Notifications,
        TopicResource::Resource(R::Subscription),
        E::Updated,
    ),
    RegisteredTopic::domain(
        "NOTIFICATIONS_SUBSCRIPTION_DELETED_EVENT",
        NOTIFICATIONS_SUBSCRIPTION_DELETED_EVENT,
        S::Notifications,
        TopicResource::Resource(R::Subscription),
        E::Deleted,
    ),
    RegisteredTopic::domain(
        "EXECUTOR_JOB_CREATED_EVENT",
        EXECUTOR_JOB_CREATED_EVENT,
        S::Executor,
        TopicResource::Resource(R::Job),
        E::Created,
    ),
    RegisteredTopic::domain(
        "EXECUTOR_JOB_UPDATED_EVENT",
        EXECUTOR_JOB_UPDATED_EVENT,
        S::Executor,
        TopicResource::Resource(R::Job),
        E::Updated,
    ),
    RegisteredTopic::domain(
        "EXECUTOR_POLYGON_METADATA_CREATED_EVENT",
        EXECUTOR_POLYGON_METADATA_CREATED_EVENT,
        S::Executor,
        TopicResource::PolygonMetadata,
        E::Created,
    ),
    RegisteredTopic::command(
        "CLI_CATALOG_CREATE_EVENT",
        CLI_CATALOG_CREATE_EVENT,
        S::Cli,
    ),
];

/// Find the registry entry for a topic string
pub fn lookup(topic: &str) -> Option<&'static RegisteredTopic> {
    REGISTRY.iter().find(|entry| entry.topic == topic)
}

/// Whether a topic string is registered
pub fn is_registered(topic: &str) -> bool {
    lookup(topic).is_some()
}

/// Registered topics published by one module
pub fn topics_for(source: EventSource) -> impl Iterator<Item = &'static RegisteredTopic> {
    REGISTRY.iter().filter(move |entry| entry.source == source)
}
