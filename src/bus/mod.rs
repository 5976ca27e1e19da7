// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event bus publishing
//!
//! Publishes domain events to the shared bus with:
//! - Topic routing derived from the publishing module and the envelope
//! - Snapshot convention checks before anything leaves the process
//! - Batching to the transport's per-request limit
//!
//! # Transports
//!
//! - [`EventBridgeBus`] - `PutEvents` on the deployed bus (feature `aws`)
//! - [`NatsBus`] - NATS subjects derived from topics (feature `nats`)
//! - [`InMemoryBus`] - records entries, for tests and local runs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::{BusBackend, BusConfig};
use crate::errors::{AgieError, AgieResult};
use crate::events::{BusEvent, DomainEvent};
use crate::topics::{self, DomainTopic, EventSource};

#[cfg(feature = "aws")]
pub mod eventbridge;
pub mod memory;
#[cfg(feature = "nats")]
pub mod nats;

#[cfg(feature = "aws")]
pub use eventbridge::EventBridgeBus;
pub use memory::InMemoryBus;
#[cfg(feature = "nats")]
pub use nats::{NatsBus, NatsConfig};

/// EventBridge accepts at most this many entries per `PutEvents` call
pub const DEFAULT_MAX_BATCH: usize = 10;

/// One outbound bus message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusEntry {
    pub source: String,
    #[serde(rename = "detail-type")]
    pub detail_type: String,
    pub detail: serde_json::Value,
}

impl BusEntry {
    /// View the entry as a subscriber would receive it
    pub fn into_bus_event(
        self,
        account: impl Into<String>,
        region: impl Into<String>,
    ) -> BusEvent<serde_json::Value> {
        BusEvent {
            id: None,
            account: account.into(),
            region: region.into(),
            source: self.source,
            detail_type: self.detail_type,
            time: None,
            detail: self.detail,
        }
    }
}

/// Transport that accepts batches of entries
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Put a batch of at most [`max_batch`](EventBus::max_batch) entries
    async fn put(&self, entries: Vec<BusEntry>) -> AgieResult<()>;

    /// Largest batch a single `put` accepts
    fn max_batch(&self) -> usize {
        DEFAULT_MAX_BATCH
    }

    /// Transport name for logs
    fn name(&self) -> &str;
}

/// Publisher bound to one module's event source
#[derive(Clone)]
pub struct DomainEventPublisher {
    bus: Arc<dyn EventBus>,
    source: EventSource,
}

impl DomainEventPublisher {
    pub fn new(bus: Arc<dyn EventBus>, source: EventSource) -> Self {
        Self { bus, source }
    }

    pub fn source(&self) -> EventSource {
        self.source
    }

    /// Validate an event and build its bus entry without sending it
    pub fn entry_for<T: Serialize>(&self, event: &DomainEvent<T>) -> AgieResult<BusEntry> {
        event.check_convention()?;

        let topic = event.topic_for(self.source).to_string();
        if !topics::is_registered(&topic) {
            warn!(topic = %topic, "Publishing unregistered topic");
        }

        Ok(BusEntry {
            source: self.source.as_str().to_string(),
            detail_type: topic,
            detail: serde_json::to_value(event)?,
        })
    }

    /// Publish a single domain event, returning its topic
    pub async fn publish<T: Serialize>(&self, event: &DomainEvent<T>) -> AgieResult<String> {
        let entry = self.entry_for(event)?;
        let topic = entry.detail_type.clone();

        debug!(
            bus = self.bus.name(),
            topic = %topic,
            id = %event.id,
            "Publishing domain event"
        );

        self.bus.put(vec![entry]).await?;

        info!(topic = %topic, id = %event.id, "Domain event published");
        Ok(topic)
    }

    /// Publish several events, validating all of them before sending any
    pub async fn publish_batch<T: Serialize>(
        &self,
        events: &[DomainEvent<T>],
    ) -> AgieResult<Vec<String>> {
        let entries = events
            .iter()
            .map(|event| self.entry_for(event))
            .collect::<AgieResult<Vec<_>>>()?;
        let topics: Vec<String> = entries.iter().map(|e| e.detail_type.clone()).collect();

        let max_batch = self.bus.max_batch().max(1);
        for chunk in entries.chunks(max_batch) {
            self.bus.put(chunk.to_vec()).await?;
            debug!(bus = self.bus.name(), count = chunk.len(), "Batch chunk published");
        }

        info!(count = events.len(), "Batch published successfully");
        Ok(topics)
    }

    /// Publish a command detail under a registered non-domain topic
    pub async fn publish_command<D: Serialize>(
        &self,
        detail_type: &str,
        detail: &D,
    ) -> AgieResult<()> {
        let entry = topics::lookup(detail_type)
            .filter(|entry| entry.domain.is_none())
            .ok_or_else(|| {
                AgieError::InvalidTopic(format!(
                    "'{}' is not a registered command topic",
                    detail_type
                ))
            })?;

        self.bus
            .put(vec![BusEntry {
                source: self.source.as_str().to_string(),
                detail_type: entry.topic.to_string(),
                detail: serde_json::to_value(detail)?,
            }])
            .await?;

        info!(topic = %entry.topic, "Command published");
        Ok(())
    }

    /// Publish a detail that is not a change envelope under a domain topic
    ///
    /// Only registered topics of this publisher's source whose resource segment
    /// has no envelope resource type qualify, e.g. executor polygon metadata.
    /// Change events for a [`ResourceType`](crate::domain::ResourceType) go
    /// through [`publish`](Self::publish) so the snapshot convention is checked.
    pub async fn publish_detail<D: Serialize>(
        &self,
        topic: DomainTopic,
        detail: &D,
    ) -> AgieResult<String> {
        let rendered = topic.to_string();

        if topic.source != self.source {
            return Err(AgieError::InvalidTopic(format!(
                "'{}' is not published by {}",
                rendered, self.source
            )));
        }
        if topic.resource.resource_type().is_some() {
            return Err(AgieError::InvalidTopic(format!(
                "'{}' carries change envelopes, use publish",
                rendered
            )));
        }
        if topics::lookup(&rendered).and_then(|entry| entry.domain) != Some(topic) {
            return Err(AgieError::InvalidTopic(format!(
                "'{}' is not a registered domain topic",
                rendered
            )));
        }

        self.bus
            .put(vec![BusEntry {
                source: self.source.as_str().to_string(),
                detail_type: rendered.clone(),
                detail: serde_json::to_value(detail)?,
            }])
            .await?;

        info!(topic = %rendered, "Detail published");
        Ok(rendered)
    }
}

/// Build the transport selected by configuration
pub async fn connect_bus(config: &BusConfig) -> AgieResult<Arc<dyn EventBus>> {
    match config.backend {
        BusBackend::Memory => Ok(Arc::new(InMemoryBus::new())),
        #[cfg(feature = "aws")]
        BusBackend::EventBridge => Ok(Arc::new(EventBridgeBus::from_config(config).await?)),
        #[cfg(not(feature = "aws"))]
        BusBackend::EventBridge => Err(AgieError::Configuration(
            "eventbridge backend requires the 'aws' feature".to_string(),
        )),
        #[cfg(feature = "nats")]
        BusBackend::Nats => {
            let nats_config = NatsConfig {
                servers: vec![config.nats_url.clone()],
                name: config.client_name.clone(),
                ..NatsConfig::default()
            };
            Ok(Arc::new(NatsBus::connect(nats_config).await?))
        }
        #[cfg(not(feature = "nats"))]
        BusBackend::Nats => Err(AgieError::Configuration(
            "nats backend requires the 'nats' feature".to_string(),
        )),
    }
}
