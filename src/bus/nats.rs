// Copyright (c) 2025 - Cowboy AI, Inc.
//! NATS transport
//!
//! Topics map to subjects by replacing `>` with `.`:
//!
//! ```text
//! com.aws.agie.regions>Region>created  ->  com.aws.agie.regions.Region.created
//! ```
//!
//! The payload is the JSON [`BusEntry`], so subscribers decode it as a
//! [`BusEvent`](crate::events::BusEvent) with empty account and region. Source and
//! topic are repeated in headers for consumers that filter without decoding.

use async_nats::{Client, ConnectOptions, HeaderMap, Subscriber};
use async_trait::async_trait;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::{BusEntry, EventBus, DEFAULT_MAX_BATCH};
use crate::errors::{AgieError, AgieResult};
use crate::router::EventRouter;
use crate::topics::{nats_subject, EventSource};

/// Header carrying the publishing module's source
pub const SOURCE_HEADER: &str = "Agie-Source";
/// Header carrying the original `>`-delimited topic
pub const DETAIL_TYPE_HEADER: &str = "Agie-Detail-Type";

/// Configuration for NATS connection
#[derive(Debug, Clone)]
pub struct NatsConfig {
    /// NATS server URLs
    pub servers: Vec<String>,
    /// Client name
    pub name: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Request timeout
    pub request_timeout: Duration,
}

impl Default for NatsConfig {
    fn default() -> Self {
        Self {
            servers: vec!["nats://localhost:4222".to_string()],
            name: "agie-events".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(5),
        }
    }
}

/// Subject matching every topic one module publishes
pub fn source_subject(source: EventSource) -> String {
    format!("{}.>", source)
}

/// Bus over a NATS connection
#[derive(Clone)]
pub struct NatsBus {
    client: Client,
}

impl NatsBus {
    /// Connect with the given configuration
    pub async fn connect(config: NatsConfig) -> AgieResult<Self> {
        let connect_options = ConnectOptions::new()
            .name(&config.name)
            .connection_timeout(config.connect_timeout)
            .request_timeout(Some(config.request_timeout));

        let client = async_nats::connect_with_options(config.servers.join(","), connect_options)
            .await
            .map_err(|e| AgieError::Connection(e.to_string()))?;

        info!("Connected to NATS at {:?}", config.servers);

        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Subscribe to a subject
    pub async fn subscribe(&self, subject: &str) -> AgieResult<Subscriber> {
        let subscriber = self
            .client
            .subscribe(subject.to_string())
            .await
            .map_err(|e| AgieError::Subscribe(e.to_string()))?;

        info!("Subscribed to subject: {}", subject);
        Ok(subscriber)
    }

    /// Feed every message on `subject` through a router until the subscription ends
    pub async fn route_subscription(
        &self,
        subject: &str,
        router: Arc<EventRouter>,
    ) -> AgieResult<JoinHandle<()>> {
        let mut subscriber = self.subscribe(subject).await?;
        let subject = subject.to_string();

        let handle = tokio::spawn(async move {
            while let Some(msg) = subscriber.next().await {
                debug!(subject = %msg.subject, payload_size = msg.payload.len(), "Received event");
                if let Err(e) = router.route_slice(&msg.payload).await {
                    error!("Routing error for subject {}: {}", subject, e);
                }
            }
            warn!(subject = %subject, "Subscription ended");
        });

        Ok(handle)
    }

    /// Get the underlying NATS client for advanced operations
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl EventBus for NatsBus {
    async fn put(&self, entries: Vec<BusEntry>) -> AgieResult<()> {
        for entry in entries {
            let subject = nats_subject(&entry.detail_type);
            let payload = serde_json::to_vec(&entry)?;

            let mut headers = HeaderMap::new();
            headers.insert(SOURCE_HEADER, entry.source.as_str());
            headers.insert(DETAIL_TYPE_HEADER, entry.detail_type.as_str());

            self.client
                .publish_with_headers(subject.clone(), headers, payload.into())
                .await
                .map_err(|e| AgieError::Publish(e.to_string()))?;

            debug!("Published message to subject: {}", subject);
        }
        Ok(())
    }

    fn max_batch(&self) -> usize {
        DEFAULT_MAX_BATCH
    }

    fn name(&self) -> &str {
        "nats"
    }
}
