// Copyright (c) 2025 - Cowboy AI, Inc.
//! EventBridge transport
//!
//! Each [`BusEntry`] becomes one `PutEvents` request entry on the configured
//! bus: `Source` is the module source, `DetailType` the topic and `Detail`
//! the JSON envelope.

use async_trait::async_trait;
use aws_sdk_eventbridge::error::DisplayErrorContext;
use aws_sdk_eventbridge::types::PutEventsRequestEntry;
use aws_sdk_eventbridge::Client;
use tracing::{debug, error};

use super::{BusEntry, EventBus, DEFAULT_MAX_BATCH};
use crate::config::BusConfig;
use crate::errors::{AgieError, AgieResult};

/// Publishes to an EventBridge event bus
#[derive(Debug, Clone)]
pub struct EventBridgeBus {
    client: Client,
    event_bus_name: String,
}

impl EventBridgeBus {
    pub fn new(client: Client, event_bus_name: impl Into<String>) -> Self {
        Self {
            client,
            event_bus_name: event_bus_name.into(),
        }
    }

    /// Load AWS configuration for the configured region and bus
    pub async fn from_config(config: &BusConfig) -> AgieResult<Self> {
        let event_bus_name = config.event_bus_name.clone().ok_or_else(|| {
            AgieError::Configuration("EVENT_BUS_NAME is required for eventbridge".to_string())
        })?;

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        Ok(Self::new(Client::new(&sdk_config), event_bus_name))
    }

    pub fn event_bus_name(&self) -> &str {
        &self.event_bus_name
    }

    fn request_entry(&self, entry: &BusEntry) -> PutEventsRequestEntry {
        PutEventsRequestEntry::builder()
            .event_bus_name(&self.event_bus_name)
            .source(&entry.source)
            .detail_type(&entry.detail_type)
            .detail(entry.detail.to_string())
            .build()
    }
}

#[async_trait]
impl EventBus for EventBridgeBus {
    async fn put(&self, entries: Vec<BusEntry>) -> AgieResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let request_entries: Vec<PutEventsRequestEntry> =
            entries.iter().map(|entry| self.request_entry(entry)).collect();

        let output = self
            .client
            .put_events()
            .set_entries(Some(request_entries))
            .send()
            .await
            .map_err(|e| AgieError::Publish(DisplayErrorContext(&e).to_string()))?;

        let failed = output.failed_entry_count();
        if failed > 0 {
            let first_failure = output
                .entries()
                .iter()
                .find(|result| result.error_code().is_some());
            let detail = first_failure
                .map(|result| {
                    format!(
                        "{}: {}",
                        result.error_code().unwrap_or_default(),
                        result.error_message().unwrap_or_default()
                    )
                })
                .unwrap_or_else(|| "no error detail returned".to_string());

            error!(
                event_bus = %self.event_bus_name,
                failed = failed,
                total = entries.len(),
                "PutEvents rejected entries"
            );
            return Err(AgieError::Publish(format!(
                "{} of {} entries rejected by {} ({})",
                failed,
                entries.len(),
                self.event_bus_name,
                detail
            )));
        }

        debug!(event_bus = %self.event_bus_name, count = entries.len(), "PutEvents succeeded");
        Ok(())
    }

    fn max_batch(&self) -> usize {
        DEFAULT_MAX_BATCH
    }

    fn name(&self) -> &str {
        "eventbridge"
    }
}
