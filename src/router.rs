// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event routing for subscribers
//!
//! Routes each incoming bus event to the handler registered for its
//! `detail-type`, decoding the detail into the handler's payload type.
//! Events for topics nobody registered are skipped, not treated as errors.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::marker::PhantomData;
use tracing::{debug, warn};

use crate::errors::{AgieError, AgieResult};
use crate::events::{BusEvent, DomainEvent};
use crate::topics;

/// Handler for one topic's typed domain events
#[async_trait]
pub trait DomainEventHandler<T: Send + 'static>: Send + Sync {
    async fn handle(&self, event: BusEvent<DomainEvent<T>>) -> AgieResult<()>;
}

/// Function-based handler
pub struct FnHandler<F> {
    handler: F,
}

impl<F> FnHandler<F> {
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl<T, F> DomainEventHandler<T> for FnHandler<F>
where
    T: Send + 'static,
    F: Fn(BusEvent<DomainEvent<T>>) -> AgieResult<()> + Send + Sync,
{
    async fn handle(&self, event: BusEvent<DomainEvent<T>>) -> AgieResult<()> {
        (self.handler)(event)
    }
}

#[async_trait]
trait RawHandler: Send + Sync {
    async fn dispatch(&self, event: BusEvent<serde_json::Value>) -> AgieResult<()>;
}

struct Typed<T, H> {
    handler: H,
    _payload: PhantomData<fn() -> T>,
}

#[async_trait]
impl<T, H> RawHandler for Typed<T, H>
where
    T: DeserializeOwned + Send + 'static,
    H: DomainEventHandler<T>,
{
    async fn dispatch(&self, mut event: BusEvent<serde_json::Value>) -> AgieResult<()> {
        let raw = std::mem::take(&mut event.detail);
        let detail: DomainEvent<T> = serde_json::from_value(raw)?;
        self.handler.handle(event.with_detail(detail)).await
    }
}

/// What the router did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    Handled,
    Unrouted,
}

/// Topic to handler table
#[derive(Default)]
pub struct EventRouter {
    routes: HashMap<String, Box<dyn RawHandler>>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for a topic
    ///
    /// A topic has at most one handler; registering a second is an error.
    pub fn register<T, H>(&mut self, topic: &str, handler: H) -> AgieResult<()>
    where
        T: DeserializeOwned + Send + 'static,
        H: DomainEventHandler<T> + 'static,
    {
        if self.routes.contains_key(topic) {
            return Err(AgieError::Configuration(format!(
                "handler already registered for topic '{}'",
                topic
            )));
        }
        if !topics::is_registered(topic) {
            warn!(topic = %topic, "Routing unregistered topic");
        }

        self.routes.insert(
            topic.to_string(),
            Box::new(Typed {
                handler,
                _payload: PhantomData,
            }),
        );
        Ok(())
    }

    /// Topics with a registered handler
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Route a decoded bus event
    pub async fn route(&self, event: BusEvent<serde_json::Value>) -> AgieResult<RouteOutcome> {
        match self.routes.get(&event.detail_type) {
            Some(handler) => {
                debug!(topic = %event.detail_type, source = %event.source, "Routing event");
                handler.dispatch(event).await?;
                Ok(RouteOutcome::Handled)
            }
            None => {
                debug!(topic = %event.detail_type, "No handler for topic, skipping");
                Ok(RouteOutcome::Unrouted)
            }
        }
    }

    /// Decode raw JSON into a bus event and route it
    pub async fn route_slice(&self, payload: &[u8]) -> AgieResult<RouteOutcome> {
        let event: BusEvent<serde_json::Value> = serde_json::from_slice(payload)?;
        self.route(event).await
    }
}
