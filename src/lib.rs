// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event contracts and bus plumbing for AGIE modules
//!
//! This crate provides the shared event taxonomy, topic registry and
//! envelopes, publishers and routers over EventBridge or NATS, and the
//! local bootstrap that resolves deployed parameters into a `.env` file.

pub mod bootstrap;
pub mod bus;
pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod naming;
pub mod router;
pub mod topics;

// Re-export commonly used types
pub use bootstrap::{EnvFile, LocalConfigGenerator, ParameterPath, ParameterStore};
pub use bus::{connect_bus, DomainEventPublisher, EventBus, InMemoryBus};
pub use config::{BootstrapConfig, BusBackend, BusConfig};
pub use domain::{EventType, ResourceType};
pub use errors::{AgieError, AgieResult};
pub use events::{BusEvent, Change, DomainEvent, EventError};
pub use router::{DomainEventHandler, EventRouter, FnHandler, RouteOutcome};
pub use topics::{DomainTopic, EventSource, TopicBuilder};
