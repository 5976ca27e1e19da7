// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Contracts
//!
//! Passive data-transfer types exchanged on the shared bus. Producers fill
//! them in, the bus carries them, consumers read them. No behavior beyond
//! shape and the snapshot convention check lives here.
//!
//! # Message Shape
//!
//! ```text
//! BusEvent { account, region, source, detail-type = topic, detail }
//!                                                          |
//!                         DomainEvent<T> { resourceType, eventType, id, old?, new?, error? }
//! ```
//!
//! # Module Organization
//!
//! - [`envelope`] - `DomainEvent<T>`, `EventError`, typed `Change<T>`
//! - [`bus_event`] - bus wrapper and per-module change event aliases

pub mod bus_event;
pub mod envelope;

pub use bus_event::{
    BusEvent, CatalogCreateEvent, GroupChangeEvent, JobChangeEvent, PolygonChangeEvent,
    PolygonsProcessingEvent, RegionChangeEvent, ResultsChangeEvent, ScheduledEvent,
    SubscriptionChangeEvent,
};
pub use envelope::{Change, DomainEvent, EventError};
