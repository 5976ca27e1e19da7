// Copyright (c) 2025 - Cowboy AI, Inc.
//! Domain Models
//!
//! The event taxonomy and the resource payloads each module publishes inside
//! a [`DomainEvent`](crate::events::DomainEvent).
//!
//! - [`ResourceType`] / [`EventType`] - closed taxonomy shared by every topic
//! - [`regions`] - groups, regions, polygons and polygon states
//! - [`results`] - engine results, catalog commands, polygon processing requests
//! - [`notifications`] - subscriptions
//! - [`executor`] - executor jobs

pub mod executor;
pub mod notifications;
pub mod regions;
pub mod resource_type;
pub mod results;

pub use executor::{JobResource, JobStatus};
pub use notifications::SubscriptionResource;
pub use regions::{GroupResource, PolygonResource, ProcessingConfig, RegionResource, StateResource};
pub use resource_type::{EventType, ResourceType};
pub use results::{CatalogDetails, PolygonProcessingDetails, ResultResource};

use std::collections::BTreeMap;

/// Free-form key/value tags attached to resources
pub type Tags = BTreeMap<String, String>;
