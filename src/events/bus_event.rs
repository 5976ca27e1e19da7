// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bus Event Envelope
//!
//! The wrapper subscribers receive from the bus. `detail-type` carries the
//! topic and `detail` the payload, usually a [`DomainEvent`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::envelope::DomainEvent;
use crate::domain::{
    CatalogDetails, GroupResource, JobResource, PolygonProcessingDetails, PolygonResource,
    RegionResource, ResultResource, SubscriptionResource,
};
use crate::errors::AgieResult;
use crate::topics::DomainTopic;

/// Message as delivered by the bus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusEvent<D> {
    /// Bus-assigned event id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub region: String,
    pub source: String,
    #[serde(rename = "detail-type")]
    pub detail_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    pub detail: D,
}

impl<D> BusEvent<D> {
    /// Parse `detail-type` as a domain topic
    pub fn topic(&self) -> AgieResult<DomainTopic> {
        self.detail_type.parse()
    }

    /// Replace the detail, keeping the routing fields
    pub fn with_detail<E>(self, detail: E) -> BusEvent<E> {
        BusEvent {
            id: self.id,
            account: self.account,
            region: self.region,
            source: self.source,
            detail_type: self.detail_type,
            time: self.time,
            detail,
        }
    }
}

pub type GroupChangeEvent = BusEvent<DomainEvent<GroupResource>>;
pub type RegionChangeEvent = BusEvent<DomainEvent<RegionResource>>;
pub type PolygonChangeEvent = BusEvent<DomainEvent<PolygonResource>>;
pub type ResultsChangeEvent = BusEvent<DomainEvent<ResultResource>>;
pub type SubscriptionChangeEvent = BusEvent<DomainEvent<SubscriptionResource>>;
pub type JobChangeEvent = BusEvent<DomainEvent<JobResource>>;
pub type CatalogCreateEvent = BusEvent<CatalogDetails>;
pub type PolygonsProcessingEvent = BusEvent<PolygonProcessingDetails>;

/// Scheduler tick; EventBridge sends an empty object as detail
pub type ScheduledEvent = BusEvent<serde_json::Value>;
