// Copyright (c) 2025 - Cowboy AI, Inc.
//! Domain Event Taxonomy
//!
//! The closed set of resource types a domain event can concern and the
//! closed set of lifecycle transitions it can describe. Both appear verbatim
//! in topic strings and in the `resourceType` / `eventType` envelope fields,
//! so their string forms are part of the wire contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AgieError;

/// Resource type taxonomy
///
/// Serializes as the PascalCase variant name (`"Region"`, `"Polygon"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceType {
    /// A polygon (zone) inside a region
    Polygon,
    /// A group of regions
    Group,
    /// A region of polygons processed on a schedule
    Region,
    /// A point-in-time state recorded against a polygon
    State,
    /// An executor job
    Job,
    /// An engine processing result
    Result,
    /// A notification subscription
    Subscription,
}

impl ResourceType {
    /// Every resource type, in declaration order
    pub const ALL: [ResourceType; 7] = [
        Self::Polygon,
        Self::Group,
        Self::Region,
        Self::State,
        Self::Job,
        Self::Result,
        Self::Subscription,
    ];

    /// Get the canonical string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Polygon => "Polygon",
            Self::Group => "Group",
            Self::Region => "Region",
            Self::State => "State",
            Self::Job => "Job",
            Self::Result => "Result",
            Self::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = AgieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|resource| resource.as_str() == s)
            .ok_or_else(|| AgieError::InvalidTopic(format!("unknown resource type '{}'", s)))
    }
}

/// Lifecycle transition described by a domain event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Resource came into existence
    Created,
    /// Resource changed
    Updated,
    /// Resource was removed
    Deleted,
}

impl EventType {
    /// Every event type, in declaration order
    pub const ALL: [EventType; 3] = [Self::Created, Self::Updated, Self::Deleted];

    /// Get the canonical string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }

    /// Whether an envelope of this type must carry a `new` snapshot
    pub const fn expects_new(&self) -> bool {
        matches!(self, Self::Created | Self::Updated)
    }

    /// Whether an envelope of this type must carry an `old` snapshot
    pub const fn expects_old(&self) -> bool {
        matches!(self, Self::Updated | Self::Deleted)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = AgieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| AgieError::InvalidTopic(format!("unknown event type '{}'", s)))
    }
}
