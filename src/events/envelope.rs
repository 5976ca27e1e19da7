// Copyright (c) 2025 - Cowboy AI, Inc.
//! Domain Event Envelope
//!
//! The generic container published whenever a tracked resource changes.
//! It is parameterized over the resource payload (`DomainEvent<RegionResource>`
//! for Region events, and so on).
//!
//! # Snapshot convention
//!
//! | eventType | old | new |
//! |-----------|-----|-----|
//! | created   |  -  | yes |
//! | updated   | yes | yes |
//! | deleted   | yes |  -  |
//!
//! The wire shape does not enforce this, so [`DomainEvent::check_convention`]
//! lets producers verify it, and [`Change`] gives consumers a view where
//! the convention holds by construction. When `error` is present the
//! snapshots reflect best-effort state at failure time and are not checked.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::domain::{EventType, ResourceType};
use crate::errors::{AgieError, AgieResult};
use crate::topics::{DomainTopic, EventSource};

/// Failure description carried by an envelope whose operation did not complete
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl EventError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            name: None,
            message: message.into(),
        }
    }

    pub fn named(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}: {}", name, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// A present key is a snapshot, even when the payload itself is `null`
fn present_snapshot<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Domain change event
///
/// `old` and `new` are `None` only when their key is absent, so payloads
/// that serialize to `null` survive a round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct DomainEvent<T> {
    pub resource_type: ResourceType,
    pub event_type: EventType,
    /// Opaque identifier of the affected resource
    pub id: String,
    #[serde(
        default = "Option::default",
        deserialize_with = "present_snapshot",
        skip_serializing_if = "Option::is_none"
    )]
    pub old: Option<T>,
    #[serde(
        default = "Option::default",
        deserialize_with = "present_snapshot",
        skip_serializing_if = "Option::is_none"
    )]
    pub new: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<EventError>,
}

impl<T> DomainEvent<T> {
    /// Resource came into existence
    pub fn created(resource_type: ResourceType, id: impl Into<String>, new: T) -> Self {
        Self {
            resource_type,
            event_type: EventType::Created,
            id: id.into(),
            old: None,
            new: Some(new),
            error: None,
        }
    }

    /// Resource changed from `old` to `new`
    pub fn updated(resource_type: ResourceType, id: impl Into<String>, old: T, new: T) -> Self {
        Self {
            resource_type,
            event_type: EventType::Updated,
            id: id.into(),
            old: Some(old),
            new: Some(new),
            error: None,
        }
    }

    /// Resource was removed; `old` is its last state
    pub fn deleted(resource_type: ResourceType, id: impl Into<String>, old: T) -> Self {
        Self {
            resource_type,
            event_type: EventType::Deleted,
            id: id.into(),
            old: Some(old),
            new: None,
            error: None,
        }
    }

    /// Mark the represented operation as failed
    pub fn with_error(mut self, error: EventError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// Topic this event is published under by `source`
    pub fn topic_for(&self, source: EventSource) -> DomainTopic {
        DomainTopic::for_resource(source, self.resource_type, self.event_type)
    }

    /// Verify the snapshots match the event type
    ///
    /// Failure envelopes always pass.
    pub fn check_convention(&self) -> AgieResult<()> {
        if self.is_failure() {
            return Ok(());
        }

        let violation = |reason: &str| AgieError::ConventionViolation {
            event_type: self.event_type,
            reason: reason.to_string(),
        };

        match (self.event_type.expects_old(), self.old.is_some()) {
            (true, false) => return Err(violation("missing old snapshot")),
            (false, true) => return Err(violation("unexpected old snapshot")),
            _ => {}
        }
        match (self.event_type.expects_new(), self.new.is_some()) {
            (true, false) => Err(violation("missing new snapshot")),
            (false, true) => Err(violation("unexpected new snapshot")),
            _ => Ok(()),
        }
    }

    /// Convert into the typed change, requiring the convention to hold
    pub fn into_change(self) -> AgieResult<Change<T>> {
        let event_type = self.event_type;
        let violation = |reason: &str| AgieError::ConventionViolation {
            event_type,
            reason: reason.to_string(),
        };

        match (event_type, self.old, self.new) {
            (EventType::Created, None, Some(new)) => Ok(Change::Created { new }),
            (EventType::Updated, Some(old), Some(new)) => Ok(Change::Updated { old, new }),
            (EventType::Deleted, Some(old), None) => Ok(Change::Deleted { old }),
            (_, old, new) => Err(violation(&format!(
                "old {}, new {}",
                if old.is_some() { "present" } else { "absent" },
                if new.is_some() { "present" } else { "absent" },
            ))),
        }
    }

    /// Map the payload type, keeping every other field
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> DomainEvent<U> {
        DomainEvent {
            resource_type: self.resource_type,
            event_type: self.event_type,
            id: self.id,
            old: self.old.map(&mut f),
            new: self.new.map(&mut f),
            error: self.error,
        }
    }
}

/// Snapshot-carrying transition where the convention is structural
#[derive(Debug, Clone, PartialEq)]
pub enum Change<T> {
    Created { new: T },
    Updated { old: T, new: T },
    Deleted { old: T },
}

impl<T> Change<T> {
    pub const fn event_type(&self) -> EventType {
        match self {
            Self::Created { .. } => EventType::Created,
            Self::Updated { .. } => EventType::Updated,
            Self::Deleted { .. } => EventType::Deleted,
        }
    }

    /// Most recent known state: `new` when present, otherwise `old`
    pub fn latest(&self) -> &T {
        match self {
            Self::Created { new } | Self::Updated { new, .. } => new,
            Self::Deleted { old } => old,
        }
    }

    /// Wrap into a wire envelope
    pub fn into_event(self, resource_type: ResourceType, id: impl Into<String>) -> DomainEvent<T> {
        match self {
            Self::Created { new } => DomainEvent::created(resource_type, id, new),
            Self::Updated { old, new } => DomainEvent::updated(resource_type, id, old, new),
            Self::Deleted { old } => DomainEvent::deleted(resource_type, id, old),
        }
    }
}
