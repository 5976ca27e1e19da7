// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-process bus that records everything put on it

use async_trait::async_trait;
use std::sync::Mutex;

use super::{BusEntry, EventBus, DEFAULT_MAX_BATCH};
use crate::errors::{AgieError, AgieResult};

#[derive(Debug, Default)]
struct Recorded {
    entries: Vec<BusEntry>,
    put_calls: usize,
}

/// Bus that keeps entries in memory
#[derive(Debug)]
pub struct InMemoryBus {
    recorded: Mutex<Recorded>,
    max_batch: usize,
}

impl InMemoryBus {
    pub fn new() -> Self {
        Self::with_max_batch(DEFAULT_MAX_BATCH)
    }

    pub fn with_max_batch(max_batch: usize) -> Self {
        Self {
            recorded: Mutex::new(Recorded::default()),
            max_batch,
        }
    }

    /// Copy of every entry put so far, in order
    pub fn entries(&self) -> Vec<BusEntry> {
        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .entries
            .clone()
    }

    /// Remove and return every recorded entry
    pub fn take(&self) -> Vec<BusEntry> {
        std::mem::take(
            &mut self
                .recorded
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .entries,
        )
    }

    /// Number of `put` calls received
    pub fn put_calls(&self) -> usize {
        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .put_calls
    }
}

impl Default for InMemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBus for InMemoryBus {
    async fn put(&self, entries: Vec<BusEntry>) -> AgieResult<()> {
        if entries.len() > self.max_batch {
            return Err(AgieError::Publish(format!(
                "batch of {} exceeds limit of {}",
                entries.len(),
                self.max_batch
            )));
        }

        let mut recorded = self
            .recorded
            .lock()
            .map_err(|_| AgieError::Publish("in-memory bus lock poisoned".to_string()))?;
        recorded.put_calls += 1;
        recorded.entries.extend(entries);
        Ok(())
    }

    fn max_batch(&self) -> usize {
        self.max_batch
    }

    fn name(&self) -> &str {
        "memory"
    }
}
