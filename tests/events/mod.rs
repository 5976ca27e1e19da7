// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event contract test modules

mod envelope_serialization;
mod topic_registry;
