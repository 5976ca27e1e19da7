// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Topic uniqueness and parsing, envelope round-trips and the snapshot
//! convention.

mod topic_properties;
