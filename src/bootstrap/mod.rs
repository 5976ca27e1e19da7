// Copyright (c) 2025 - Cowboy AI, Inc.
//! Local environment bootstrap
//!
//! Resolves deployed parameters for one environment and writes them, after a
//! fixed preamble, to a local `.env` file:
//!
//! ```text
//! NODE_ENV=local
//! REDIS_ENDPOINT=127.0.0.1
//! AWS_XRAY_CONTEXT_MISSING=IGNORE_ERROR
//! EVENT_BUS_NAME=<value of /agie/<env>/shared/eventBusName>
//! TABLE_NAME=<value of /agie/<env>/regions/tableName>
//! TASK_QUEUE_URL=<value of /agie/<env>/regions/taskQueueUrl>
//! ```
//!
//! Every parameter is resolved before anything is written, so a missing
//! parameter leaves any existing output untouched.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::BootstrapConfig;
use crate::errors::{AgieError, AgieResult};

mod env_file;
#[cfg(feature = "aws")]
pub mod ssm;

pub use env_file::EnvFile;
#[cfg(feature = "aws")]
pub use ssm::SsmParameterStore;

/// Lines written ahead of the resolved parameters
pub const PREAMBLE: [(&str, &str); 3] = [
    ("NODE_ENV", "local"),
    ("REDIS_ENDPOINT", "127.0.0.1"),
    ("AWS_XRAY_CONTEXT_MISSING", "IGNORE_ERROR"),
];

/// Hierarchical parameter name: `/<namespace>/<environment>/<module>/<name>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterPath {
    pub namespace: String,
    pub environment: String,
    pub module: String,
    pub name: String,
}

impl ParameterPath {
    pub fn new(
        namespace: impl Into<String>,
        environment: impl Into<String>,
        module: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            environment: environment.into(),
            module: module.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ParameterPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/{}/{}/{}/{}",
            self.namespace, self.environment, self.module, self.name
        )
    }
}

/// One output key and the parameter it comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterMapping {
    pub key: String,
    pub module: String,
    pub name: String,
}

impl ParameterMapping {
    pub fn new(key: impl Into<String>, module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            module: module.into(),
            name: name.into(),
        }
    }

    pub fn path(&self, config: &BootstrapConfig) -> ParameterPath {
        ParameterPath::new(
            config.namespace.clone(),
            config.environment.clone(),
            self.module.clone(),
            self.name.clone(),
        )
    }
}

/// Mappings resolved for a local run, in output order
pub fn default_mappings() -> Vec<ParameterMapping> {
    vec![
        ParameterMapping::new("EVENT_BUS_NAME", "shared", "eventBusName"),
        ParameterMapping::new("TABLE_NAME", "regions", "tableName"),
        ParameterMapping::new("TASK_QUEUE_URL", "regions", "taskQueueUrl"),
    ]
}

/// Remote key-value parameter lookup
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Value at `path`, or `None` when no such parameter exists
    async fn get_parameter(&self, path: &ParameterPath) -> AgieResult<Option<String>>;
}

/// Parameter store backed by a map
#[derive(Debug, Clone, Default)]
pub struct MemoryParameterStore {
    values: HashMap<String, String>,
}

impl MemoryParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(path.into(), value.into());
        self
    }
}

#[async_trait]
impl ParameterStore for MemoryParameterStore {
    async fn get_parameter(&self, path: &ParameterPath) -> AgieResult<Option<String>> {
        Ok(self.values.get(&path.to_string()).cloned())
    }
}

/// Resolves parameters for one environment into an [`EnvFile`]
pub struct LocalConfigGenerator {
    store: Arc<dyn ParameterStore>,
    config: BootstrapConfig,
    mappings: Vec<ParameterMapping>,
}

impl LocalConfigGenerator {
    pub fn new(store: Arc<dyn ParameterStore>, config: BootstrapConfig) -> Self {
        Self {
            store,
            config,
            mappings: default_mappings(),
        }
    }

    pub fn with_mappings(mut self, mappings: Vec<ParameterMapping>) -> Self {
        self.mappings = mappings;
        self
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Resolve every mapping in order, stopping at the first missing one
    pub async fn generate(&self) -> AgieResult<EnvFile> {
        let mut env = EnvFile::new();
        for (key, value) in PREAMBLE {
            env.push(key, value);
        }

        for mapping in &self.mappings {
            let path = mapping.path(&self.config);
            debug!(parameter = %path, key = %mapping.key, "Resolving parameter");

            let value = self
                .store
                .get_parameter(&path)
                .await?
                .ok_or_else(|| AgieError::MissingParameter {
                    path: path.to_string(),
                })?;
            env.push(mapping.key.clone(), value);
        }

        info!(
            environment = %self.config.environment,
            region = %self.config.region,
            resolved = self.mappings.len(),
            "Local configuration resolved"
        );
        Ok(env)
    }

    /// Generate and write to the configured output file
    pub async fn run(&self) -> AgieResult<EnvFile> {
        let output = &self.config.output;
        let env = self.generate().await?;
        env.write_atomic(output)?;
        info!(path = %output.display(), "Local configuration written");
        Ok(env)
    }
}
