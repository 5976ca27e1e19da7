// Copyright (c) 2025 - Cowboy AI, Inc.
//! Configuration for publishers and the local bootstrap tool
//!
//! Both configs load from environment variables. `from_lookup` takes any
//! key lookup so callers (and tests) can supply values without touching the
//! process environment.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::{AgieError, AgieResult};
use crate::naming::shared_event_bus_name;

pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";
pub const AWS_REGION_VAR: &str = "AWS_REGION";
pub const AWS_ACCOUNT_ID_VAR: &str = "AWS_ACCOUNT_ID";
pub const EVENT_BUS_NAME_VAR: &str = "EVENT_BUS_NAME";
pub const EVENT_BUS_BACKEND_VAR: &str = "EVENT_BUS_BACKEND";
pub const NATS_URL_VAR: &str = "NATS_URL";
pub const NATS_CLIENT_NAME_VAR: &str = "NATS_CLIENT_NAME";

/// Product namespace at the root of every parameter path
pub const DEFAULT_NAMESPACE: &str = "agie";
/// File the bootstrap tool writes by default
pub const DEFAULT_OUTPUT: &str = ".env";

/// Transport a publisher connects to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusBackend {
    #[default]
    EventBridge,
    Nats,
    Memory,
}

impl BusBackend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EventBridge => "eventbridge",
            Self::Nats => "nats",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for BusBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusBackend {
    type Err = AgieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eventbridge" => Ok(Self::EventBridge),
            "nats" => Ok(Self::Nats),
            "memory" => Ok(Self::Memory),
            other => Err(AgieError::Configuration(format!(
                "unknown {} '{}', expected eventbridge, nats or memory",
                EVENT_BUS_BACKEND_VAR, other
            ))),
        }
    }
}

/// Publisher-side bus configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusConfig {
    pub backend: BusBackend,
    /// Name of the deployed event bus
    pub event_bus_name: Option<String>,
    pub region: Option<String>,
    pub nats_url: String,
    pub client_name: String,
}

impl BusConfig {
    /// In-memory bus, for tests and local runs
    pub fn memory() -> Self {
        Self {
            backend: BusBackend::Memory,
            event_bus_name: None,
            region: None,
            nats_url: "nats://localhost:4222".to_string(),
            client_name: "agie-events".to_string(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> AgieResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// When `EVENT_BUS_NAME` is absent the shared bus name is derived from
    /// `ENVIRONMENT`, `AWS_ACCOUNT_ID` and `AWS_REGION` if all three are set.
    pub fn from_lookup<F>(lookup: F) -> AgieResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let backend = match non_empty(EVENT_BUS_BACKEND_VAR) {
            Some(value) => value.parse()?,
            None => BusBackend::default(),
        };
        let region = non_empty(AWS_REGION_VAR);

        let event_bus_name = non_empty(EVENT_BUS_NAME_VAR).or_else(|| {
            match (
                non_empty(ENVIRONMENT_VAR),
                non_empty(AWS_ACCOUNT_ID_VAR),
                region.as_deref(),
            ) {
                (Some(environment), Some(account), Some(region)) => {
                    Some(shared_event_bus_name(&environment, &account, region))
                }
                _ => None,
            }
        });

        if backend == BusBackend::EventBridge {
            if event_bus_name.is_none() {
                return Err(AgieError::Configuration(format!(
                    "{} is not specified and cannot be derived from {}, {} and {}",
                    EVENT_BUS_NAME_VAR, ENVIRONMENT_VAR, AWS_ACCOUNT_ID_VAR, AWS_REGION_VAR
                )));
            }
            if region.is_none() {
                return Err(AgieError::Configuration(format!(
                    "{} is not specified",
                    AWS_REGION_VAR
                )));
            }
        }

        let defaults = Self::memory();
        Ok(Self {
            backend,
            event_bus_name,
            region,
            nats_url: non_empty(NATS_URL_VAR).unwrap_or(defaults.nats_url),
            client_name: non_empty(NATS_CLIENT_NAME_VAR).unwrap_or(defaults.client_name),
        })
    }
}

/// Local bootstrap configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    pub environment: String,
    pub region: String,
    pub namespace: String,
    pub output: PathBuf,
}

impl BootstrapConfig {
    /// Validate the required environment and region
    pub fn new(environment: impl Into<String>, region: impl Into<String>) -> AgieResult<Self> {
        let environment = environment.into();
        let region = region.into();

        if environment.trim().is_empty() || region.trim().is_empty() {
            return Err(AgieError::Configuration(format!(
                "Environment variable {} or {} is not specified.",
                ENVIRONMENT_VAR, AWS_REGION_VAR
            )));
        }

        Ok(Self {
            environment,
            region,
            namespace: DEFAULT_NAMESPACE.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        })
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Load `ENVIRONMENT` and `AWS_REGION` from environment variables
    pub fn from_env() -> AgieResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AgieResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(
            lookup(ENVIRONMENT_VAR).unwrap_or_default(),
            lookup(AWS_REGION_VAR).unwrap_or_default(),
        )
    }
}
