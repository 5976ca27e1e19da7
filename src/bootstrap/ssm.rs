// Copyright (c) 2025 - Cowboy AI, Inc.
//! SSM Parameter Store lookups

use async_trait::async_trait;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::Client;
use tracing::debug;

use super::{ParameterPath, ParameterStore};
use crate::errors::{AgieError, AgieResult};

/// Reads plain-text parameters with `GetParameter`
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Load AWS configuration for `region`
    pub async fn for_region(region: impl Into<String>) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.into()))
            .load()
            .await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(&self, path: &ParameterPath) -> AgieResult<Option<String>> {
        let name = path.to_string();
        debug!(parameter = %name, "GetParameter");

        match self
            .client
            .get_parameter()
            .name(&name)
            .with_decryption(false)
            .send()
            .await
        {
            Ok(output) => Ok(output.parameter().and_then(|p| p.value()).map(str::to_string)),
            Err(err) => {
                let service_error = err.into_service_error();
                if service_error.is_parameter_not_found() {
                    Ok(None)
                } else {
                    Err(AgieError::ParameterStore(format!(
                        "{}: {}",
                        name,
                        DisplayErrorContext(&service_error)
                    )))
                }
            }
        }
    }
}
