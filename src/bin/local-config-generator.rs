// Copyright (c) 2025 - Cowboy AI, Inc.
//! Local Config Generator
//!
//! Resolves the deployed parameters of one environment from SSM Parameter
//! Store and writes them to a local `.env` file for running modules locally.
//!
//! Run with: cargo run --bin local-config-generator -- --environment dev --region us-east-1
//!
//! Prerequisites:
//! 1. AWS credentials for the target account
//! 2. The environment's shared and regions stacks deployed

use agie_events::bootstrap::{LocalConfigGenerator, SsmParameterStore};
use agie_events::config::{BootstrapConfig, DEFAULT_NAMESPACE, DEFAULT_OUTPUT};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "local-config-generator", about = "Write a local .env from deployed parameters")]
struct Args {
    /// Deployed environment name
    #[arg(long, env = "ENVIRONMENT")]
    environment: String,

    /// AWS region of the deployment
    #[arg(long, env = "AWS_REGION")]
    region: String,

    /// Parameter namespace
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    /// Output file
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let config = BootstrapConfig::new(args.environment, args.region)
        .context("Invalid bootstrap configuration")?
        .with_namespace(args.namespace)
        .with_output(args.output);

    info!(
        environment = %config.environment,
        region = %config.region,
        output = %config.output.display(),
        "Generating local configuration"
    );

    let store = SsmParameterStore::for_region(config.region.clone()).await;
    let output = config.output.clone();
    let generator = LocalConfigGenerator::new(Arc::new(store), config);

    let env = generator
        .run()
        .await
        .with_context(|| format!("Failed to generate {}", output.display()))?;

    info!(lines = env.len(), "Done");
    Ok(())
}
