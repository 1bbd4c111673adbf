use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod auth;
mod config;
mod core;
mod error;
mod providers;
mod reconciler;
mod report;
mod state;

use auth::credentials::CredentialSource;
use config::{Cli, Config};
use crate::core::provider::HostedZoneId;
use crate::core::record::RecordDescriptor;
use reconciler::Reconciler;

/// Returns whether the run should count as a success.
async fn run(config: Config) -> error::Result<bool> {
    let record = RecordDescriptor::from_input(config.record);
    let credentials = CredentialSource::resolve(
        record.mock,
        config.aws_access_key_id.as_deref(),
        config.aws_secret_access_key.as_deref(),
    );
    let client = providers::connect(&credentials, &config.route53).await;

    let reconciler = Reconciler::new(client.as_ref(), HostedZoneId::new(&config.zone), record);
    let reconciliation = reconciler.run(config.intent).await?;

    Ok(reconciliation.is_success() || !config.strict)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = match Config::from_cli(cli) {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
