use aws_config::meta::region::RegionProviderChain;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_route53::config::{Credentials, Region};
use aws_sdk_route53::Client;
use tracing::debug;

use crate::auth::credentials::CredentialSource;
use crate::core::change::{ChangeBatch, ChangeResponse};
use crate::core::provider::{HostedZoneId, RecordSetPage};
use crate::providers::route53::error::Route53ProviderError;
use crate::providers::route53::types::{to_record_set, to_route53_change_batch};

/// Route 53 is global; the SDK still needs a region to sign requests.
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, Default)]
pub struct Route53Config {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

pub struct Route53Provider {
    client: Client,
}

impl Route53Provider {
    pub async fn new(config: &Route53Config, credentials: &CredentialSource) -> Self {
        let region = RegionProviderChain::first_try(config.region.clone().map(Region::new))
            .or_default_provider()
            .or_else(Region::new(DEFAULT_REGION));

        // One attempt per request; failures are reported, not retried.
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .retry_config(RetryConfig::disabled());

        if let CredentialSource::Static {
            access_key_id,
            secret_access_key,
        } = credentials
        {
            loader = loader.credentials_provider(Credentials::new(
                access_key_id.clone(),
                secret_access_key.clone(),
                None,
                None,
                "route53-record",
            ));
        }
        if let Some(endpoint_url) = &config.endpoint_url {
            debug!("Using Route 53 endpoint override: {}", endpoint_url);
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        let sdk_config = loader.load().await;
        Self {
            client: Client::new(&sdk_config),
        }
    }

    pub async fn list_record_sets(
        &self,
        zone: &HostedZoneId,
    ) -> Result<RecordSetPage, Route53ProviderError> {
        let output = self
            .client
            .list_resource_record_sets()
            .hosted_zone_id(zone.as_str())
            .send()
            .await
            .map_err(Route53ProviderError::from_sdk)?;

        Ok(RecordSetPage {
            record_sets: output
                .resource_record_sets()
                .iter()
                .map(to_record_set)
                .collect(),
            is_truncated: output.is_truncated(),
        })
    }

    pub async fn change_record_sets(
        &self,
        zone: &HostedZoneId,
        batch: &ChangeBatch,
    ) -> Result<ChangeResponse, Route53ProviderError> {
        let change_batch = to_route53_change_batch(batch)?;
        let output = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(zone.as_str())
            .change_batch(change_batch)
            .send()
            .await
            .map_err(Route53ProviderError::from_sdk)?;

        Ok(ChangeResponse {
            raw: format!("{output:?}"),
        })
    }
}
