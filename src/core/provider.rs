use crate::core::change::{ChangeBatch, ChangeResponse};
use crate::core::record::ResourceRecordSet;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Hosted zone identifier in the `/hostedzone/<id>` form the API expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostedZoneId(String);

impl HostedZoneId {
    const PREFIX: &'static str = "/hostedzone/";

    pub fn new(zone: &str) -> Self {
        let id = zone
            .trim()
            .trim_matches('/')
            .trim_start_matches("hostedzone/")
            .trim_matches('/');
        Self(format!("{}{id}", Self::PREFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostedZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One page of a record set listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSetPage {
    pub record_sets: Vec<ResourceRecordSet>,
    pub is_truncated: bool,
}

/// An error the DNS service itself reported for a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {context}")]
pub struct ServiceError {
    pub code: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Service error: {0}")]
    Service(ServiceError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid request: {0}")]
    Request(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSetApi: Send + Sync {
    fn name(&self) -> &str;
    async fn list_resource_record_sets(
        &self,
        zone: &HostedZoneId,
    ) -> Result<RecordSetPage, ApiError>;
    async fn change_resource_record_sets(
        &self,
        zone: &HostedZoneId,
        batch: &ChangeBatch,
    ) -> Result<ChangeResponse, ApiError>;
}
