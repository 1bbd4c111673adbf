//! AWS Route 53 provider implementation

pub mod client;
pub mod error;
pub mod types;


pub use client::{Route53Config, Route53Provider};

// --- RecordSetApi trait implementation for Route53Provider ---
use crate::core::change::{ChangeBatch, ChangeResponse};
use crate::core::provider::{ApiError, HostedZoneId, RecordSetApi, RecordSetPage};
use async_trait::async_trait;
use error::map_error;

#[async_trait]
impl RecordSetApi for Route53Provider {
    fn name(&self) -> &str {
        "route53"
    }

    async fn list_resource_record_sets(
        &self,
        zone: &HostedZoneId,
    ) -> Result<RecordSetPage, ApiError> {
        self.list_record_sets(zone).await.map_err(map_error)
    }

    async fn change_resource_record_sets(
        &self,
        zone: &HostedZoneId,
        batch: &ChangeBatch,
    ) -> Result<ChangeResponse, ApiError> {
        self.change_record_sets(zone, batch).await.map_err(map_error)
    }
}
