//! In-memory stand-in for the DNS service, used when `mock` is set.
//!
//! Changes are applied to a per-client zone map so a seeded record can be
//! listed and deleted again without any network traffic. Every submitted
//! batch is recorded for inspection.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use crate::core::change::{ChangeAction, ChangeBatch, ChangeResponse};
use crate::core::provider::{ApiError, HostedZoneId, RecordSetApi, RecordSetPage, ServiceError};
use crate::core::record::ResourceRecordSet;

#[derive(Default)]
pub struct StubProvider {
    zones: Mutex<HashMap<HostedZoneId, Vec<ResourceRecordSet>>>,
    submitted: Mutex<Vec<ChangeBatch>>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Batches in the order they were submitted, rejected ones included.
    pub fn submitted(&self) -> Vec<ChangeBatch> {
        self.submitted
            .lock()
            .map(|batches| batches.clone())
            .unwrap_or_default()
    }

    fn lock_error<T>(_: T) -> ApiError {
        ApiError::Transport("stub state poisoned".to_string())
    }

    fn invalid_change(message: String) -> ApiError {
        ApiError::Service(ServiceError {
            code: "InvalidChangeBatch".to_string(),
            context: message,
        })
    }
}

// Route 53 keys record sets by name and type.
fn same_set(a: &ResourceRecordSet, b: &ResourceRecordSet) -> bool {
    a.name == b.name && a.record_type == b.record_type
}

#[async_trait]
impl RecordSetApi for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn list_resource_record_sets(
        &self,
        zone: &HostedZoneId,
    ) -> Result<RecordSetPage, ApiError> {
        let zones = self.zones.lock().map_err(Self::lock_error)?;
        Ok(RecordSetPage {
            record_sets: zones.get(zone).cloned().unwrap_or_default(),
            is_truncated: false,
        })
    }

    async fn change_resource_record_sets(
        &self,
        zone: &HostedZoneId,
        batch: &ChangeBatch,
    ) -> Result<ChangeResponse, ApiError> {
        self.submitted
            .lock()
            .map_err(Self::lock_error)?
            .push(batch.clone());

        let mut zones = self.zones.lock().map_err(Self::lock_error)?;
        // Validate against a copy so a rejected batch leaves the zone untouched.
        let mut records = zones.get(zone).cloned().unwrap_or_default();
        for change in &batch.changes {
            let set = &change.resource_record_set;
            let existing = records.iter().position(|r| same_set(r, set));
            match (change.action, existing) {
                (ChangeAction::Create, Some(_)) => {
                    return Err(Self::invalid_change(format!(
                        "Tried to create resource record set [name='{}', type='{}'] but it already exists",
                        set.name, set.record_type
                    )));
                }
                (ChangeAction::Create, None) | (ChangeAction::Upsert, None) => {
                    records.push(set.clone())
                }
                (ChangeAction::Upsert, Some(i)) => records[i] = set.clone(),
                (ChangeAction::Delete, Some(i)) => {
                    records.remove(i);
                }
                (ChangeAction::Delete, None) => {
                    return Err(Self::invalid_change(format!(
                        "Tried to delete resource record set [name='{}', type='{}'] but it was not found",
                        set.name, set.record_type
                    )));
                }
            }
        }
        zones.insert(zone.clone(), records);

        let id = format!("/change/STUB{:04}", self.submitted().len());
        debug!("Stub applied change batch {}: {}", id, batch.comment);
        Ok(ChangeResponse {
            raw: format!("ChangeInfo {{ id: {id:?}, status: \"INSYNC\" }}"),
        })
    }
}
