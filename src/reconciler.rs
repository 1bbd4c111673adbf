use tracing::{debug, info};

use crate::core::change::{ChangeAction, ChangeBatch, ChangeOutcome};
use crate::core::provider::{ApiError, HostedZoneId, RecordSetApi};
use crate::core::record::{RecordDescriptor, ResourceRecordSet};
use crate::error::Result;
use crate::report;
use crate::state::current_record_set;

const SEED_COMMENT: &str = "TestChangeResourceRecordSet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Create,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    Changed {
        name: String,
        action: ChangeAction,
        outcome: ChangeOutcome,
    },
    /// Nothing matched, so no change was attempted.
    NothingToDelete {
        name: String,
        outcome: ChangeOutcome,
    },
}

impl Reconciliation {
    /// False only when the service rejected the change.
    pub fn is_success(&self) -> bool {
        !self.outcome().is_rejected()
    }

    pub fn name(&self) -> &str {
        match self {
            Reconciliation::Changed { name, .. } | Reconciliation::NothingToDelete { name, .. } => {
                name
            }
        }
    }

    pub fn action(&self) -> Option<ChangeAction> {
        match self {
            Reconciliation::Changed { action, .. } => Some(*action),
            Reconciliation::NothingToDelete { .. } => None,
        }
    }

    pub fn outcome(&self) -> &ChangeOutcome {
        match self {
            Reconciliation::Changed { outcome, .. }
            | Reconciliation::NothingToDelete { outcome, .. } => outcome,
        }
    }
}

/// Drives one record set in one hosted zone towards its desired state.
pub struct Reconciler<'a> {
    api: &'a dyn RecordSetApi,
    zone: HostedZoneId,
    record: RecordDescriptor,
}

impl<'a> Reconciler<'a> {
    pub fn new(api: &'a dyn RecordSetApi, zone: HostedZoneId, record: RecordDescriptor) -> Self {
        Self { api, zone, record }
    }

    pub async fn run(&self, intent: Intent) -> Result<Reconciliation> {
        let reconciliation = match intent {
            Intent::Create => self.create().await?,
            Intent::Delete => self.delete().await?,
        };
        report::log_reconciliation(&reconciliation);
        Ok(reconciliation)
    }

    /// CREATE, or UPSERT when overwriting is allowed.
    pub async fn create(&self) -> Result<Reconciliation> {
        let action = if self.record.overwrite {
            ChangeAction::Upsert
        } else {
            ChangeAction::Create
        };
        let outcome = self.change_record(action).await?;
        Ok(Reconciliation::Changed {
            name: self.record.name.clone(),
            action,
            outcome,
        })
    }

    /// DELETE if a record set with this name exists, otherwise nothing.
    pub async fn delete(&self) -> Result<Reconciliation> {
        if self.record.mock {
            self.seed_placeholder().await?;
        }

        if current_record_set(self.api, &self.zone, &self.record.name)
            .await?
            .is_none()
        {
            return Ok(Reconciliation::NothingToDelete {
                name: self.record.name.clone(),
                outcome: ChangeOutcome::NotAttempted,
            });
        }

        // The desired payload is sent, not the live one; Route 53 rejects the
        // delete if the two differ.
        let outcome = self.change_record(ChangeAction::Delete).await?;
        Ok(Reconciliation::Changed {
            name: self.record.name.clone(),
            action: ChangeAction::Delete,
            outcome,
        })
    }

    // Gives the mock client something to delete.
    async fn seed_placeholder(&self) -> Result<ChangeOutcome> {
        debug!("Seeding placeholder record set for {}", self.record.name);
        let batch = ChangeBatch::single(
            SEED_COMMENT,
            ChangeAction::Create,
            self.record.placeholder_record_set(),
        );
        self.submit(batch).await
    }

    pub async fn change_record(&self, action: ChangeAction) -> Result<ChangeOutcome> {
        self.submit_record_set(action, self.record.resource_record_set())
            .await
    }

    async fn submit_record_set(
        &self,
        action: ChangeAction,
        set: ResourceRecordSet,
    ) -> Result<ChangeOutcome> {
        let comment = format!("Route53 record sync: {}", self.record.name);
        self.submit(ChangeBatch::single(comment, action, set)).await
    }

    /// Service rejections are reported and returned; anything else is an error.
    async fn submit(&self, batch: ChangeBatch) -> Result<ChangeOutcome> {
        let action = batch.changes.first().map(|c| c.action);
        info!(
            "Submitting {} for {} in {}",
            action.map(|a| a.as_str()).unwrap_or("empty batch"),
            self.record.name,
            self.zone
        );
        match self
            .api
            .change_resource_record_sets(&self.zone, &batch)
            .await
        {
            Ok(response) => {
                report::change_submitted(&batch, &response);
                Ok(ChangeOutcome::Submitted(response))
            }
            Err(ApiError::Service(err)) => {
                report::change_rejected(&batch, &err);
                Ok(ChangeOutcome::Rejected(err))
            }
            Err(err) => Err(err.into()),
        }
    }
}
