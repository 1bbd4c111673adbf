use serde::Serialize;
use std::fmt;

use crate::core::provider::ServiceError;
use crate::core::record::ResourceRecordSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    Create,
    Upsert,
    Delete,
}

impl ChangeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeAction::Create => "CREATE",
            ChangeAction::Upsert => "UPSERT",
            ChangeAction::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    pub action: ChangeAction,
    pub resource_record_set: ResourceRecordSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeBatch {
    pub comment: String,
    pub changes: Vec<Change>,
}

impl ChangeBatch {
    /// A batch carrying exactly one change.
    pub fn single(
        comment: impl Into<String>,
        action: ChangeAction,
        resource_record_set: ResourceRecordSet,
    ) -> Self {
        Self {
            comment: comment.into(),
            changes: vec![Change {
                action,
                resource_record_set,
            }],
        }
    }
}

/// What the API returned for an accepted change batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeResponse {
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    Submitted(ChangeResponse),
    Rejected(ServiceError),
    NotAttempted,
}

impl ChangeOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, ChangeOutcome::Rejected(_))
    }
}
