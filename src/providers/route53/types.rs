use aws_sdk_route53::error::BuildError;
use aws_sdk_route53::types as r53;
use tracing::debug;

use crate::core::change::{ChangeAction, ChangeBatch};
use crate::core::record::{DNSRecordType, ResourceRecord, ResourceRecordSet};

pub fn to_route53_action(action: ChangeAction) -> r53::ChangeAction {
    match action {
        ChangeAction::Create => r53::ChangeAction::Create,
        ChangeAction::Upsert => r53::ChangeAction::Upsert,
        ChangeAction::Delete => r53::ChangeAction::Delete,
    }
}

pub fn to_route53_record_set(
    set: &ResourceRecordSet,
) -> Result<r53::ResourceRecordSet, BuildError> {
    let records = set
        .resource_records
        .iter()
        .map(|r| r53::ResourceRecord::builder().value(r.value.as_str()).build())
        .collect::<Result<Vec<_>, _>>()?;

    r53::ResourceRecordSet::builder()
        .name(set.name.as_str())
        .r#type(r53::RrType::from(set.record_type.as_str()))
        .set_ttl(set.ttl.map(i64::from))
        .set_resource_records(Some(records))
        .build()
}

pub fn to_route53_change_batch(batch: &ChangeBatch) -> Result<r53::ChangeBatch, BuildError> {
    let changes = batch
        .changes
        .iter()
        .map(|change| {
            r53::Change::builder()
                .action(to_route53_action(change.action))
                .resource_record_set(to_route53_record_set(&change.resource_record_set)?)
                .build()
        })
        .collect::<Result<Vec<_>, _>>()?;

    r53::ChangeBatch::builder()
        .comment(batch.comment.as_str())
        .set_changes(Some(changes))
        .build()
}

pub fn to_record_set(set: &r53::ResourceRecordSet) -> ResourceRecordSet {
    ResourceRecordSet {
        name: set.name().to_string(),
        record_type: DNSRecordType::from(set.r#type().as_str()),
        ttl: set.ttl().and_then(|ttl| {
            let converted = u32::try_from(ttl).ok();
            if converted.is_none() {
                debug!("Dropping out-of-range TTL {} on {}", ttl, set.name());
            }
            converted
        }),
        resource_records: set
            .resource_records()
            .iter()
            .map(|r| ResourceRecord {
                value: r.value().to_string(),
            })
            .collect(),
    }
}
