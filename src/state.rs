use tracing::{debug, warn};

use crate::core::provider::{HostedZoneId, RecordSetApi};
use crate::core::record::ResourceRecordSet;
use crate::error::Result;

/// Looks up the live record set named `name` in `zone`.
///
/// Only the first page of the listing is searched, and only the name is
/// compared: the first set with an exactly equal name wins regardless of its
/// type. `name` must already be canonical (dot-terminated).
pub async fn current_record_set(
    api: &dyn RecordSetApi,
    zone: &HostedZoneId,
    name: &str,
) -> Result<Option<ResourceRecordSet>> {
    let page = api.list_resource_record_sets(zone).await?;
    if page.is_truncated {
        warn!(
            "Record set listing for {} is truncated; {} may exist beyond the first page",
            zone, name
        );
    }

    let current = page
        .record_sets
        .iter()
        .find(|set| set.name == name)
        .map(ResourceRecordSet::normalized);
    debug!("Current record set for {}: {:?}", name, current);
    Ok(current)
}
