//! Order-preserving visibility filtering over record sequences.

use skygate_core::{EffectivePermissions, ScheduleRecord};

use crate::decisions::{can_view, AccessPolicy};

/// Keep the records visible under `effective`, preserving input order.
///
/// Pure function; station membership is an O(1) hash-set probe per leg, so
/// the whole pass is O(n) for station-only policies.
pub fn filter_visible<R: ScheduleRecord>(
    effective: &EffectivePermissions,
    records: Vec<R>,
    policy: &AccessPolicy,
) -> Vec<R> {
    records
        .into_iter()
        .filter(|record| can_view(effective, record, policy))
        .collect()
}
