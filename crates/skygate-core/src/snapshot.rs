//! Dated revision snapshots of the upstream schedule data source.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel revision label returned when no snapshot applies and none is
/// flagged latest.
pub const UNRESOLVED_REVISION: &str = "unresolved";

/// One dated, named revision of the upstream schedule data source.
///
/// The set of snapshots for a source is append-only and keyed by
/// `created_at`. Keeping exactly one `is_latest == true` entry is the
/// provider's responsibility; the core only treats the flagged entry as the
/// fallback when no date-appropriate snapshot exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSnapshot {
    /// Name of the base schedule file this revision derives from
    pub base_file: String,
    /// When the revision was produced
    pub created_at: DateTime<Utc>,
    /// Name of the revised schedule file
    pub revised_file_name: String,
    /// Provider-maintained latest flag
    pub is_latest: bool,
}

/// Snapshot list plus the instant it was fetched.
///
/// The calling layer owns refresh: replace the whole value (atomic swap of
/// the reference) so in-flight resolutions never observe a partially updated
/// list. The revision resolver itself only ever receives the inner slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotCache {
    /// The snapshot list as returned by the provider
    pub snapshots: Vec<VersionSnapshot>,
    /// When the list was fetched
    pub fetched_at: DateTime<Utc>,
}

impl SnapshotCache {
    /// Wrap a freshly fetched snapshot list.
    pub fn new(snapshots: Vec<VersionSnapshot>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            snapshots,
            fetched_at,
        }
    }

    /// Whether the cache is due for a refresh at `now` under a fixed `ttl`.
    pub fn is_stale(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.fetched_at >= ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn cache_staleness_uses_fetch_instant() {
        let fetched = Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap();
        let cache = SnapshotCache::new(vec![], fetched);
        let ttl = Duration::minutes(5);

        assert!(!cache.is_stale(ttl, fetched + Duration::minutes(4)));
        assert!(cache.is_stale(ttl, fetched + Duration::minutes(5)));
        assert!(cache.is_stale(ttl, fetched + Duration::hours(1)));
    }
}
