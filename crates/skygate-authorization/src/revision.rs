//! As-of resolution of schedule revision snapshots.
//!
//! Schedule data is revised over time; a record's authoritative source file
//! depends on when it was queried relative to revision history, not on the
//! current moment.

use chrono::NaiveDate;
use skygate_core::{VersionSnapshot, UNRESOLVED_REVISION};

/// Pick the revision label that was authoritative on `date`.
///
/// The most recent snapshot not newer than the target date wins. Without a
/// usable date, or when every snapshot postdates it, fall back to the
/// provider's `is_latest` entry; without that, return
/// [`UNRESOLVED_REVISION`]. The result is independent of input order (the
/// list is ordered internally).
pub fn resolve_snapshot_for(date: Option<NaiveDate>, snapshots: &[VersionSnapshot]) -> String {
    let Some(target) = date else {
        return latest_revision(snapshots);
    };

    let mut ordered: Vec<&VersionSnapshot> = snapshots.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    ordered
        .into_iter()
        .find(|snapshot| snapshot.created_at.date_naive() <= target)
        .map(|snapshot| snapshot.revised_file_name.clone())
        .unwrap_or_else(|| latest_revision(snapshots))
}

fn latest_revision(snapshots: &[VersionSnapshot]) -> String {
    match snapshots.iter().find(|snapshot| snapshot.is_latest) {
        Some(snapshot) => snapshot.revised_file_name.clone(),
        None => {
            tracing::debug!("no latest-flagged snapshot available, returning sentinel");
            UNRESOLVED_REVISION.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn snap(name: &str, y: i32, m: u32, d: u32, latest: bool) -> VersionSnapshot {
        VersionSnapshot {
            base_file: format!("{name}.base"),
            created_at: Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap(),
            revised_file_name: name.to_string(),
            is_latest: latest,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn picks_most_recent_snapshot_not_newer_than_target() {
        let snapshots = vec![snap("A", 2025, 1, 10, false), snap("B", 2025, 3, 10, true)];

        assert_eq!(
            resolve_snapshot_for(Some(date(2025, 2, 1)), &snapshots),
            "A"
        );
        assert_eq!(
            resolve_snapshot_for(Some(date(2025, 4, 1)), &snapshots),
            "B"
        );
    }

    #[test]
    fn target_before_every_snapshot_falls_back_to_latest() {
        let snapshots = vec![snap("A", 2025, 1, 10, false), snap("B", 2025, 3, 10, true)];
        assert_eq!(
            resolve_snapshot_for(Some(date(2024, 12, 1)), &snapshots),
            "B"
        );
    }

    #[test]
    fn missing_date_uses_latest_flag() {
        let snapshots = vec![snap("A", 2025, 1, 10, false), snap("B", 2025, 3, 10, true)];
        assert_eq!(resolve_snapshot_for(None, &snapshots), "B");
    }

    #[test]
    fn sentinel_when_nothing_resolves() {
        assert_eq!(resolve_snapshot_for(None, &[]), UNRESOLVED_REVISION);

        // No latest flag anywhere and the target predates the list.
        let unflagged = vec![snap("A", 2025, 1, 10, false)];
        assert_eq!(
            resolve_snapshot_for(Some(date(2024, 1, 1)), &unflagged),
            UNRESOLVED_REVISION
        );
    }

    #[test]
    fn creation_day_itself_counts_as_authoritative() {
        let snapshots = vec![snap("A", 2025, 1, 10, false)];
        assert_eq!(
            resolve_snapshot_for(Some(date(2025, 1, 10)), &snapshots),
            "A"
        );
    }
}
