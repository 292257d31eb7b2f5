//! Grant rows read from the role-management table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar-date window attached to a grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day the grant is valid
    pub start: NaiveDate,
    /// Last day the grant is valid
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new date window.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// True iff `date` falls inside the window, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Capabilities a grant row can confer on a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// May download schedule data
    Download,
    /// May submit revision changes
    Revise,
    /// May nominate members
    Nominate,
}

/// One role/station/date-window row from the permissions store.
///
/// Rows are immutable snapshots read once per request. The CRUD layer that
/// writes them enforces `window.start < window.end`; the core does not
/// re-validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    /// Role name as stored (underscore convention, e.g. `ccu_ops`)
    pub role: String,
    /// IATA-style station code. `None` contributes capability flags but
    /// never contributes to the allowed-station set.
    pub station: Option<String>,
    /// Whether this row confers the download capability
    pub download_allowed: bool,
    /// Whether this row confers the revision-change capability
    pub revision_change_allowed: bool,
    /// Whether this row confers the member-nomination capability
    pub nominate_members_allowed: bool,
    /// Validity window for this grant
    pub window: DateRange,
}

impl Grant {
    /// Whether this single row confers `capability`.
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::Download => self.download_allowed,
            Capability::Revise => self.revision_change_allowed,
            Capability::Nominate => self.nominate_members_allowed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 12, 31));
        assert!(range.contains(date(2025, 1, 1)));
        assert!(range.contains(date(2025, 12, 31)));
        assert!(range.contains(date(2025, 6, 15)));
        assert!(!range.contains(date(2024, 12, 31)));
        assert!(!range.contains(date(2026, 1, 1)));
    }

    #[test]
    fn grant_allows_maps_each_flag() {
        let grant = Grant {
            role: "ccu_ops".into(),
            station: Some("CCU".into()),
            download_allowed: true,
            revision_change_allowed: false,
            nominate_members_allowed: true,
            window: DateRange::new(date(2025, 1, 1), date(2025, 12, 31)),
        };
        assert!(grant.allows(Capability::Download));
        assert!(!grant.allows(Capability::Revise));
        assert!(grant.allows(Capability::Nominate));
    }
}
