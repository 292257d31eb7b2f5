//! Effective permissions resolved for a request-scoped role set.
//!
//! This is the strongly-typed replacement for the loosely-typed permission
//! maps the system previously passed around: every capability, station, and
//! date lookup is a field access.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::grant::{Capability, DateRange, Grant};

/// OR-union of the capability flags across all matching grants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    /// Any matching grant allows downloads
    pub download: bool,
    /// Any matching grant allows revision changes
    pub revise: bool,
    /// Any matching grant allows member nomination
    pub nominate: bool,
}

impl CapabilitySet {
    /// Whether the set contains `capability`.
    pub fn contains(&self, capability: Capability) -> bool {
        match capability {
            Capability::Download => self.download,
            Capability::Revise => self.revise,
            Capability::Nominate => self.nominate,
        }
    }

    /// Fold one grant row's flags into the set.
    pub fn absorb(&mut self, grant: &Grant) {
        self.download |= grant.download_allowed;
        self.revise |= grant.revision_change_allowed;
        self.nominate |= grant.nominate_members_allowed;
    }
}

/// Resolved, request-scoped summary of what a role set may see and do.
///
/// Built once by the permission resolver and consumed read-only everywhere
/// else; never shared or mutated across requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectivePermissions {
    /// The (normalized) roles the summary was resolved from
    pub roles: BTreeSet<String>,
    /// Union of station codes over matching grants.
    ///
    /// Empty means "no grant data found" and denies all visibility. That is
    /// distinct from the admin bypass, which ignores this set entirely.
    pub allowed_stations: HashSet<String>,
    /// All grant windows, duplicates retained (membership checks are
    /// existential, dedup buys nothing)
    pub date_ranges: Vec<DateRange>,
    /// OR-union of the capability flags
    pub capabilities: CapabilitySet,
    /// Exact `"admin"` membership in the original (pre-normalization) role
    /// list. Computed once here; bypasses station and date checks everywhere.
    pub is_admin: bool,
}

impl EffectivePermissions {
    /// The safe-default outcome when no grant rows match: guest role, no
    /// stations, no windows, no capabilities. Deny-broad, not an error.
    pub fn guest() -> Self {
        Self {
            roles: BTreeSet::from(["guest".to_string()]),
            ..Self::default()
        }
    }

    /// Whether `station` is in the allowed set.
    pub fn allows_station(&self, station: &str) -> bool {
        self.allowed_stations.contains(station)
    }

    /// Whether any matching grant conferred `capability`.
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn guest_permissions_deny_everything() {
        let guest = EffectivePermissions::guest();
        assert!(guest.roles.contains("guest"));
        assert!(guest.allowed_stations.is_empty());
        assert!(guest.date_ranges.is_empty());
        assert!(!guest.is_admin);
        assert!(!guest.has_capability(Capability::Download));
        assert!(!guest.has_capability(Capability::Revise));
        assert!(!guest.has_capability(Capability::Nominate));
    }

    #[test]
    fn capability_set_absorb_is_monotonic() {
        let window = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        );
        let download_only = Grant {
            role: "ops".into(),
            station: None,
            download_allowed: true,
            revision_change_allowed: false,
            nominate_members_allowed: false,
            window,
        };
        let nothing = Grant {
            download_allowed: false,
            ..download_only.clone()
        };

        let mut set = CapabilitySet::default();
        set.absorb(&download_only);
        assert!(set.contains(Capability::Download));

        // A later all-false row must not clear an earlier flag.
        set.absorb(&nothing);
        assert!(set.contains(Capability::Download));
        assert!(!set.contains(Capability::Revise));
    }
}
