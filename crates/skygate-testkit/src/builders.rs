//! Fixture builders for grants, records, and snapshots.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use skygate_core::{DateRange, FlightRecord, Grant, VersionSnapshot};

/// Shorthand for a calendar date in test fixtures.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Start a grant for `role`, valid through 2025 with no station and no
/// capabilities until the builder says otherwise.
pub fn grant(role: &str) -> GrantBuilder {
    GrantBuilder {
        grant: Grant {
            role: role.to_string(),
            station: None,
            download_allowed: false,
            revision_change_allowed: false,
            nominate_members_allowed: false,
            window: DateRange::new(date(2025, 1, 1), date(2025, 12, 31)),
        },
    }
}

/// Builder for [`Grant`] fixtures.
#[derive(Debug, Clone)]
pub struct GrantBuilder {
    grant: Grant,
}

impl GrantBuilder {
    /// Scope the grant to a station.
    pub fn station(mut self, code: &str) -> Self {
        self.grant.station = Some(code.to_string());
        self
    }

    /// Confer the download capability.
    pub fn download(mut self) -> Self {
        self.grant.download_allowed = true;
        self
    }

    /// Confer the revision-change capability.
    pub fn revise(mut self) -> Self {
        self.grant.revision_change_allowed = true;
        self
    }

    /// Confer the member-nomination capability.
    pub fn nominate(mut self) -> Self {
        self.grant.nominate_members_allowed = true;
        self
    }

    /// Override the validity window.
    pub fn window(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.grant.window = DateRange::new(start, end);
        self
    }

    /// Finish the fixture.
    pub fn build(self) -> Grant {
        self.grant
    }
}

/// A minimal schedule record between two stations.
pub fn record(flight_number: &str, departure: &str, arrival: &str) -> FlightRecord {
    FlightRecord {
        flight_number: flight_number.to_string(),
        departure_station: departure.to_string(),
        arrival_station: arrival.to_string(),
        ..FlightRecord::default()
    }
}

/// Start a snapshot named `revised_file_name`, created at midnight UTC on the
/// given day, not flagged latest.
pub fn snapshot(revised_file_name: &str, y: i32, m: u32, d: u32) -> SnapshotBuilder {
    SnapshotBuilder {
        snapshot: VersionSnapshot {
            base_file: format!("{revised_file_name}.base"),
            created_at: Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap(),
            revised_file_name: revised_file_name.to_string(),
            is_latest: false,
        },
    }
}

/// Builder for [`VersionSnapshot`] fixtures.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    snapshot: VersionSnapshot,
}

impl SnapshotBuilder {
    /// Flag this snapshot as the provider's latest.
    pub fn latest(mut self) -> Self {
        self.snapshot.is_latest = true;
        self
    }

    /// Override the base file name.
    pub fn base_file(mut self, name: &str) -> Self {
        self.snapshot.base_file = name.to_string();
        self
    }

    /// Override the creation instant.
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.snapshot.created_at = at;
        self
    }

    /// Finish the fixture.
    pub fn build(self) -> VersionSnapshot {
        self.snapshot
    }
}
