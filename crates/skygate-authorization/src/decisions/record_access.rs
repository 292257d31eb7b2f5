//! Record-level visibility and capability decisions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skygate_core::{Capability, EffectivePermissions, ScheduleRecord};

/// Whether per-record dates participate in visibility decisions.
///
/// Applied uniformly to every record shape. The knob exists because the
/// choice belongs to the caller, not to individual record types drifting
/// apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordDatePolicy {
    /// A record carrying a date must fall inside at least one grant window.
    /// A record without a date has nothing to test and is governed by
    /// station rules alone.
    #[default]
    Enforce,
    /// Record dates never affect visibility.
    Ignore,
}

/// Knobs for the access decision engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessPolicy {
    /// Per-record date handling
    pub record_dates: RecordDatePolicy,
}

/// True iff the role set itself is temporally active on `reference_date`.
///
/// Gate this before any record-level filtering: an inactive role set denies
/// all access regardless of station.
pub fn is_role_set_active(effective: &EffectivePermissions, reference_date: NaiveDate) -> bool {
    effective.is_admin
        || effective
            .date_ranges
            .iter()
            .any(|window| window.contains(reference_date))
}

/// Decide whether `record` is visible under `effective`.
///
/// Admin sees everything, including dateless rows. Otherwise a record is
/// visible when either leg touches an allowed station (a station-scoped
/// operator cares about flights touching their station regardless of
/// direction); an empty station set means no grant data at all and denies
/// everything. Record dates participate per `policy`.
pub fn can_view<R: ScheduleRecord + ?Sized>(
    effective: &EffectivePermissions,
    record: &R,
    policy: &AccessPolicy,
) -> bool {
    if effective.is_admin {
        return true;
    }

    if effective.allowed_stations.is_empty() {
        return false;
    }

    let station_match = effective.allows_station(record.departure_station())
        || effective.allows_station(record.arrival_station());
    if !station_match {
        tracing::debug!(
            flight = record.flight_number(),
            departure = record.departure_station(),
            arrival = record.arrival_station(),
            "record denied, neither leg touches an allowed station"
        );
        return false;
    }

    match (policy.record_dates, record.record_date()) {
        (RecordDatePolicy::Ignore, _) | (RecordDatePolicy::Enforce, None) => true,
        (RecordDatePolicy::Enforce, Some(date)) => {
            let in_window = effective
                .date_ranges
                .iter()
                .any(|window| window.contains(date));
            if !in_window {
                tracing::debug!(
                    flight = record.flight_number(),
                    %date,
                    "record denied, date outside every grant window"
                );
            }
            in_window
        }
    }
}

/// Whether the role set may perform `capability`.
pub fn can_perform(effective: &EffectivePermissions, capability: Capability) -> bool {
    effective.is_admin || effective.has_capability(capability)
}
