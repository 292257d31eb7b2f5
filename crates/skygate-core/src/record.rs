//! Candidate schedule records tested for visibility.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{SkygateError, SkygateResult};

/// Seam between the decision engine and whatever DTO the calling layer
/// carries. The engine only ever reads the two station legs and the optional
/// record date; the flight number is used for diagnostics.
pub trait ScheduleRecord {
    /// Origin station code
    fn departure_station(&self) -> &str;
    /// Destination station code
    fn arrival_station(&self) -> &str;
    /// The record's own calendar date, if it carries one
    fn record_date(&self) -> Option<NaiveDate>;
    /// Flight number, diagnostics only
    fn flight_number(&self) -> &str;
}

/// Concrete record carrier matching the upstream schedule API response.
///
/// Everything beyond the four `ScheduleRecord` fields is opaque pass-through
/// display data returned to the caller untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightRecord {
    /// Flight number
    pub flight_number: String,
    /// Origin station code
    pub departure_station: String,
    /// Destination station code
    pub arrival_station: String,
    /// Schedule date of this leg
    pub date: Option<NaiveDate>,
    /// Revision label attached by the calling layer after as-of resolution
    pub revised_file_name: Option<String>,
    /// Scheduled time of departure
    pub std: Option<String>,
    /// Scheduled time of arrival
    pub sta: Option<String>,
    /// Departure terminal
    pub departure_terminal: Option<String>,
    /// Arrival terminal
    pub arrival_terminal: Option<String>,
    /// Aircraft equipment code
    pub aircraft_equipment: Option<String>,
    /// Aircraft cabin configuration
    pub aircraft_configuration: Option<String>,
    /// Code-share duplicate leg marker
    pub code_share_duplicate_leg: Option<String>,
}

impl ScheduleRecord for FlightRecord {
    fn departure_station(&self) -> &str {
        &self.departure_station
    }

    fn arrival_station(&self) -> &str {
        &self.arrival_station
    }

    fn record_date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn flight_number(&self) -> &str {
        &self.flight_number
    }
}

/// Parse an upstream `YYYY-MM-DD` date string.
pub fn parse_schedule_date(value: &str) -> SkygateResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| SkygateError::invalid_date(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_record_uses_upstream_field_names() {
        let json = r#"{
            "flightNumber": "QP1402",
            "departureStation": "CCU",
            "arrivalStation": "BLR",
            "date": "2025-07-15",
            "std": "08:10",
            "departureTerminal": "T2"
        }"#;
        let record: FlightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.flight_number(), "QP1402");
        assert_eq!(record.departure_station(), "CCU");
        assert_eq!(record.arrival_station(), "BLR");
        assert_eq!(
            record.record_date(),
            Some(NaiveDate::from_ymd_opt(2025, 7, 15).unwrap())
        );
        assert_eq!(record.sta, None);
    }

    #[test]
    fn parse_schedule_date_accepts_iso_and_trims() {
        let parsed = parse_schedule_date(" 2025-07-15 ").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2025, 7, 15).unwrap());
    }

    #[test]
    fn parse_schedule_date_rejects_garbage() {
        let err = parse_schedule_date("15/07/2025").unwrap_err();
        assert_eq!(err, SkygateError::invalid_date("15/07/2025"));
    }
}
