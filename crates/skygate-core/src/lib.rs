//! Skygate Core - domain types and collaborator interfaces
//!
//! This crate provides the foundational types for the Skygate access-control
//! core: grant rows, resolved effective permissions, candidate schedule
//! records, revision snapshots, and the async store traits behind which the
//! external collaborators (grant table, snapshot listing) live.
//!
//! It contains no decision logic; that lives in `skygate-authorization`.

#![forbid(unsafe_code)]

/// Unified error handling
pub mod errors;

/// Grant rows and date windows
pub mod grant;

/// Request-scoped effective permissions
pub mod permissions;

/// Candidate schedule records
pub mod record;

/// Revision snapshots and the caller-owned cache value
pub mod snapshot;

/// Collaborator interfaces (pure signatures)
pub mod stores;

pub use errors::{SkygateError, SkygateResult};
pub use grant::{Capability, DateRange, Grant};
pub use permissions::{CapabilitySet, EffectivePermissions};
pub use record::{parse_schedule_date, FlightRecord, ScheduleRecord};
pub use snapshot::{SnapshotCache, VersionSnapshot, UNRESOLVED_REVISION};
pub use stores::{GrantStore, SnapshotProvider};
