//! Pure collaborator interfaces (no implementations).
//!
//! These traits are the only suspension points in the system. Cancellation
//! and timeouts belong to the implementations behind them, not to the
//! decision logic.

use async_trait::async_trait;

use crate::errors::SkygateResult;
use crate::grant::Grant;
use crate::snapshot::VersionSnapshot;

/// Read access to the role-management grant table.
#[async_trait]
pub trait GrantStore: Send + Sync {
    /// Fetch every grant row whose role is in `roles` (IN-style match).
    ///
    /// Connectivity failures surface as [`SkygateError::StoreUnavailable`]
    /// and are propagated unchanged by the resolver; an empty result set is
    /// not an error.
    ///
    /// [`SkygateError::StoreUnavailable`]: crate::errors::SkygateError::StoreUnavailable
    async fn query_by_roles(&self, roles: &[String]) -> SkygateResult<Vec<Grant>>;
}

/// Caller-refreshed listing of upstream revision snapshots.
///
/// The core treats the result as a value, not a live connection; see
/// [`crate::snapshot::SnapshotCache`] for the refresh discipline.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// List every known snapshot for the schedule data source.
    async fn list_snapshots(&self) -> SkygateResult<Vec<VersionSnapshot>>;
}
