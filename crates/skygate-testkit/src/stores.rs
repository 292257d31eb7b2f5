//! In-memory implementations of the collaborator traits.

use async_trait::async_trait;
use skygate_core::{
    Grant, GrantStore, SkygateError, SkygateResult, SnapshotProvider, VersionSnapshot,
};

/// Grant store backed by a plain vector, matching roles by equality.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGrantStore {
    grants: Vec<Grant>,
}

impl InMemoryGrantStore {
    /// Create a store holding `grants`.
    pub fn new(grants: Vec<Grant>) -> Self {
        Self { grants }
    }
}

#[async_trait]
impl GrantStore for InMemoryGrantStore {
    async fn query_by_roles(&self, roles: &[String]) -> SkygateResult<Vec<Grant>> {
        Ok(self
            .grants
            .iter()
            .filter(|grant| roles.contains(&grant.role))
            .cloned()
            .collect())
    }
}

/// Grant store that always fails, for outage-propagation tests.
#[derive(Debug, Clone, Default)]
pub struct FailingGrantStore;

#[async_trait]
impl GrantStore for FailingGrantStore {
    async fn query_by_roles(&self, _roles: &[String]) -> SkygateResult<Vec<Grant>> {
        Err(SkygateError::store_unavailable("grant store offline"))
    }
}

/// Snapshot provider returning a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshotProvider {
    snapshots: Vec<VersionSnapshot>,
}

impl StaticSnapshotProvider {
    /// Create a provider serving `snapshots`.
    pub fn new(snapshots: Vec<VersionSnapshot>) -> Self {
        Self { snapshots }
    }
}

#[async_trait]
impl SnapshotProvider for StaticSnapshotProvider {
    async fn list_snapshots(&self) -> SkygateResult<Vec<VersionSnapshot>> {
        Ok(self.snapshots.clone())
    }
}
