//! Permission resolution: role names to request-scoped effective permissions.

use skygate_core::{EffectivePermissions, GrantStore, SkygateResult};

/// Normalize a role name for grant-table lookup.
///
/// The identity provider issues hyphenated role names while the grant table
/// stores underscores; this function is the single ingestion point where the
/// two conventions are reconciled. No case folding: the table already stores
/// lowercase names, and folding would silently merge distinct roles.
pub fn normalize_role(role: &str) -> String {
    role.trim().replace('-', "_")
}

/// Resolves verified role lists into [`EffectivePermissions`].
///
/// The single store read in `resolve` is the only suspension point of the
/// whole decision engine; everything downstream is a pure computation over
/// the returned summary.
pub struct PermissionResolver<S> {
    store: S,
}

impl<S: GrantStore> PermissionResolver<S> {
    /// Create a resolver backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Resolve `roles` into an effective-permissions summary.
    ///
    /// An empty role list is treated as `["guest"]`, and a role set with no
    /// matching grant rows resolves to guest permissions. Both are safe
    /// deny-broad outcomes, not errors; only store failures propagate.
    ///
    /// The admin flag is computed from the *original* role list, before
    /// normalization, and is the one place admin membership is checked.
    pub async fn resolve(&self, roles: &[String]) -> SkygateResult<EffectivePermissions> {
        let is_admin = roles.iter().any(|role| role == "admin");

        let normalized: Vec<String> = if roles.is_empty() {
            tracing::debug!("empty role list, looking up as guest");
            vec!["guest".to_string()]
        } else {
            roles.iter().map(|role| normalize_role(role)).collect()
        };

        let grants = self.store.query_by_roles(&normalized).await?;

        if grants.is_empty() {
            tracing::warn!(
                roles = ?normalized,
                "no grants matched role set, falling back to guest permissions"
            );
            return Ok(EffectivePermissions::guest());
        }

        let mut effective = EffectivePermissions {
            roles: normalized.into_iter().collect(),
            is_admin,
            ..EffectivePermissions::default()
        };

        for grant in &grants {
            if let Some(station) = &grant.station {
                effective.allowed_stations.insert(station.clone());
            }
            effective.date_ranges.push(grant.window);
            effective.capabilities.absorb(grant);
        }

        tracing::debug!(
            roles = ?effective.roles,
            stations = effective.allowed_stations.len(),
            windows = effective.date_ranges.len(),
            is_admin = effective.is_admin,
            "resolved effective permissions"
        );

        Ok(effective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_role_fixes_hyphens_and_whitespace() {
        assert_eq!(normalize_role("ccu-ops"), "ccu_ops");
        assert_eq!(normalize_role(" nps-admin "), "nps_admin");
        assert_eq!(normalize_role("guest"), "guest");
    }

    #[test]
    fn normalize_role_leaves_case_alone() {
        assert_eq!(normalize_role("CCU-Ops"), "CCU_Ops");
    }
}
