//! Skygate Authorization - the access-control decision engine
//!
//! Given a verified role list and the grant table behind
//! [`GrantStore`](skygate_core::GrantStore), this crate decides what a
//! principal may see and do:
//!
//! - **Permission Resolver** (`resolver`): role names →
//!   [`EffectivePermissions`](skygate_core::EffectivePermissions), with guest
//!   fallback and the single admin-membership check.
//! - **Access Decision Engine** (`decisions`): temporal role-set activity,
//!   per-record visibility, capability checks. Booleans, never errors.
//! - **Revision Resolver** (`revision`): which schedule revision was
//!   authoritative as of a date.
//! - **Record Filter** (`filter`): order-preserving filtering of candidate
//!   record sequences.
//!
//! The resolver's store read is the only suspension point; everything else
//! is a pure computation over already-fetched inputs, so concurrent requests
//! need no locking discipline.

#![forbid(unsafe_code)]

/// Access decision logic
pub mod decisions;

/// Error handling (unified with `skygate-core`)
pub mod errors;

/// Order-preserving record filtering
pub mod filter;

/// Role-set to effective-permissions resolution
pub mod resolver;

/// As-of snapshot resolution
pub mod revision;

pub use decisions::{can_perform, can_view, is_role_set_active, AccessPolicy, RecordDatePolicy};
pub use errors::{Result, SkygateError, SkygateResult};
pub use filter::filter_visible;
pub use resolver::{normalize_role, PermissionResolver};
pub use revision::resolve_snapshot_for;
