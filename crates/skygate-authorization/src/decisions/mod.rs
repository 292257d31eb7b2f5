//! Access decision logic
//!
//! Pure boolean decisions over an already-resolved
//! [`EffectivePermissions`](skygate_core::EffectivePermissions) summary.
//! Denial is an outcome here, never an error.

pub mod record_access;

pub use record_access::{
    can_perform, can_view, is_role_set_active, AccessPolicy, RecordDatePolicy,
};
