//! Error handling using the unified core error system.

pub use skygate_core::{SkygateError, SkygateResult};

/// Result type alias for authorization operations
pub type Result<T> = SkygateResult<T>;
