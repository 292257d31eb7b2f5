//! Skygate Testing Infrastructure
//!
//! Common fixtures for the Skygate test suites: in-memory implementations of
//! the collaborator traits and builders for grants, records, and snapshots.
//!
//! Add this to your crate's `Cargo.toml` dev-dependencies:
//! ```toml
//! [dev-dependencies]
//! skygate-testkit = { path = "../skygate-testkit" }
//! ```

#![forbid(unsafe_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

pub mod builders;
pub mod stores;

pub use builders::{date, grant, record, snapshot, GrantBuilder, SnapshotBuilder};
pub use stores::{FailingGrantStore, InMemoryGrantStore, StaticSnapshotProvider};
