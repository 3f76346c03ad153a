// SPDX-License-Identifier: MIT

//! Reconciliation and verification harness for media service integration
//! tests.
//!
//! Integration suites against a shared, mutable remote environment need two
//! things this crate provides:
//!
//! - [`cleanup::Reconciler`] — best-effort, dependency-ordered deletion of
//!   stale test resources before and after a run (locators strictly before
//!   the assets they reference);
//! - [`verify::verify_list_contains`] — order-insensitive verification that
//!   an expected collection is a subset of a live listing, matching by
//!   identity and delegating per-field comparison, with a skew-tolerant
//!   timestamp comparator in [`time`].
//!
//! The remote CRUD service itself is an external collaborator consumed
//! through the [`client::ResourceClient`] trait; [`fake::FakeClient`] is an
//! in-memory stand-in for tests.

pub mod cleanup;
pub mod client;
pub mod config;
pub mod error;
pub mod fake;
pub mod model;
pub mod time;
pub mod verify;

pub use cleanup::{CleanupFilter, CleanupReport, Reconciler};
pub use client::ResourceClient;
pub use error::{AssertionFailure, ClientError};
pub use model::{AccessPolicyInfo, AssetInfo, ContentKeyInfo, HasId, LocatorInfo, ResourceKind};
pub use time::TimeTolerance;
pub use verify::{verify_list_contains, verify_list_contains_msg};
