// SPDX-License-Identifier: MIT

//! Dependency-ordered cleanup of stale test resources.
//!
//! The remote environment is shared and may be dirty from a prior crashed
//! run, so the reconciler runs before and after a suite. Deleting an asset
//! fails in the service while any locator still references it, which forces
//! the pass order: locators, then assets, then access policies, then content
//! keys (the latter two have no referential constraint).
//!
//! Every pass is best-effort: a failure on one resource is recorded on the
//! report and the pass moves to the next item. `reconcile` never fails and
//! never retries; running it twice against unchanged state deletes nothing
//! the second time.

use crate::client::ResourceClient;
use crate::error::ClientError;
use crate::model::{ResourceKind, TEST_ASSET_PREFIX, TEST_POLICY_PREFIX};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Name prefixes that mark a resource as harness-created
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanupFilter {
    /// Prefix marking test assets (also decides locator ownership, via the
    /// referenced asset's name)
    pub asset_prefix: String,
    /// Prefix marking test access policies
    pub policy_prefix: String,
}

impl Default for CleanupFilter {
    fn default() -> Self {
        Self {
            asset_prefix: TEST_ASSET_PREFIX.to_string(),
            policy_prefix: TEST_POLICY_PREFIX.to_string(),
        }
    }
}

/// One recorded cleanup failure
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassFailure {
    /// Id of the resource the failure relates to
    pub id: String,
    /// What the client reported
    pub error: ClientError,
}

/// Outcome of a single cleanup pass
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassReport {
    /// Resource kind this pass covered
    pub kind: ResourceKind,
    /// How many resources the listing returned
    pub listed: usize,
    /// How many deletions were attempted
    pub attempted: usize,
    /// How many deletions succeeded
    pub deleted: usize,
    /// Failures collected along the way, including a failed listing
    pub failures: Vec<PassFailure>,
}

impl PassReport {
    fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            listed: 0,
            attempted: 0,
            deleted: 0,
            failures: Vec::new(),
        }
    }

    fn record_failure(&mut self, id: &str, error: ClientError) {
        warn!(kind = %self.kind, id, %error, "cleanup failure, continuing");
        self.failures.push(PassFailure {
            id: id.to_string(),
            error,
        });
    }
}

/// Aggregate outcome of the four passes, in execution order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleanupReport {
    pub locators: PassReport,
    pub assets: PassReport,
    pub access_policies: PassReport,
    pub content_keys: PassReport,
}

impl CleanupReport {
    /// Total deletions that succeeded across all passes
    pub fn total_deleted(&self) -> usize {
        self.passes().iter().map(|p| p.deleted).sum()
    }

    /// Whether every pass completed without a single failure
    pub fn is_clean(&self) -> bool {
        self.passes().iter().all(|p| p.failures.is_empty())
    }

    /// The four pass reports in execution order
    pub fn passes(&self) -> [&PassReport; 4] {
        [
            &self.locators,
            &self.assets,
            &self.access_policies,
            &self.content_keys,
        ]
    }
}

/// Brings the remote environment back to a baseline free of test resources.
pub struct Reconciler<'a, C: ResourceClient> {
    client: &'a C,
    filter: CleanupFilter,
}

impl<'a, C: ResourceClient> Reconciler<'a, C> {
    /// Reconciler with the default test-name prefixes
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            filter: CleanupFilter::default(),
        }
    }

    /// Reconciler with custom prefixes
    pub fn with_filter(client: &'a C, filter: CleanupFilter) -> Self {
        Self { client, filter }
    }

    /// Delete stale test resources, locators first.
    ///
    /// Never fails; inspect the returned report for what happened.
    pub fn reconcile(&self) -> CleanupReport {
        let report = CleanupReport {
            locators: self.remove_test_locators(),
            assets: self.remove_test_assets(),
            access_policies: self.remove_test_access_policies(),
            content_keys: self.remove_all_content_keys(),
        };
        debug!(
            deleted = report.total_deleted(),
            clean = report.is_clean(),
            "cleanup reconciliation finished"
        );
        report
    }

    /// Pass 1: locators whose referenced asset carries the test prefix.
    ///
    /// A locator whose asset cannot be resolved (already gone, id rejected)
    /// is recorded as a failure and skipped.
    fn remove_test_locators(&self) -> PassReport {
        let mut report = PassReport::new(ResourceKind::Locator);
        let locators = match self.client.list_locators() {
            Ok(locators) => locators,
            Err(e) => {
                report.record_failure("", e);
                return report;
            }
        };
        report.listed = locators.len();

        for locator in locators {
            let asset = match self.client.get_asset(&locator.asset_id) {
                Ok(asset) => asset,
                Err(e) => {
                    report.record_failure(&locator.id, e);
                    continue;
                }
            };
            if asset.name.starts_with(&self.filter.asset_prefix) {
                report.attempted += 1;
                match self.client.delete_locator(&locator.id) {
                    Ok(()) => report.deleted += 1,
                    Err(e) => report.record_failure(&locator.id, e),
                }
            }
        }
        report
    }

    /// Pass 2: assets named with the test prefix
    fn remove_test_assets(&self) -> PassReport {
        let mut report = PassReport::new(ResourceKind::Asset);
        let assets = match self.client.list_assets() {
            Ok(assets) => assets,
            Err(e) => {
                report.record_failure("", e);
                return report;
            }
        };
        report.listed = assets.len();

        for asset in assets {
            if asset.name.starts_with(&self.filter.asset_prefix) {
                report.attempted += 1;
                match self.client.delete_asset(&asset.id) {
                    Ok(()) => report.deleted += 1,
                    Err(e) => report.record_failure(&asset.id, e),
                }
            }
        }
        report
    }

    /// Pass 3: access policies named with the test prefix
    fn remove_test_access_policies(&self) -> PassReport {
        let mut report = PassReport::new(ResourceKind::AccessPolicy);
        let policies = match self.client.list_access_policies() {
            Ok(policies) => policies,
            Err(e) => {
                report.record_failure("", e);
                return report;
            }
        };
        report.listed = policies.len();

        for policy in policies {
            if policy.name.starts_with(&self.filter.policy_prefix) {
                report.attempted += 1;
                match self.client.delete_access_policy(&policy.id) {
                    Ok(()) => report.deleted += 1,
                    Err(e) => report.record_failure(&policy.id, e),
                }
            }
        }
        report
    }

    /// Pass 4: every content key, no prefix filter.
    ///
    /// Content keys are entirely test-scoped in the environments this
    /// harness runs against.
    fn remove_all_content_keys(&self) -> PassReport {
        let mut report = PassReport::new(ResourceKind::ContentKey);
        let keys = match self.client.list_content_keys() {
            Ok(keys) => keys,
            Err(e) => {
                report.record_failure("", e);
                return report;
            }
        };
        report.listed = keys.len();

        for key in keys {
            report.attempted += 1;
            match self.client.delete_content_key(&key.id) {
                Ok(()) => report.deleted += 1,
                Err(e) => report.record_failure(&key.id, e),
            }
        }
        report
    }
}

#[cfg(test)]
#[path = "cleanup_tests.rs"]
mod tests;
