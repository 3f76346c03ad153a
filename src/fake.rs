// SPDX-License-Identifier: MIT

//! In-memory test double for the resource client.
//!
//! Backs the crate's own tests and is exported for downstream suites that
//! want to exercise cleanup/verification logic without a live service. The
//! fake enforces the same contract as the real service: opaque `nb:` ids,
//! not-found and validation errors, and the locator-blocks-asset-delete
//! constraint. Every call is journaled in order so tests can assert what
//! happened and when.

use crate::client::ResourceClient;
use crate::error::ClientError;
use crate::model::{AccessPolicyInfo, AssetInfo, ContentKeyInfo, LocatorInfo, ResourceKind};
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashMap;
use uuid::Uuid;

/// One recorded client call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    List(ResourceKind),
    Get(ResourceKind, String),
    Delete(ResourceKind, String),
}

#[derive(Default)]
struct State {
    assets: Vec<AssetInfo>,
    access_policies: Vec<AccessPolicyInfo>,
    locators: Vec<LocatorInfo>,
    content_keys: Vec<ContentKeyInfo>,
    journal: Vec<Operation>,
    list_failures: HashMap<ResourceKind, ClientError>,
    delete_failures: HashMap<String, ClientError>,
}

/// In-memory [`ResourceClient`] with seeding, failure injection, and an
/// operation journal.
#[derive(Default)]
pub struct FakeClient {
    state: Mutex<State>,
}

impl FakeClient {
    /// Empty fake client
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an asset; returns the stored snapshot with a generated id
    pub fn add_asset(&self, name: &str) -> AssetInfo {
        let now = Some(Utc::now());
        let asset = AssetInfo {
            id: new_id("cid"),
            name: name.to_string(),
            created: now,
            last_modified: now,
        };
        self.state.lock().assets.push(asset.clone());
        asset
    }

    /// Seed an access policy
    pub fn add_access_policy(&self, name: &str) -> AccessPolicyInfo {
        let now = Some(Utc::now());
        let policy = AccessPolicyInfo {
            id: new_id("pid"),
            name: name.to_string(),
            created: now,
            last_modified: now,
        };
        self.state.lock().access_policies.push(policy.clone());
        policy
    }

    /// Seed a locator referencing `asset_id`.
    ///
    /// The reference is taken as-is; seeding a dangling locator is allowed
    /// (that is exactly the state a crashed run leaves behind).
    pub fn add_locator(&self, asset_id: &str) -> LocatorInfo {
        let now = Some(Utc::now());
        let locator = LocatorInfo {
            id: new_id("lid"),
            asset_id: asset_id.to_string(),
            created: now,
            last_modified: now,
        };
        self.state.lock().locators.push(locator.clone());
        locator
    }

    /// Seed a content key
    pub fn add_content_key(&self, name: &str) -> ContentKeyInfo {
        let now = Some(Utc::now());
        let key = ContentKeyInfo {
            id: new_id("cid"),
            name: name.to_string(),
            created: now,
            last_modified: now,
        };
        self.state.lock().content_keys.push(key.clone());
        key
    }

    /// Make every `list` of `kind` fail with `error` until cleared
    pub fn fail_list(&self, kind: ResourceKind, error: ClientError) {
        self.state.lock().list_failures.insert(kind, error);
    }

    /// Make every delete of `id` fail with `error` until cleared
    pub fn fail_delete(&self, id: &str, error: ClientError) {
        self.state
            .lock()
            .delete_failures
            .insert(id.to_string(), error);
    }

    /// All recorded calls, in order
    pub fn journal(&self) -> Vec<Operation> {
        self.state.lock().journal.clone()
    }

    /// Recorded deletes only, in order
    pub fn deletes(&self) -> Vec<Operation> {
        self.state
            .lock()
            .journal
            .iter()
            .filter(|op| matches!(op, Operation::Delete(..)))
            .cloned()
            .collect()
    }

    /// Remaining resource count across all four kinds
    pub fn remaining(&self) -> usize {
        let state = self.state.lock();
        state.assets.len()
            + state.access_policies.len()
            + state.locators.len()
            + state.content_keys.len()
    }
}

impl ResourceClient for FakeClient {
    fn list_assets(&self) -> Result<Vec<AssetInfo>, ClientError> {
        let mut state = self.state.lock();
        state.journal.push(Operation::List(ResourceKind::Asset));
        if let Some(e) = state.list_failures.get(&ResourceKind::Asset) {
            return Err(e.clone());
        }
        Ok(state.assets.clone())
    }

    fn list_access_policies(&self) -> Result<Vec<AccessPolicyInfo>, ClientError> {
        let mut state = self.state.lock();
        state
            .journal
            .push(Operation::List(ResourceKind::AccessPolicy));
        if let Some(e) = state.list_failures.get(&ResourceKind::AccessPolicy) {
            return Err(e.clone());
        }
        Ok(state.access_policies.clone())
    }

    fn list_locators(&self) -> Result<Vec<LocatorInfo>, ClientError> {
        let mut state = self.state.lock();
        state.journal.push(Operation::List(ResourceKind::Locator));
        if let Some(e) = state.list_failures.get(&ResourceKind::Locator) {
            return Err(e.clone());
        }
        Ok(state.locators.clone())
    }

    fn list_content_keys(&self) -> Result<Vec<ContentKeyInfo>, ClientError> {
        let mut state = self.state.lock();
        state.journal.push(Operation::List(ResourceKind::ContentKey));
        if let Some(e) = state.list_failures.get(&ResourceKind::ContentKey) {
            return Err(e.clone());
        }
        Ok(state.content_keys.clone())
    }

    fn get_asset(&self, id: &str) -> Result<AssetInfo, ClientError> {
        let mut state = self.state.lock();
        state
            .journal
            .push(Operation::Get(ResourceKind::Asset, id.to_string()));
        validate_id(id)?;
        state
            .assets
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| ClientError::not_found(id))
    }

    fn delete_asset(&self, id: &str) -> Result<(), ClientError> {
        let mut state = self.state.lock();
        state
            .journal
            .push(Operation::Delete(ResourceKind::Asset, id.to_string()));
        validate_id(id)?;
        if let Some(e) = state.delete_failures.get(id) {
            return Err(e.clone());
        }
        if state.locators.iter().any(|l| l.asset_id == id) {
            return Err(ClientError::dependency_blocked(
                id,
                "asset has existing locators",
            ));
        }
        remove_by_id(&mut state.assets, id, |a| &a.id)
    }

    fn delete_access_policy(&self, id: &str) -> Result<(), ClientError> {
        let mut state = self.state.lock();
        state
            .journal
            .push(Operation::Delete(ResourceKind::AccessPolicy, id.to_string()));
        validate_id(id)?;
        if let Some(e) = state.delete_failures.get(id) {
            return Err(e.clone());
        }
        remove_by_id(&mut state.access_policies, id, |p| &p.id)
    }

    fn delete_locator(&self, id: &str) -> Result<(), ClientError> {
        let mut state = self.state.lock();
        state
            .journal
            .push(Operation::Delete(ResourceKind::Locator, id.to_string()));
        validate_id(id)?;
        if let Some(e) = state.delete_failures.get(id) {
            return Err(e.clone());
        }
        remove_by_id(&mut state.locators, id, |l| &l.id)
    }

    fn delete_content_key(&self, id: &str) -> Result<(), ClientError> {
        let mut state = self.state.lock();
        state
            .journal
            .push(Operation::Delete(ResourceKind::ContentKey, id.to_string()));
        validate_id(id)?;
        if let Some(e) = state.delete_failures.get(id) {
            return Err(e.clone());
        }
        remove_by_id(&mut state.content_keys, id, |k| &k.id)
    }
}

fn new_id(tag: &str) -> String {
    format!("nb:{tag}:UUID:{}", Uuid::new_v4())
}

fn validate_id(id: &str) -> Result<(), ClientError> {
    if id.starts_with("nb:") {
        Ok(())
    } else {
        Err(ClientError::validation(format!(
            "identifier '{id}' is not a service id"
        )))
    }
}

fn remove_by_id<T>(items: &mut Vec<T>, id: &str, get_id: impl Fn(&T) -> &str) -> Result<(), ClientError> {
    match items.iter().position(|item| get_id(item) == id) {
        Some(pos) => {
            items.remove(pos);
            Ok(())
        }
        None => Err(ClientError::not_found(id)),
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
