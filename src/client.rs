// SPDX-License-Identifier: MIT

//! Contract of the remote resource-management client.
//!
//! The harness only consumes this trait; real implementations live outside
//! this crate (an authenticated REST client for the media service). Listing
//! order is not guaranteed. All calls are blocking; any timeout or retry
//! policy belongs to the implementation, not the harness.

use crate::error::ClientError;
use crate::model::{AccessPolicyInfo, AssetInfo, ContentKeyInfo, LocatorInfo};

/// Authenticated CRUD operations over the four resource kinds.
pub trait ResourceClient {
    /// List all assets visible to the caller
    fn list_assets(&self) -> Result<Vec<AssetInfo>, ClientError>;

    /// List all access policies visible to the caller
    fn list_access_policies(&self) -> Result<Vec<AccessPolicyInfo>, ClientError>;

    /// List all locators visible to the caller
    fn list_locators(&self) -> Result<Vec<LocatorInfo>, ClientError>;

    /// List all content keys visible to the caller
    fn list_content_keys(&self) -> Result<Vec<ContentKeyInfo>, ClientError>;

    /// Fetch one asset by id.
    ///
    /// Fails with [`ClientError::NotFound`] for a well-formed id naming no
    /// resource, and [`ClientError::Validation`] for a malformed id.
    fn get_asset(&self, id: &str) -> Result<AssetInfo, ClientError>;

    /// Delete an asset.
    ///
    /// Fails with [`ClientError::DependencyBlocked`] while any locator still
    /// references it.
    fn delete_asset(&self, id: &str) -> Result<(), ClientError>;

    /// Delete an access policy
    fn delete_access_policy(&self, id: &str) -> Result<(), ClientError>;

    /// Delete a locator
    fn delete_locator(&self, id: &str) -> Result<(), ClientError>;

    /// Delete a content key
    fn delete_content_key(&self, id: &str) -> Result<(), ClientError>;
}
