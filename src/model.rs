// SPDX-License-Identifier: MIT

//! Resource model snapshots returned by the remote service.
//!
//! Info structs are ephemeral: fetched via `list`/`get`, never cached or
//! mutated locally. Ids are opaque service-assigned strings of the form
//! `nb:<tag>:UUID:<uuid>` and are never parsed by the harness.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name prefix marking harness-created assets
pub const TEST_ASSET_PREFIX: &str = "testAsset";
/// Name prefix marking harness-created access policies
pub const TEST_POLICY_PREFIX: &str = "testPolicy";
/// Name prefix marking harness-created content keys
pub const TEST_CONTENT_KEY_PREFIX: &str = "testContentKey";

/// The four resource kinds managed by the remote service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Asset,
    AccessPolicy,
    Locator,
    ContentKey,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Asset => "asset",
            Self::AccessPolicy => "access policy",
            Self::Locator => "locator",
            Self::ContentKey => "content key",
        };
        f.write_str(name)
    }
}

/// Capability to expose a service-assigned identity.
///
/// The verifier is generic over exactly this and touches no other field.
pub trait HasId {
    /// The opaque service-assigned id
    fn id(&self) -> &str;
}

/// Snapshot of a media asset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    pub id: String,
    pub name: String,
    pub created: Option<DateTime<Utc>>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Snapshot of an access policy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessPolicyInfo {
    pub id: String,
    pub name: String,
    pub created: Option<DateTime<Utc>>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Snapshot of a locator.
///
/// Locators have no name of their own; `asset_id` is a non-owning reference
/// resolved through [`ResourceClient::get_asset`](crate::client::ResourceClient::get_asset).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocatorInfo {
    pub id: String,
    pub asset_id: String,
    pub created: Option<DateTime<Utc>>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Snapshot of a content key
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentKeyInfo {
    pub id: String,
    pub name: String,
    pub created: Option<DateTime<Utc>>,
    pub last_modified: Option<DateTime<Utc>>,
}

macro_rules! impl_has_id {
    ($($ty:ty),+) => {
        $(impl HasId for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })+
    };
}

impl_has_id!(AssetInfo, AccessPolicyInfo, LocatorInfo, ContentKeyInfo);

/// Well-known fixture ids for exercising not-found and validation paths
pub mod fixtures {
    /// Well-formed asset id that names no existing resource
    pub const VALID_BUT_NONEXIST_ASSET_ID: &str =
        "nb:cid:UUID:0239f11f-2d36-4e5f-aa35-44d58ccc0973";
    /// Well-formed access policy id that names no existing resource
    pub const VALID_BUT_NONEXIST_ACCESS_POLICY_ID: &str =
        "nb:pid:UUID:38dcb3a0-ef64-4ad0-bbb5-67a14c6df2f7";
    /// Well-formed locator id that names no existing resource
    pub const VALID_BUT_NONEXIST_LOCATOR_ID: &str =
        "nb:lid:UUID:92a70402-fca9-4aa3-80d7-d4de3792a27a";
    /// Malformed id rejected by validation
    pub const INVALID_ID: &str = "notAValidId";
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
