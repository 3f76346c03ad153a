// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end lifecycle tests: dirty environment, reconcile to baseline,
//! populate expected resources, verify against the live listing, reconcile
//! again in teardown.

use media_harness::fake::FakeClient;
use media_harness::time;
use media_harness::{
    verify_list_contains, verify_list_contains_msg, AssetInfo, Reconciler, ResourceClient,
};

#[test]
fn full_lifecycle_against_dirty_environment() {
    let client = FakeClient::new();

    // Leftovers from a prior crashed run
    let stale_asset = client.add_asset("testAsset-stale");
    client.add_locator(&stale_asset.id);
    client.add_access_policy("testPolicy-stale");
    client.add_content_key("stale-key");
    // A resource the harness must not touch
    let production = client.add_asset("production-archive");

    // Setup: bring the environment back to baseline
    let report = Reconciler::new(&client).reconcile();
    assert!(report.is_clean());
    assert_eq!(report.total_deleted(), 4);
    assert_eq!(client.remaining(), 1);

    // Test body: create what the test expects to observe
    let expected = vec![
        client.add_asset("testAsset-alpha"),
        client.add_asset("testAsset-beta"),
    ];

    let actual = client.list_assets().unwrap();
    assert_eq!(actual.len(), 3); // two ours plus the production asset

    let mut delegate = |label: &str, e: &AssetInfo, a: &AssetInfo| {
        if e.name != a.name {
            return Err(media_harness::AssertionFailure::mismatch(
                label, &e.name, &a.name,
            ));
        }
        time::assert_approx_eq(label, e.created, a.created)?;
        time::assert_approx_eq(label, e.last_modified, a.last_modified)
    };
    verify_list_contains_msg("assets", &expected, Some(&actual), Some(&mut delegate)).unwrap();

    // Teardown: only our resources disappear
    let report = Reconciler::new(&client).reconcile();
    assert!(report.is_clean());
    assert_eq!(client.list_assets().unwrap(), vec![production]);
}

#[test]
fn verification_succeeds_with_unrelated_actual_entries() {
    let expected = vec![AssetInfo {
        id: "A1".to_string(),
        name: "testAsset-x".to_string(),
        created: None,
        last_modified: None,
    }];
    let actual = vec![
        expected[0].clone(),
        AssetInfo {
            id: "A2".to_string(),
            name: "other".to_string(),
            created: None,
            last_modified: None,
        },
    ];

    let mut calls = Vec::new();
    let mut delegate = |label: &str, e: &AssetInfo, a: &AssetInfo| {
        calls.push((label.to_string(), e.id.clone(), a.id.clone()));
        Ok(())
    };
    verify_list_contains(&expected, Some(&actual), Some(&mut delegate)).unwrap();

    assert_eq!(
        calls,
        vec![(
            ": orderedAndFilteredActualInfo 0".to_string(),
            "A1".to_string(),
            "A1".to_string()
        )]
    );
}

#[test]
fn verification_fails_at_size_precheck() {
    let asset = |id: &str| AssetInfo {
        id: id.to_string(),
        name: "testAsset".to_string(),
        created: None,
        last_modified: None,
    };
    let expected = vec![asset("A1"), asset("A2")];
    let actual = vec![asset("A1")];

    let err = verify_list_contains(&expected, Some(&actual), None).unwrap_err();
    assert!(err
        .message
        .contains("actual size should be same size or larger than expected size"));
}

#[test]
fn second_reconcile_attempts_nothing() {
    let client = FakeClient::new();
    let asset = client.add_asset("testAsset1");
    client.add_locator(&asset.id);

    Reconciler::new(&client).reconcile();
    let deletes_after_first = client.deletes().len();

    let second = Reconciler::new(&client).reconcile();
    assert!(second.is_clean());
    assert_eq!(client.deletes().len(), deletes_after_first);
}
