// SPDX-License-Identifier: MIT

//! Order-insensitive subset verification against a live listing.
//!
//! Answers "does the right set of resources exist" by identity alone, then
//! hands each matched pair to a caller-supplied delegate for kind-specific
//! field comparison (which may use [`crate::time`] for date fields). One
//! verifier serves all four resource kinds.

use crate::error::AssertionFailure;
use crate::model::HasId;
use tracing::debug;

/// Per-pair field comparison invoked after identity matching.
///
/// Receives a positional label, the expected element, and the matched actual
/// element, in expected order.
pub type FieldEquality<'f, T> = &'f mut dyn FnMut(&str, &T, &T) -> Result<(), AssertionFailure>;

/// [`verify_list_contains_msg`] with an empty message prefix
pub fn verify_list_contains<T: HasId>(
    expected: &[T],
    actual: Option<&[T]>,
    delegate: Option<FieldEquality<'_, T>>,
) -> Result<(), AssertionFailure> {
    verify_list_contains_msg("", expected, actual, delegate)
}

/// Verify that `actual` contains every element of `expected`, matching by
/// identity.
///
/// Checkpoints, in order:
/// 1. `actual` must be present;
/// 2. `actual` must be at least as large as `expected`;
/// 3. every expected id must appear somewhere in `actual`.
///
/// The matched actual elements are collected in `expected`'s order
/// (regardless of `actual`'s order) and, when a delegate is supplied, passed
/// to it pairwise with a positional label.
pub fn verify_list_contains_msg<T: HasId>(
    message: &str,
    expected: &[T],
    actual: Option<&[T]>,
    delegate: Option<FieldEquality<'_, T>>,
) -> Result<(), AssertionFailure> {
    let actual = actual
        .ok_or_else(|| AssertionFailure::new(format!("{message}: actualInfos should exist")))?;

    if actual.len() < expected.len() {
        return Err(AssertionFailure::mismatch(
            format!("{message}: actual size should be same size or larger than expected size"),
            expected.len(),
            actual.len(),
        ));
    }

    let mut ordered_and_filtered_actual: Vec<&T> = Vec::with_capacity(expected.len());
    for expected_info in expected {
        match actual.iter().find(|a| a.id() == expected_info.id()) {
            Some(found) => ordered_and_filtered_actual.push(found),
            None => debug!(id = expected_info.id(), "expected id missing from actual"),
        }
    }

    if ordered_and_filtered_actual.len() != expected.len() {
        return Err(AssertionFailure::mismatch(
            format!("{message}: actual filtered size should be same as expected size"),
            expected.len(),
            ordered_and_filtered_actual.len(),
        ));
    }

    if let Some(delegate) = delegate {
        for (i, (expected_info, actual_info)) in expected
            .iter()
            .zip(ordered_and_filtered_actual.iter())
            .enumerate()
        {
            let label = format!("{message}: orderedAndFilteredActualInfo {i}");
            delegate(&label, expected_info, actual_info)?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
