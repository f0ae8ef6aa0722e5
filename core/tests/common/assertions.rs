// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::collections::HashMap;

use boardcal_core::{Board, Record};

/// The ids of borrowed records, in order.
pub fn ids<R: Record>(records: &[&R]) -> Vec<String> {
    records.iter().map(|r| r.id().to_owned()).collect()
}

/// Asserts that every input record sits in exactly one bucket of the board.
///
/// # Panics
///
/// Panics if a record is missing from the board or found in several buckets.
pub fn assert_each_record_once<R: Record>(records: &[R], board: &Board<'_, R>) {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for (_, bucket) in board.iter() {
        for record in bucket {
            *seen.entry(record.id().to_owned()).or_default() += 1;
        }
    }

    assert_eq!(seen.len(), records.len(), "bucketed record count mismatch");
    for record in records {
        assert_eq!(
            seen.get(record.id()),
            Some(&1),
            "record {} should be in exactly one bucket",
            record.id()
        );
    }
}
