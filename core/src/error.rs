// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised by the grouping and calendar functions.
///
/// Malformed record values never end up here, they degrade into the reserved
/// bucket or are skipped.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rows of a calendar grid must hold at least one date.
    #[error("invalid chunk size {0}, expected at least 1")]
    InvalidChunkSize(usize),

    /// The calendar interval name is not one of the supported granularities.
    #[error("unknown calendar interval: {0}, expected one of month, 2weeks, week, 3days, day")]
    UnknownInterval(String),

    /// The record set could not be decoded.
    #[error("invalid records: {0}")]
    InvalidRecords(#[from] serde_json::Error),
}
