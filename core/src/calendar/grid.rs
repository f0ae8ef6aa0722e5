// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::Date;

use crate::Error;
use crate::calendar::DateInterval;

/// Every day of the interval, in order.
pub fn generate_dates(interval: &DateInterval) -> Vec<Date> {
    interval
        .start
        .series(1.day())
        .take_while(|date| *date <= interval.end)
        .collect()
}

/// Splits items into consecutive rows of `size`, the last row may be shorter.
///
/// # Errors
///
/// Returns [`Error::InvalidChunkSize`] if `size` is zero.
pub fn chunk_dates<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, Error> {
    if size == 0 {
        return Err(Error::InvalidChunkSize(size));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}
