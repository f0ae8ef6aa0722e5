// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use jiff::ToSpan;
use jiff::civil::Date;

use crate::record::{DataValue, Record};

/// NOTE: Keys of [`DayMap`], so it should be stable across different runs.
const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";

/// Records filed under the days they fall on, keyed by `YYYY-MM-DD`.
pub type DayMap<'a, R> = BTreeMap<String, Vec<&'a R>>;

/// The key of a day in a [`DayMap`].
pub fn day_key(date: Date) -> String {
    date.strftime(STABLE_FORMAT_DATEONLY).to_string()
}

/// Files records under every day they span.
///
/// A record without a date in `start_field` is skipped, even if it has an end
/// date. A record whose end date is strictly after its start date is filed under
/// every day from start to end inclusive. Otherwise, including a missing or
/// non-date end, it is filed under its start day only.
#[tracing::instrument(skip_all, fields(records = records.len(), %start_field, ?end_field))]
pub fn group_records_by_date<'a, R: Record>(
    records: &'a [R],
    start_field: &str,
    end_field: Option<&str>,
) -> DayMap<'a, R> {
    let mut days = DayMap::new();

    for record in records {
        let Some(start) = record.value(start_field).and_then(DataValue::as_date) else {
            tracing::trace!(id = record.id(), "no start date, skipped");
            continue;
        };

        let end = end_field
            .and_then(|field| record.value(field))
            .and_then(DataValue::as_date);

        match end {
            Some(end) if end > start => {
                for date in start.series(1.day()).take_while(|date| *date <= end) {
                    days.entry(day_key(date)).or_default().push(record);
                }
            }
            _ => days.entry(day_key(start)).or_default().push(record),
        }
    }

    tracing::debug!(days = days.len(), "grouped records by date");
    days
}
