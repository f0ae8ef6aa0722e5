// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::{HashMap, HashSet};

use crate::i18n::{MessageId, Translator};
use crate::record::{DataValue, Record};

/// Records partitioned into named buckets by the value of one field.
///
/// Bucket order is unspecified, use [`Board::labels_sorted`] for a stable order.
#[derive(Debug)]
pub struct Board<'a, R> {
    no_status: String,
    buckets: HashMap<String, Vec<&'a R>>,
}

impl<'a, R> Board<'a, R> {
    /// The label of the reserved bucket for records without a value.
    pub fn no_status_label(&self) -> &str {
        &self.no_status
    }

    /// Records without a value for the grouping field.
    pub fn no_status(&self) -> &[&'a R] {
        self.get(&self.no_status).unwrap_or_default()
    }

    /// Records in the bucket with the given label.
    pub fn get(&self, label: &str) -> Option<&[&'a R]> {
        self.buckets.get(label).map(Vec::as_slice)
    }

    /// Number of buckets, including the reserved one.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// A board always holds the reserved bucket.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterates over buckets in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a R])> {
        self.buckets
            .iter()
            .map(|(label, records)| (label.as_str(), records.as_slice()))
    }

    /// Bucket labels sorted alphabetically, with the reserved bucket first.
    pub fn labels_sorted(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self
            .buckets
            .keys()
            .map(String::as_str)
            .filter(|label| *label != self.no_status)
            .collect();
        labels.sort_unstable();
        labels.insert(0, &self.no_status);
        labels
    }

    /// Consumes the board, returning the bucket map.
    pub fn into_inner(self) -> HashMap<String, Vec<&'a R>> {
        self.buckets
    }
}

/// Collects the distinct non-empty string values of a field.
///
/// Missing and non-string values are ignored, the set has no meaningful order.
pub fn unique_values<R: Record>(records: &[R], field: &str) -> HashSet<String> {
    records
        .iter()
        .filter_map(|record| string_value(record, field))
        .map(ToOwned::to_owned)
        .collect()
}

/// Groups records into buckets keyed by the string value of `field`.
///
/// Without a field, or with an empty field name, every record lands in the
/// reserved "no status" bucket. With
/// a field there is one bucket per distinct value plus the reserved bucket, which
/// receives records whose value is missing, empty, or not a string. Records keep
/// their input order within a bucket.
#[tracing::instrument(skip_all, fields(records = records.len(), ?field))]
pub fn group_records_by_field<'a, R: Record>(
    records: &'a [R],
    field: Option<&str>,
    translator: &impl Translator,
) -> Board<'a, R> {
    let no_status = translator.translate(MessageId::BoardNoStatus, &[]);

    let Some(field) = field.filter(|f| !f.is_empty()) else {
        let buckets = HashMap::from([(no_status.clone(), records.iter().collect())]);
        return Board { no_status, buckets };
    };

    let mut buckets: HashMap<String, Vec<&'a R>> = unique_values(records, field)
        .into_iter()
        .map(|key| (key, Vec::new()))
        .collect();
    buckets.entry(no_status.clone()).or_default();

    for record in records {
        let label = string_value(record, field).unwrap_or(no_status.as_str());
        if let Some(bucket) = buckets.get_mut(label) {
            bucket.push(record);
        }
    }

    tracing::debug!(buckets = buckets.len(), "grouped records by field");
    Board { no_status, buckets }
}

fn string_value<'r, R: Record>(record: &'r R, field: &str) -> Option<&'r str> {
    record
        .value(field)
        .and_then(DataValue::as_str)
        .filter(|s| !s.is_empty())
}
