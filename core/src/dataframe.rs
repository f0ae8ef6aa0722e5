// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;

use crate::Error;
use crate::record::{DataFieldType, DataRecord};

/// A named field and the type of its values.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DataField {
    /// Field name.
    pub name: String,

    /// Type of the field, taken from its first non-null value.
    pub kind: DataFieldType,
}

/// A homogeneous record set together with its field schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    /// Fields in the order they first appear across the records.
    pub fields: Vec<DataField>,

    /// Records in source order.
    pub records: Vec<DataRecord>,
}

impl DataFrame {
    /// Builds a frame, inferring the schema from the records.
    pub fn new(records: Vec<DataRecord>) -> Self {
        let mut kinds: IndexMap<&str, Option<DataFieldType>> = IndexMap::new();
        for record in &records {
            for (name, value) in &record.values {
                let kind = kinds.entry(name.as_str()).or_default();
                if kind.is_none() && !value.is_null() {
                    *kind = Some(value.kind());
                }
            }
        }

        let fields = kinds
            .into_iter()
            .map(|(name, kind)| DataField {
                name: name.to_owned(),
                kind: kind.unwrap_or(DataFieldType::String),
            })
            .collect();
        Self { fields, records }
    }

    /// Decodes a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecords`] if the input is not an array of records.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let records: Vec<DataRecord> = serde_json::from_str(json)?;
        tracing::debug!(records = records.len(), "decoded records");
        Ok(Self::new(records))
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&DataField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields whose values are of the given type.
    pub fn fields_of_kind(&self, kind: DataFieldType) -> impl Iterator<Item = &DataField> {
        self.fields.iter().filter(move |field| field.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DataValue;

    #[test]
    fn infers_schema_from_first_non_null_value() {
        let frame = DataFrame::new(vec![
            DataRecord::new("a")
                .with("status", DataValue::Null)
                .with("due", "2024-03-10"),
            DataRecord::new("b")
                .with("status", "Todo")
                .with("points", DataValue::Number(3.0)),
        ]);

        let kinds: Vec<_> = frame
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.kind))
            .collect();
        assert_eq!(
            kinds,
            [
                ("status", DataFieldType::String),
                ("due", DataFieldType::Date),
                ("points", DataFieldType::Number),
            ]
        );
        assert_eq!(
            frame.field("due").map(|f| f.kind),
            Some(DataFieldType::Date)
        );
        assert!(frame.field("missing").is_none());
    }

    #[test]
    fn all_null_fields_default_to_string() {
        let frame = DataFrame::new(vec![DataRecord::new("a").with("x", DataValue::Null)]);
        assert_eq!(frame.fields[0].kind, DataFieldType::String);
    }

    #[test]
    fn filters_fields_by_kind() {
        let frame = DataFrame::new(vec![
            DataRecord::new("a")
                .with("start", "2024-03-10")
                .with("end", "2024-03-12")
                .with("status", "Todo"),
        ]);
        let dates: Vec<_> = frame
            .fields_of_kind(DataFieldType::Date)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(dates, ["start", "end"]);
    }

    #[test]
    fn decodes_json() {
        let frame = DataFrame::from_json(
            r#"[{"id": "a.md", "values": {"status": "Done"}}, {"id": "b.md"}]"#,
        )
        .unwrap();
        assert_eq!(frame.records.len(), 2);
        assert_eq!(frame.records[1].values.len(), 0);
    }

    #[test]
    fn orders_fields_as_first_seen_in_json() {
        let frame = DataFrame::from_json(
            r#"[
                {"id": "a.md", "values": {"start": "2024-03-10", "end": "2024-03-12"}},
                {"id": "b.md", "values": {"status": "Todo", "start": "2024-03-11"}}
            ]"#,
        )
        .unwrap();
        let names: Vec<_> = frame.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["start", "end", "status"]);
        assert_eq!(
            frame.fields_of_kind(DataFieldType::Date).next().map(|f| f.name.as_str()),
            Some("start")
        );
    }

    #[test]
    fn rejects_malformed_json() {
        let result = DataFrame::from_json(r#"{"id": "a.md"}"#);
        assert!(matches!(result, Err(Error::InvalidRecords(_))));
    }
}
