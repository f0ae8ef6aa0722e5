// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;
use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;
use serde_json::{Number, Value};

/// A single displayable item, e.g. a note, exposing named field values.
///
/// Grouping functions only ever borrow records, the owner stays with the caller.
pub trait Record {
    /// The identifier of the record, e.g. the path of the note.
    fn id(&self) -> &str;

    /// Looks up the value of a field, `None` if the record has no such field.
    fn value(&self, field: &str) -> Option<&DataValue>;
}

/// The type of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFieldType {
    /// Text.
    String,

    /// Integer or floating point number.
    Number,

    /// True or false.
    Boolean,

    /// Calendar date, optionally with a time of day.
    Date,

    /// A list of values.
    List,

    /// Null, or anything that could not be classified.
    Unknown,
}

/// A typed value of a record field.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum DataValue {
    /// Text.
    String(String),

    /// Number.
    Number(f64),

    /// Boolean.
    Boolean(bool),

    /// Date and time, date-only values are stored at midnight.
    Date(DateTime),

    /// A list of values.
    List(Vec<DataValue>),

    /// Explicit null.
    Null,
}

impl DataValue {
    /// Returns the string if the value is string-typed.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the calendar date if the value is date-typed.
    pub fn as_date(&self) -> Option<Date> {
        self.as_datetime().map(|dt| dt.date())
    }

    /// Returns the date and time if the value is date-typed.
    pub fn as_datetime(&self) -> Option<DateTime> {
        match self {
            DataValue::Date(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Whether the value is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// The type of this value.
    pub fn kind(&self) -> DataFieldType {
        match self {
            DataValue::String(_) => DataFieldType::String,
            DataValue::Number(_) => DataFieldType::Number,
            DataValue::Boolean(_) => DataFieldType::Boolean,
            DataValue::Date(_) => DataFieldType::Date,
            DataValue::List(_) => DataFieldType::List,
            DataValue::Null => DataFieldType::Unknown,
        }
    }

    /// Parses a frontmatter string, recognizing dates such as `2024-03-10` or
    /// `2024-03-10T09:30:00`.
    pub fn parse_date(s: &str) -> Option<DateTime> {
        let s = s.trim();
        if let Ok(dt) = s.parse::<DateTime>() {
            Some(dt)
        } else if let Ok(date) = s.parse::<Date>() {
            Some(date.to_datetime(jiff::civil::Time::midnight()))
        } else if let Ok(ts) = s.parse::<jiff::Timestamp>() {
            Some(ts.to_zoned(TimeZone::UTC).datetime())
        } else {
            None
        }
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        match DataValue::parse_date(s) {
            Some(dt) => DataValue::Date(dt),
            None => DataValue::String(s.to_owned()),
        }
    }
}

impl From<Date> for DataValue {
    fn from(date: Date) -> Self {
        DataValue::Date(date.to_datetime(jiff::civil::Time::midnight()))
    }
}

impl From<DateTime> for DataValue {
    fn from(dt: DateTime) -> Self {
        DataValue::Date(dt)
    }
}

impl From<Value> for DataValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => DataValue::Null,
            Value::Bool(b) => DataValue::Boolean(b),
            Value::Number(n) => n.as_f64().map_or(DataValue::Null, DataValue::Number),
            Value::String(s) => match DataValue::parse_date(&s) {
                Some(dt) => DataValue::Date(dt),
                None => DataValue::String(s),
            },
            Value::Array(values) => DataValue::List(values.into_iter().map(Into::into).collect()),
            Value::Object(_) => DataValue::String(value.to_string()),
        }
    }
}

impl From<DataValue> for Value {
    fn from(value: DataValue) -> Self {
        match value {
            DataValue::String(s) => Value::String(s),
            DataValue::Number(n) => Number::from_f64(n).map_or(Value::Null, Value::Number),
            DataValue::Boolean(b) => Value::Bool(b),
            DataValue::Date(dt) if dt.time() == jiff::civil::Time::midnight() => {
                Value::String(dt.date().to_string())
            }
            DataValue::Date(dt) => Value::String(dt.to_string()),
            DataValue::List(values) => Value::Array(values.into_iter().map(Into::into).collect()),
            DataValue::Null => Value::Null,
        }
    }
}

/// A record read from note frontmatter.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DataRecord {
    /// The identifier of the record, usually the note path.
    pub id: String,

    /// Field values keyed by field name, in frontmatter order.
    #[serde(default)]
    pub values: IndexMap<String, DataValue>,
}

impl DataRecord {
    /// Creates a record without any field.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: IndexMap::new(),
        }
    }

    /// Sets a field value, builder style.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<DataValue>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }
}

impl Record for DataRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: &str) -> Option<&DataValue> {
        self.values.get(field)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn value(&self, field: &str) -> Option<&DataValue> {
        (**self).value(field)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, datetime};

    use super::*;

    #[test]
    fn parses_date_only_strings_as_dates() {
        let value = DataValue::from("2024-03-10");
        assert_eq!(value.as_date(), Some(date(2024, 3, 10)));
        assert_eq!(value.kind(), DataFieldType::Date);
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn parses_datetime_strings_as_dates() {
        let value = DataValue::from("2024-03-10T09:30:00");
        assert_eq!(value.as_datetime(), Some(datetime(2024, 3, 10, 9, 30, 0, 0)));
        assert_eq!(value.as_date(), Some(date(2024, 3, 10)));
    }

    #[test]
    fn keeps_other_strings_as_text() {
        for s in ["In progress", "2024", "March 10", ""] {
            let value = DataValue::from(s);
            assert_eq!(value.as_str(), Some(s), "s = {s:?}");
            assert_eq!(value.as_date(), None);
        }
    }

    #[test]
    fn converts_json_values() {
        let value: DataValue = serde_json::json!(["a", 1, true, null]).into();
        assert_eq!(
            value,
            DataValue::List(vec![
                DataValue::String("a".to_owned()),
                DataValue::Number(1.0),
                DataValue::Boolean(true),
                DataValue::Null,
            ])
        );
        assert!(DataValue::from(Value::Null).is_null());
    }

    #[test]
    fn deserializes_records_from_json() {
        let json = r#"{"id": "a.md", "values": {"status": "Done", "due": "2024-01-05", "tags": ["x"]}}"#;
        let record: DataRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id(), "a.md");
        assert_eq!(record.value("status").and_then(DataValue::as_str), Some("Done"));
        assert_eq!(
            record.value("due").and_then(DataValue::as_date),
            Some(date(2024, 1, 5))
        );
        assert_eq!(record.value("tags").map(DataValue::kind), Some(DataFieldType::List));
        assert_eq!(record.value("missing"), None);
    }

    #[test]
    fn keeps_frontmatter_order() {
        let json = r#"{"id": "a.md", "values": {"start": "2024-03-10", "end": "2024-03-12", "area": "Home"}}"#;
        let record: DataRecord = serde_json::from_str(json).unwrap();
        let names: Vec<_> = record.values.keys().map(String::as_str).collect();
        assert_eq!(names, ["start", "end", "area"]);
    }

    #[test]
    fn serializes_midnight_dates_without_time() {
        let record = DataRecord::new("a.md").with("due", date(2024, 1, 5));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["values"]["due"], "2024-01-05");
    }
}
