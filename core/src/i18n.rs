// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use jiff::civil::Date;

/// Identifiers of the messages the grouping and calendar functions ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    /// Label of the reserved board bucket holding records without a value.
    BoardNoStatus,

    /// Title of a calendar window spanning a single day, takes `value`.
    CalendarDate,

    /// Title of a calendar window spanning several days, takes `from`, `to`,
    /// `en_separator` and `custom_year`.
    CalendarInterval,
}

impl MessageId {
    /// All message identifiers.
    pub const ALL: [MessageId; 3] = [
        MessageId::BoardNoStatus,
        MessageId::CalendarDate,
        MessageId::CalendarInterval,
    ];

    /// The key of the message in a translation catalog.
    pub const fn key(self) -> &'static str {
        match self {
            MessageId::BoardNoStatus => "views.board.no-status",
            MessageId::CalendarDate => "views.calendar.date",
            MessageId::CalendarInterval => "views.calendar.interval",
        }
    }

    /// Looks up a message identifier by its catalog key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How the month of a date parameter is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    /// Full month name, e.g. "January".
    Long,

    /// Abbreviated month name, e.g. "Jan".
    Short,
}

/// Which parts of a date parameter are shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    /// Show the numeric year.
    pub year: bool,

    /// Show the month, and in which style.
    pub month: Option<MonthStyle>,

    /// Show the numeric day of month.
    pub day: bool,
}

impl DateFormat {
    /// "January 5, 2024"
    pub const LONG: Self = Self {
        year: true,
        month: Some(MonthStyle::Long),
        day: true,
    };

    /// "Jan 5, 2024"
    pub const MEDIUM: Self = Self {
        year: true,
        month: Some(MonthStyle::Short),
        day: true,
    };

    /// "Jan 5"
    pub const MONTH_DAY: Self = Self {
        year: false,
        month: Some(MonthStyle::Short),
        day: true,
    };

    /// "2024"
    pub const YEAR: Self = Self {
        year: true,
        month: None,
        day: false,
    };

    /// Renders a date in English.
    pub fn format(self, date: Date) -> String {
        let month = match self.month {
            Some(MonthStyle::Long) => Some("%B"),
            Some(MonthStyle::Short) => Some("%b"),
            None => None,
        };

        let pattern = match (month, self.day, self.year) {
            (Some(m), true, true) => format!("{m} %-d, %Y"),
            (Some(m), true, false) => format!("{m} %-d"),
            (Some(m), false, true) => format!("{m} %Y"),
            (Some(m), false, false) => m.to_owned(),
            (None, true, true) => "%-d, %Y".to_owned(),
            (None, true, false) => "%-d".to_owned(),
            (None, false, true) => "%Y".to_owned(),
            (None, false, false) => return String::new(),
        };
        date.strftime(&pattern).to_string()
    }
}

/// The value of an interpolation parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Inserted verbatim.
    Text(String),

    /// Formatted with the [`DateFormat`] of the parameter.
    Date(Date),
}

/// A named interpolation parameter with its formatting options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Placeholder name.
    pub name: &'static str,

    /// Value to insert.
    pub value: ParamValue,

    /// Formatting options, only used for dates.
    pub format: DateFormat,
}

impl Param {
    /// A text parameter.
    pub fn text(name: &'static str, text: impl Into<String>) -> Self {
        Self {
            name,
            value: ParamValue::Text(text.into()),
            format: DateFormat::default(),
        }
    }

    /// A date parameter.
    pub fn date(name: &'static str, date: Date, format: DateFormat) -> Self {
        Self {
            name,
            value: ParamValue::Date(date),
            format,
        }
    }

    /// Renders the value of this parameter.
    pub fn render(&self) -> String {
        match &self.value {
            ParamValue::Text(s) => s.clone(),
            ParamValue::Date(date) => self.format.format(*date),
        }
    }
}

/// The localization capability: looks a message up and interpolates its parameters.
pub trait Translator {
    /// Produces the message text.
    fn translate(&self, id: MessageId, params: &[Param]) -> String;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, id: MessageId, params: &[Param]) -> String {
        (**self).translate(id, params)
    }
}

/// A translator backed by `{{name}}` templates, English by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    templates: HashMap<MessageId, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::english()
    }
}

impl Catalog {
    /// The built-in English messages.
    pub fn english() -> Self {
        let templates = HashMap::from([
            (MessageId::BoardNoStatus, "No status".to_owned()),
            (MessageId::CalendarDate, "{{value}}".to_owned()),
            (
                MessageId::CalendarInterval,
                "{{from}} - {{to}}{{en_separator}}{{custom_year}}".to_owned(),
            ),
        ]);
        Self { templates }
    }

    /// Replaces the template of a message.
    #[must_use]
    pub fn with_template(mut self, id: MessageId, template: impl Into<String>) -> Self {
        self.templates.insert(id, template.into());
        self
    }

    /// Replaces templates by catalog key, unknown keys are ignored.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        for (key, template) in overrides {
            match MessageId::from_key(key) {
                Some(id) => {
                    self.templates.insert(id, template.clone());
                }
                None => tracing::warn!(key, "unknown message key, ignored"),
            }
        }
        self
    }

    /// The template of a message.
    pub fn template(&self, id: MessageId) -> &str {
        self.templates.get(&id).map_or(id.key(), String::as_str)
    }
}

impl Translator for Catalog {
    fn translate(&self, id: MessageId, params: &[Param]) -> String {
        interpolate(self.template(id), params)
    }
}

/// Substitutes every `{{name}}` placeholder, missing parameters render empty.
fn interpolate(template: &str, params: &[Param]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some((head, tail)) = rest.split_once("{{") {
        out.push_str(head);
        let Some((name, tail)) = tail.split_once("}}") else {
            // unterminated placeholder, keep it as text
            out.push_str("{{");
            rest = tail;
            break;
        };

        let name = name.trim();
        match params.iter().find(|p| p.name == name) {
            Some(param) => out.push_str(&param.render()),
            None => tracing::trace!(name, "missing message parameter"),
        }
        rest = tail;
    }
    out.push_str(rest);
    out
}
