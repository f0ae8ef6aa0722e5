// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use crate::calendar::CalendarInterval;
use crate::i18n::Catalog;

/// The name of the application.
pub const APP_NAME: &str = "boardcal";

/// Configuration of the board and calendar views.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Board view settings.
    #[serde(default)]
    pub board: BoardConfig,

    /// Calendar view settings.
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Message templates keyed by message key, e.g. `views.board.no-status`.
    #[serde(default)]
    pub messages: BTreeMap<String, String>,
}

impl Config {
    /// The translator for the configured messages.
    pub fn catalog(&self) -> Catalog {
        Catalog::english().with_overrides(&self.messages)
    }
}

/// Board view settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct BoardConfig {
    /// The field whose values name the columns.
    #[serde(default)]
    pub field: Option<String>,
}

/// Calendar view settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct CalendarConfig {
    /// The field holding the start date of a record.
    #[serde(default)]
    pub date_field: Option<String>,

    /// The field holding the end date of a record, for multi-day records.
    #[serde(default)]
    pub end_date_field: Option<String>,

    /// The default zoom level.
    #[serde(default)]
    pub interval: CalendarInterval,

    /// Number of days per grid row.
    #[serde(default = "default_week_size")]
    pub week_size: usize,
}

const fn default_week_size() -> usize {
    7
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            date_field: None,
            end_date_field: None,
            interval: CalendarInterval::default(),
            week_size: default_week_size(),
        }
    }
}
