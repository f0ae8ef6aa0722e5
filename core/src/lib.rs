// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Grouping and date-interval arithmetic backing board and calendar views of note records.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

mod board;
mod calendar;
mod config;
mod dataframe;
mod error;
mod i18n;
mod record;

pub use crate::board::{Board, group_records_by_field, unique_values};
pub use crate::calendar::{
    CalendarInterval, CalendarView, DateInterval, DayMap, add_interval, chunk_dates,
    compute_date_interval, day_key, end_of_iso_week, generate_dates, generate_title,
    group_records_by_date, is_calendar_interval, start_of_iso_week, subtract_interval,
};
pub use crate::config::{APP_NAME, BoardConfig, CalendarConfig, Config};
pub use crate::dataframe::{DataField, DataFrame};
pub use crate::error::Error;
pub use crate::i18n::{
    Catalog, DateFormat, MessageId, MonthStyle, Param, ParamValue, Translator,
};
pub use crate::record::{DataFieldType, DataRecord, DataValue, Record};
