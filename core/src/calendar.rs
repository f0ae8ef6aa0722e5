// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod days;
mod grid;
mod interval;
mod title;
mod view;

pub use days::{DayMap, day_key, group_records_by_date};
pub use grid::{chunk_dates, generate_dates};
pub use interval::{
    CalendarInterval, DateInterval, add_interval, compute_date_interval, end_of_iso_week,
    is_calendar_interval, start_of_iso_week, subtract_interval,
};
pub use title::generate_title;
pub use view::CalendarView;
