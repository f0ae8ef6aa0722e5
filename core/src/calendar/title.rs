// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::calendar::DateInterval;
use crate::i18n::{DateFormat, MessageId, Param, Translator};

/// The human-readable title of a calendar window.
///
/// A single day reads as a long date, a range within one year shows the year
/// once, and a range across years spells out both dates in full.
pub fn generate_title(interval: &DateInterval, translator: &impl Translator) -> String {
    let DateInterval { start, end } = *interval;

    if start == end {
        let params = [Param::date("value", start, DateFormat::LONG)];
        return translator.translate(MessageId::CalendarDate, &params);
    }

    let params = if start.year() == end.year() {
        [
            Param::date("from", start, DateFormat::MONTH_DAY),
            Param::date("to", end, DateFormat::MONTH_DAY),
            Param::text("en_separator", ", "),
            Param::date("custom_year", start, DateFormat::YEAR),
        ]
    } else {
        [
            Param::date("from", start, DateFormat::MEDIUM),
            Param::date("to", end, DateFormat::MEDIUM),
            Param::text("en_separator", ""),
            Param::text("custom_year", ""),
        ]
    };
    translator.translate(MessageId::CalendarInterval, &params)
}
