// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::Error;
use crate::calendar::{
    CalendarInterval, DateInterval, DayMap, add_interval, chunk_dates, compute_date_interval,
    day_key, generate_dates, generate_title, subtract_interval,
};
use crate::i18n::Translator;

/// The visible window of a calendar around an anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    anchor: Date,
    interval: CalendarInterval,
    window: DateInterval,
}

impl CalendarView {
    /// Creates the view showing `anchor` at the given zoom level.
    pub fn new(anchor: Date, interval: CalendarInterval) -> Self {
        Self {
            anchor,
            interval,
            window: compute_date_interval(anchor, interval),
        }
    }

    /// The anchor date.
    pub fn anchor(&self) -> Date {
        self.anchor
    }

    /// The zoom level.
    pub fn interval(&self) -> CalendarInterval {
        self.interval
    }

    /// The days on screen.
    pub fn window(&self) -> DateInterval {
        self.window
    }

    /// The view one step later.
    #[must_use]
    pub fn next(&self) -> Self {
        Self::new(add_interval(self.anchor, self.interval), self.interval)
    }

    /// The view one step earlier.
    #[must_use]
    pub fn previous(&self) -> Self {
        Self::new(subtract_interval(self.anchor, self.interval), self.interval)
    }

    /// The title of the window.
    pub fn title(&self, translator: &impl Translator) -> String {
        generate_title(&self.window, translator)
    }

    /// Every day on screen.
    pub fn dates(&self) -> Vec<Date> {
        generate_dates(&self.window)
    }

    /// Days on screen laid out in rows of `size`, usually 7 for weeks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `size` is zero.
    pub fn rows(&self, size: usize) -> Result<Vec<Vec<Date>>, Error> {
        chunk_dates(&self.dates(), size)
    }

    /// Pairs every day on screen with the records filed under it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `size` is zero.
    pub fn cells<'m, 'a, R>(
        &self,
        days: &'m DayMap<'a, R>,
        size: usize,
    ) -> Result<Vec<Vec<(Date, &'m [&'a R])>>, Error> {
        let cells: Vec<_> = self
            .dates()
            .into_iter()
            .map(|date| {
                let records = days.get(&day_key(date)).map(Vec::as_slice);
                (date, records.unwrap_or_default())
            })
            .collect();
        chunk_dates(&cells, size)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::calendar::group_records_by_date;
    use crate::i18n::Catalog;
    use crate::record::{DataRecord, Record};

    #[test]
    fn navigates_by_interval() {
        let view = CalendarView::new(date(2024, 3, 15), CalendarInterval::Month);
        assert_eq!(view.next().anchor(), date(2024, 4, 15));
        assert_eq!(view.previous().anchor(), date(2024, 2, 15));
        assert_eq!(view.next().previous(), view);

        let view = CalendarView::new(date(2024, 3, 15), CalendarInterval::ThreeDays);
        assert_eq!(view.next().window().start, date(2024, 3, 16));
    }

    #[test]
    fn titles_the_window() {
        let catalog = Catalog::english();
        let view = CalendarView::new(date(2024, 3, 15), CalendarInterval::Week);
        assert_eq!(view.title(&catalog), "Mar 11 - Mar 17, 2024");

        let view = CalendarView::new(date(2024, 3, 15), CalendarInterval::Day);
        assert_eq!(view.title(&catalog), "March 15, 2024");
    }

    #[test]
    fn lays_out_weeks() {
        let view = CalendarView::new(date(2024, 3, 15), CalendarInterval::TwoWeeks);
        let rows = view.rows(7).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], date(2024, 3, 11));
        assert_eq!(rows[1][6], date(2024, 3, 24));
        assert!(view.rows(0).is_err());
    }

    #[test]
    fn fills_cells_with_records() {
        let records = vec![
            DataRecord::new("a").with("due", "2024-03-12"),
            DataRecord::new("b").with("due", "2024-05-01"),
        ];
        let days = group_records_by_date(&records, "due", None);
        let view = CalendarView::new(date(2024, 3, 15), CalendarInterval::Week);
        let cells = view.cells(&days, 7).unwrap();

        let filled: Vec<_> = cells
            .iter()
            .flatten()
            .filter(|(_, records)| !records.is_empty())
            .map(|(date, records)| (*date, records[0].id()))
            .collect();
        assert_eq!(filled, [(date(2024, 3, 12), "a")]);
    }
}
