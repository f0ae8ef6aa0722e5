// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Record set factories for integration tests.

use boardcal_core::{DataRecord, DataValue, MessageId, Param, Translator};

/// A translator answering every message with the same text.
#[derive(Debug, Clone, Copy)]
pub struct FixedTranslator(pub &'static str);

impl Translator for FixedTranslator {
    fn translate(&self, _id: MessageId, _params: &[Param]) -> String {
        self.0.to_owned()
    }
}

/// Notes of a small project, mixing statuses, missing values and dates.
#[must_use]
pub fn project_records() -> Vec<DataRecord> {
    vec![
        DataRecord::new("Projects/Draft plan.md")
            .with("status", "Done")
            .with("due", "2024-03-01"),
        DataRecord::new("Projects/Implement board.md")
            .with("status", "In progress")
            .with("due", "2024-03-10")
            .with("until", "2024-03-12"),
        DataRecord::new("Projects/Implement calendar.md")
            .with("status", "In progress")
            .with("due", "2024-03-11"),
        DataRecord::new("Projects/Release.md")
            .with("status", "Todo")
            .with("due", "2024-04-02"),
        DataRecord::new("Projects/Ideas.md"),
        DataRecord::new("Projects/Retro.md")
            .with("status", DataValue::List(vec!["Todo".into()]))
            .with("due", "soon"),
    ]
}

/// Notes of a sprint spanning the turn of the year.
#[must_use]
pub fn sprint_records() -> Vec<DataRecord> {
    vec![
        DataRecord::new("Sprint/Kickoff.md").with("start", "2023-12-27"),
        DataRecord::new("Sprint/Holiday.md")
            .with("start", "2023-12-30")
            .with("end", "2024-01-02"),
        DataRecord::new("Sprint/Review.md")
            .with("start", "2024-01-05T15:00:00")
            .with("end", "2024-01-05T16:00:00"),
        DataRecord::new("Sprint/Unscheduled.md").with("end", "2024-01-03"),
    ]
}
