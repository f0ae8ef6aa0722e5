// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, path::PathBuf};

use boardcal_core::{
    CalendarInterval, CalendarView, Config, DataFieldType, DateInterval, DayMap, Record,
    Translator, group_records_by_date,
};
use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use jiff::{Zoned, civil::Date};

use crate::util::{ArgOutputFormat, arg_records, default_field, load_records, parse_anchor};

#[derive(Debug, Clone)]
pub struct CmdCalendar {
    pub records: PathBuf,
    pub date_field: Option<String>,
    pub end_date_field: Option<String>,
    pub interval: Option<CalendarInterval>,
    pub anchor: Option<Date>,
    pub output_format: ArgOutputFormat,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("c")
            .about("Lay records out on the days of a calendar")
            .arg(arg_records())
            .arg(arg!(-d --"date-field" <FIELD> "The field holding the start date of a record"))
            .arg(arg!(-e --"end-date-field" <FIELD> "The field holding the end date of a record"))
            .arg(
                arg!(-i --interval <INTERVAL> "The span of days to show")
                    .value_parser(value_parser!(CalendarInterval)),
            )
            .arg(
                arg!(-a --anchor <DATE> "The date to show, YYYY-MM-DD or today")
                    .value_parser(parse_anchor),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            records: matches
                .get_one::<PathBuf>("records")
                .cloned()
                .unwrap_or_default(),
            date_field: matches.get_one::<String>("date-field").cloned(),
            end_date_field: matches.get_one::<String>("end-date-field").cloned(),
            interval: matches.get_one::<CalendarInterval>("interval").copied(),
            anchor: matches.get_one::<Date>("anchor").copied(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "laying records out on a calendar...");
        let frame = load_records(&self.records).await?;

        let date_field = self
            .date_field
            .or_else(|| config.calendar.date_field.clone())
            .or_else(|| default_field(&frame, DataFieldType::Date))
            .ok_or("No date field found in the records, specify one with --date-field")?;
        let end_date_field = self
            .end_date_field
            .or_else(|| config.calendar.end_date_field.clone());

        let interval = self.interval.unwrap_or(config.calendar.interval);
        let anchor = self.anchor.unwrap_or_else(|| Zoned::now().date());
        let view = CalendarView::new(anchor, interval);

        let days = group_records_by_date(&frame.records, &date_field, end_date_field.as_deref());
        let sheet = Sheet::new(&view, &days, config.calendar.week_size, &config.catalog())?;

        let mut stdout = io::stdout().lock();
        match self.output_format {
            ArgOutputFormat::Json => sheet.write_json(&mut stdout)?,
            ArgOutputFormat::Table => sheet.write_table(&mut stdout)?,
        }
        Ok(())
    }
}

/// A rendered calendar window.
#[derive(Debug, serde::Serialize)]
struct Sheet<'a> {
    title: String,
    interval: CalendarInterval,
    anchor: Date,
    window: DateInterval,
    weeks: Vec<Vec<Day<'a>>>,
}

#[derive(Debug, serde::Serialize)]
struct Day<'a> {
    date: Date,
    records: Vec<&'a str>,
}

impl<'a> Sheet<'a> {
    fn new<R: Record>(
        view: &CalendarView,
        days: &'a DayMap<'a, R>,
        week_size: usize,
        translator: &impl Translator,
    ) -> Result<Self, Box<dyn Error>> {
        let weeks = view
            .cells(days, week_size)?
            .into_iter()
            .map(|week| {
                week.into_iter()
                    .map(|(date, records)| Day {
                        date,
                        records: records.iter().map(|r| r.id()).collect(),
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            title: view.title(translator),
            interval: view.interval(),
            anchor: view.anchor(),
            window: view.window(),
            weeks,
        })
    }

    fn write_json(&self, w: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        serde_json::to_writer_pretty(&mut *w, self)?;
        writeln!(w)?;
        Ok(())
    }

    fn write_table(&self, w: &mut impl io::Write) -> io::Result<()> {
        writeln!(w, "{}", self.title.bold())?;
        for week in &self.weeks {
            let Some(first) = week.first() else {
                continue;
            };

            let cells: Vec<String> = week
                .iter()
                .map(|day| {
                    let cell = format!("{:>3}", day.date.day());
                    if day.date == self.anchor {
                        cell.reversed().to_string()
                    } else if !day.records.is_empty() {
                        cell.bold().to_string()
                    } else if day.date.month() != self.anchor.month() {
                        cell.dimmed().to_string()
                    } else {
                        cell
                    }
                })
                .collect();
            writeln!(w, "{} {}", first.date.strftime("%b %d").to_string().cyan(), cells.join(" "))?;

            for day in week {
                for id in &day.records {
                    writeln!(w, "  {}  {}", day.date, id)?;
                }
            }
        }
        Ok(())
    }
}
