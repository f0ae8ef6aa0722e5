// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, path::PathBuf};

use boardcal_core::{Board, Config, DataFieldType, Record, group_records_by_field};
use clap::{ArgMatches, Command, arg};
use colored::Colorize;

use crate::util::{ArgOutputFormat, arg_records, default_field, load_records};

#[derive(Debug, Clone)]
pub struct CmdBoard {
    pub records: PathBuf,
    pub field: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdBoard {
    pub const NAME: &str = "board";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("b")
            .about("Group records into board columns by the value of a field")
            .arg(arg_records())
            .arg(arg!(-f --field <FIELD> "The field whose values name the columns"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            records: matches
                .get_one::<PathBuf>("records")
                .cloned()
                .unwrap_or_default(),
            field: matches.get_one::<String>("field").cloned(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "grouping records into a board...");
        let frame = load_records(&self.records).await?;

        let field = self
            .field
            .or_else(|| config.board.field.clone())
            .or_else(|| default_field(&frame, DataFieldType::String));

        let catalog = config.catalog();
        let board = group_records_by_field(&frame.records, field.as_deref(), &catalog);

        let mut stdout = io::stdout().lock();
        match self.output_format {
            ArgOutputFormat::Json => write_json(&mut stdout, field.as_deref(), &board)?,
            ArgOutputFormat::Table => write_table(&mut stdout, &board)?,
        }
        Ok(())
    }
}

#[derive(Debug, serde::Serialize)]
struct BoardJson<'a> {
    field: Option<&'a str>,
    columns: Vec<ColumnJson<'a>>,
}

#[derive(Debug, serde::Serialize)]
struct ColumnJson<'a> {
    label: &'a str,
    records: Vec<&'a str>,
}

fn write_json<R: Record>(
    w: &mut impl io::Write,
    field: Option<&str>,
    board: &Board<'_, R>,
) -> Result<(), Box<dyn Error>> {
    let columns = board
        .labels_sorted()
        .into_iter()
        .map(|label| ColumnJson {
            label,
            records: board
                .get(label)
                .unwrap_or_default()
                .iter()
                .map(|r| r.id())
                .collect(),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *w, &BoardJson { field, columns })?;
    writeln!(w)?;
    Ok(())
}

fn write_table<R: Record>(w: &mut impl io::Write, board: &Board<'_, R>) -> io::Result<()> {
    for (i, label) in board.labels_sorted().into_iter().enumerate() {
        let records = board.get(label).unwrap_or_default();
        if i > 0 {
            writeln!(w)?;
        }

        let header = label.bold();
        let header = if label == board.no_status_label() {
            header.dimmed()
        } else {
            header
        };
        writeln!(w, "{} ({})", header, records.len())?;
        for record in records {
            writeln!(w, "  {}", record.id())?;
        }
    }
    Ok(())
}
