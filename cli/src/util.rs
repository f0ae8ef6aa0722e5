// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::Path};

use boardcal_core::{DataFieldType, DataFrame};
use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};
use jiff::{Zoned, civil::Date};
use tokio::io::AsyncReadExt;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

pub fn arg_records() -> Arg {
    arg!(records: <RECORDS> "Path to a JSON file holding an array of records, `-` for stdin")
        .value_parser(value_parser!(std::path::PathBuf))
        .value_hint(ValueHint::FilePath)
}

/// Reads records from a JSON file, or from stdin if the path is `-`.
#[tracing::instrument]
pub async fn load_records(path: &Path) -> Result<DataFrame, Box<dyn Error>> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read records at {}: {}", path.display(), e))?
    };

    let frame = DataFrame::from_json(&json)?;
    tracing::debug!(
        records = frame.records.len(),
        fields = frame.fields.len(),
        "records loaded"
    );
    Ok(frame)
}

/// The first field of the given kind, used when no field is configured.
pub fn default_field(frame: &DataFrame, kind: DataFieldType) -> Option<String> {
    let field = frame.fields_of_kind(kind).next().map(|f| f.name.clone());
    tracing::debug!(?kind, ?field, "picked default field");
    field
}

/// Parses a calendar anchor, either `YYYY-MM-DD` or `today`.
pub fn parse_anchor(s: &str) -> Result<Date, String> {
    if s.eq_ignore_ascii_case("today") {
        Ok(Zoned::now().date())
    } else {
        s.parse()
            .map_err(|e| format!("Invalid date '{s}', expected YYYY-MM-DD or today: {e}"))
    }
}
