// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end rendering note records as a board or a calendar.

mod cli;
mod cmd_board;
mod cmd_calendar;
mod cmd_generate_completion;
mod config;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_board::CmdBoard;
pub use crate::cmd_calendar::CmdCalendar;
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
pub use crate::config::parse_config;
pub use crate::util::ArgOutputFormat;
