// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io,
    path::{Path, PathBuf},
};

use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use clap_complete::{generate, generate_to};
use clap_complete_nushell::Nushell;

use crate::Cli;

/// Prints or writes the completion script of the `boardcal` command.
#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
    pub output: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell generator to use")
                    .value_parser(value_parser!(Shell)),
            )
            .arg(
                arg!(-o --output <DIR> "Write the script into this directory instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::DirPath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches
                .get_one::<Shell>("shell")
                .copied()
                .unwrap_or(Shell::Bash),
            output: matches.get_one::<PathBuf>("output").cloned(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        match &self.output {
            Some(dir) => {
                let path = self.shell.write_to(dir)?;
                tracing::info!(path = %path.display(), "completion script written");
            }
            None => self.shell.generate(&mut io::stdout()),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// Prints the completion script to the writer.
    pub fn generate(self, buf: &mut impl io::Write) {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_owned();
        match self.builtin() {
            Some(shell) => generate(shell, &mut cmd, name, buf),
            None => generate(Nushell, &mut cmd, name, buf),
        }
    }

    /// Writes the completion script into `dir`, returning the file path.
    pub fn write_to(self, dir: &Path) -> io::Result<PathBuf> {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_owned();
        match self.builtin() {
            Some(shell) => generate_to(shell, &mut cmd, name, dir),
            None => generate_to(Nushell, &mut cmd, name, dir),
        }
    }

    /// The generator shipped with `clap_complete`, `None` for Nushell.
    fn builtin(self) -> Option<clap_complete::Shell> {
        use clap_complete::Shell as ClapShell;
        match self {
            Shell::Bash => Some(ClapShell::Bash),
            Shell::Elvish => Some(ClapShell::Elvish),
            Shell::Fish => Some(ClapShell::Fish),
            Shell::PowerShell => Some(ClapShell::PowerShell),
            Shell::Zsh => Some(ClapShell::Zsh),
            Shell::Nushell => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn parse(args: &[&str]) -> CmdGenerateCompletion {
        let matches = Cli::command()
            .try_get_matches_from(args)
            .unwrap_or_else(|e| panic!("Failed to parse {args:?}: {e}"));
        let sub_matches = matches.subcommand_matches("generate-completion").unwrap();
        CmdGenerateCompletion::from(sub_matches)
    }

    #[test]
    fn test_generates_completion_for_every_shell() {
        for shell in Shell::value_variants() {
            let name = shell.to_possible_value().unwrap().get_name().to_owned();
            let parsed = parse(&["boardcal", "generate-completion", &name]);
            assert_eq!(parsed.shell, *shell);
            assert_eq!(parsed.output, None);

            let mut output = vec![];
            parsed.shell.generate(&mut output);
            let script = String::from_utf8(output).unwrap();
            assert!(script.contains("boardcal"), "shell = {name}");
        }
    }

    #[test]
    fn test_writes_completion_into_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_str().unwrap();
        let parsed = parse(&["boardcal", "generate-completion", "fish", "-o", dir]);
        assert_eq!(parsed.output.as_deref(), Some(temp_dir.path()));

        let path = parsed.shell.write_to(temp_dir.path()).unwrap();
        assert!(path.starts_with(temp_dir.path()));
        assert!(std::fs::read_to_string(path).unwrap().contains("boardcal"));
    }

    #[test]
    fn test_rejects_unknown_shell() {
        let result = Cli::command().try_get_matches_from(["boardcal", "generate-completion", "cmd"]);
        assert!(result.is_err());
    }
}
