//! Command handling for the `zeph` binary.

use crate::build_info::{BUILD_COMMIT, BUILD_DATE};
use crate::config::{ConfigGroup, GameConfig};
use crate::error::CliError;
use std::io::Write;

const HELP: &str = "\
Zeph - RPG tuning table

Usage: zeph [command]

Commands:
  show        Print every constant grouped by purpose (default)
  get <NAME>  Print a single constant, e.g. 'zeph get tileSize'
  json        Print the table as JSON
  --version   Show version information
  --help      Show this help message
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Get(String),
    Json,
    Version,
    Help,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return Ok(Command::Show);
    };

    let command = match first.as_ref() {
        "show" => Command::Show,
        "get" => match args.next() {
            Some(name) => Command::Get(name.as_ref().to_string()),
            None => return Err(CliError::MissingArgument("NAME")),
        },
        "json" => Command::Json,
        "--version" | "-v" => Command::Version,
        "--help" | "-h" => Command::Help,
        other => return Err(CliError::UnknownCommand(other.to_string())),
    };

    match args.next() {
        Some(extra) => Err(CliError::UnexpectedArgument(extra.as_ref().to_string())),
        None => Ok(command),
    }
}

pub fn run<W: Write>(command: &Command, out: &mut W) -> Result<(), CliError> {
    tracing::debug!(?command, "running command");

    match command {
        Command::Show => write_table(out)?,
        Command::Get(name) => {
            let Some(value) = GameConfig::lookup(name) else {
                return Err(CliError::UnknownKey(name.clone()));
            };
            writeln!(out, "{}", value)?;
        }
        Command::Json => writeln!(out, "{}", GameConfig::to_json()?)?,
        Command::Version => writeln!(out, "zeph {} ({})", BUILD_DATE, BUILD_COMMIT)?,
        Command::Help => out.write_all(HELP.as_bytes())?,
    }
    out.flush()?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W) -> std::io::Result<()> {
    let width = GameConfig::entries()
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(0);

    for (i, group) in ConfigGroup::all().into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "[{}]", group.name())?;
        for entry in GameConfig::group_entries(group) {
            writeln!(out, "  {:<width$}  {}", entry.name, entry.value)?;
        }
    }
    Ok(())
}
