//! Command-line parsing and execution

use std::io::{BufRead, Write};
use std::process::ExitCode;

use anyhow::{bail, Context};
use jarvi_core::{OtpError, OtpService};
use thiserror::Error;

pub const USAGE: &str = "\
Usage:
  jarvi-otp derive <token>
  jarvi-otp verify <token> <code>
  jarvi-otp help

Pass `-` as <token> to read it from the first line of stdin.

Exit status: 0 on success or a matching code, 1 for a wrong code,
2 for usage, configuration or token errors.";

/// Argument errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing command")]
    MissingCommand,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("missing argument <{0}>")]
    MissingArgument(&'static str),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Derive { token: String },
    Verify { token: String, code: String },
    Help,
}

impl Command {
    /// Parse arguments, excluding the program name
    pub fn parse<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let name = args.next().ok_or(UsageError::MissingCommand)?;

        let command = match name.as_str() {
            "derive" => Command::Derive {
                token: args.next().ok_or(UsageError::MissingArgument("token"))?,
            },
            "verify" => Command::Verify {
                token: args.next().ok_or(UsageError::MissingArgument("token"))?,
                code: args.next().ok_or(UsageError::MissingArgument("code"))?,
            },
            "help" | "-h" | "--help" => Command::Help,
            _ => return Err(UsageError::UnknownCommand(name)),
        };

        match args.next() {
            Some(extra) => Err(UsageError::UnexpectedArgument(extra)),
            None => Ok(command),
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Command::Derive { token } | Command::Verify { token, .. } => Some(token.as_str()),
            Command::Help => None,
        }
    }

    pub fn with_token(self, token: String) -> Self {
        match self {
            Command::Derive { .. } => Command::Derive { token },
            Command::Verify { code, .. } => Command::Verify { token, code },
            Command::Help => Command::Help,
        }
    }
}

/// Read a token from the first line of `reader`, without its line ending
pub fn read_token<R: BufRead>(mut reader: R) -> anyhow::Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read token from stdin")?;

    let token = line.trim_end_matches(&['\r', '\n'][..]);
    if token.is_empty() {
        bail!("no token on stdin");
    }
    Ok(token.to_string())
}

/// Result of a command that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Mismatch,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Mismatch => ExitCode::from(1),
        }
    }
}

/// Run a parsed command, writing its result to `out`.
///
/// Token policy violations are errors; a wrong code is a normal
/// `invalid` result with exit status 1.
pub fn execute<W: Write>(service: &OtpService, command: &Command, out: &mut W) -> anyhow::Result<Outcome> {
    match command {
        Command::Derive { token } => {
            let code = service.issue_code(token).context("cannot derive code")?;
            writeln!(out, "{}", code)?;
            Ok(Outcome::Success)
        }
        Command::Verify { token, code } => match service.check_code(token, code) {
            Ok(()) => {
                writeln!(out, "valid")?;
                Ok(Outcome::Success)
            }
            Err(OtpError::InvalidOrExpiredCode) => {
                writeln!(out, "invalid")?;
                Ok(Outcome::Mismatch)
            }
            Err(e) => Err(e).context("cannot verify code"),
        },
        Command::Help => {
            writeln!(out, "{}", USAGE)?;
            Ok(Outcome::Success)
        }
    }
}
