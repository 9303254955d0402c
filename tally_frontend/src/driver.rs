use std::{
    error::Error,
    fmt,
    io::{self, BufRead, Write},
    num::ParseIntError,
};

use anyhow::{Context, Result};
use log::{debug, info};
use tally_backend::Counter;

pub const PROMPT: &str = "Type a number to count to: ";

#[derive(Debug)]
pub enum InputError {
    Missing,
    Malformed { text: String, source: ParseIntError },
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Missing => write!(f, "expected a number but the input was empty"),
            InputError::Malformed { text, .. } => write!(f, "`{text}` is not a valid integer"),
            InputError::Io(_) => write!(f, "failed to read standard input"),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputError::Missing => None,
            InputError::Malformed { source, .. } => Some(source),
            InputError::Io(err) => Some(err),
        }
    }
}

/// Reads the first whitespace-delimited token of the first non-blank line and parses it as a
/// decimal `i64`. Trailing tokens on that line are ignored.
pub fn read_number<R: BufRead>(input: R) -> Result<i64, InputError> {
    for line in input.lines() {
        let line = line.map_err(InputError::Io)?;
        if let Some(token) = line.split_whitespace().next() {
            return token.parse().map_err(|source| InputError::Malformed {
                text: token.to_string(),
                source,
            });
        }
    }
    Err(InputError::Missing)
}

/// Runs one prompt/count session: backward count, line break, forward count, line break.
///
/// When `number` is given the prompt is skipped and `input` is never read.
pub fn run_session<R: BufRead, W: Write>(
    number: Option<i64>,
    input: R,
    out: &mut W,
    counter: &Counter,
) -> Result<()> {
    let x = match number {
        Some(x) => x,
        None => {
            write!(out, "{PROMPT}")?;
            out.flush()?;
            match read_number(input) {
                Ok(x) => x,
                Err(err) => {
                    // End the prompt line so the error is reported on a line of its own.
                    writeln!(out)?;
                    out.flush()?;
                    return Err(err.into());
                }
            }
        }
    };
    info!("counting with x = {x}");

    counter.backward(x, out)?;
    writeln!(out)?;
    // The backward line stays visible even when the forward count is rejected.
    out.flush()?;

    counter.forward(x, out)?;
    writeln!(out)?;
    out.flush().context("failed to flush standard output")?;

    debug!("session finished");
    Ok(())
}
