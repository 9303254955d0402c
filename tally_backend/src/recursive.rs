use std::io::{self, Write};

use crate::error::CountError;

pub const SEPARATOR: &str = ", ";

/// Writes `x, x - 1, ..., 1`. Any `x <= 1` is written on its own.
///
/// Each value is emitted before the recursive call, so the sequence comes out in the order the
/// calls are made.
pub fn count_backward<W: Write + ?Sized>(x: i64, out: &mut W) -> io::Result<()> {
    if x <= 1 {
        write!(out, "{x}")
    } else {
        write!(out, "{x}{SEPARATOR}")?;
        count_backward(x - 1, out)
    }
}

/// Writes `1, 2, ..., x`.
///
/// Values below 1 are rejected before recursing, since the base case `x == 1` is unreachable
/// from them.
pub fn count_forward<W: Write + ?Sized>(x: i64, out: &mut W) -> Result<(), CountError> {
    if x < 1 {
        return Err(CountError::InvalidRange { value: x });
    }
    count_forward_from_one(x, out)?;
    Ok(())
}

// Requires x >= 1.
fn count_forward_from_one<W: Write + ?Sized>(x: i64, out: &mut W) -> io::Result<()> {
    if x == 1 {
        write!(out, "{x}")
    } else {
        // Recurse first: the deepest frame writes 1, and each frame appends its own value as the
        // stack unwinds.
        count_forward_from_one(x - 1, out)?;
        write!(out, "{SEPARATOR}{x}")
    }
}
