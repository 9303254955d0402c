use std::io::{self, Write};

use itertools::Itertools;

use crate::{error::CountError, recursive::SEPARATOR};

/// Loop-based counterpart of [`crate::count_backward`]; output is identical.
pub fn count_backward<W: Write + ?Sized>(x: i64, out: &mut W) -> io::Result<()> {
    if x <= 1 {
        return write!(out, "{x}");
    }
    write!(out, "{}", (1..=x).rev().format(SEPARATOR))
}

/// Loop-based counterpart of [`crate::count_forward`]; output is identical.
pub fn count_forward<W: Write + ?Sized>(x: i64, out: &mut W) -> Result<(), CountError> {
    if x < 1 {
        return Err(CountError::InvalidRange { value: x });
    }
    write!(out, "{}", (1..=x).format(SEPARATOR))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recursive;

    #[test]
    fn agrees_with_recursive_counting() {
        for x in -3..=60i64 {
            let (mut rec, mut iter) = (Vec::new(), Vec::new());
            recursive::count_backward(x, &mut rec).unwrap();
            count_backward(x, &mut iter).unwrap();
            assert_eq!(rec, iter, "backward({x})");

            let (mut rec, mut iter) = (Vec::new(), Vec::new());
            let rec_result = recursive::count_forward(x, &mut rec);
            let iter_result = count_forward(x, &mut iter);
            assert_eq!(rec_result.is_ok(), iter_result.is_ok(), "forward({x})");
            assert_eq!(rec, iter, "forward({x})");
        }
    }

    #[test]
    fn handles_inputs_too_deep_to_recurse() {
        let mut buf = Vec::new();
        count_forward(1_000_000, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("1, 2, 3, "));
        assert!(text.ends_with(", 999999, 1000000"));
    }
}
