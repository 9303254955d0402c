use std::{error::Error, fmt, io};

/// Errors produced while writing a count to a sink.
#[derive(Debug)]
pub enum CountError {
    /// Counting forward to a value below 1 never reaches the base case.
    InvalidRange { value: i64 },
    /// The recursive strategy would need more frames than the configured bound.
    DepthExceeded { required: u64, limit: u64 },
    Io(io::Error),
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountError::InvalidRange { value } => write!(
                f,
                "invalid range: cannot count forward to {value}, the value must be at least 1"
            ),
            CountError::DepthExceeded { required, limit } => write!(
                f,
                "recursion depth {required} exceeds the configured maximum of {limit}"
            ),
            CountError::Io(_) => write!(f, "failed to write the count"),
        }
    }
}

impl Error for CountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CountError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CountError {
    fn from(err: io::Error) -> Self {
        CountError::Io(err)
    }
}
