use std::{
    io::{self, Write},
    str::FromStr,
};

use log::{debug, warn};
use serde::Deserialize;

use crate::{config::TallyConfig, error::CountError, iterative, recursive};

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Recursive,
    Iterative,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive" => Ok(Strategy::Recursive),
            "iterative" => Ok(Strategy::Iterative),
            _ => Err(format!("unknown strategy `{s}`, expected `recursive` or `iterative`")),
        }
    }
}

/// Writes counts using the configured strategy, enforcing the optional recursion depth bound.
///
/// `Counter::default()` recurses without a bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    strategy: Strategy,
    max_depth: Option<u64>,
}

impl Counter {
    pub fn new(strategy: Strategy, max_depth: Option<u64>) -> Self {
        Self {
            strategy,
            max_depth,
        }
    }

    pub fn from_config(config: &TallyConfig) -> Self {
        Self::new(config.strategy, config.max_depth)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn max_depth(&self) -> Option<u64> {
        self.max_depth
    }

    pub fn backward<W: Write + ?Sized>(&self, x: i64, out: &mut W) -> Result<(), CountError> {
        debug!("counting backward from {x} ({:?})", self.strategy);
        match self.strategy {
            Strategy::Recursive => {
                self.check_depth(backward_depth(x))?;
                recursive::count_backward(x, out)?;
            }
            Strategy::Iterative => iterative::count_backward(x, out)?,
        }
        Ok(())
    }

    pub fn forward<W: Write + ?Sized>(&self, x: i64, out: &mut W) -> Result<(), CountError> {
        debug!("counting forward to {x} ({:?})", self.strategy);
        if x < 1 {
            warn!("refusing to count forward to {x}");
            return Err(CountError::InvalidRange { value: x });
        }
        match self.strategy {
            Strategy::Recursive => {
                self.check_depth(x.unsigned_abs())?;
                recursive::count_forward(x, out)
            }
            Strategy::Iterative => iterative::count_forward(x, out),
        }
    }

    pub fn backward_string(&self, x: i64) -> Result<String, CountError> {
        self.render(|counter, buf| counter.backward(x, buf))
    }

    pub fn forward_string(&self, x: i64) -> Result<String, CountError> {
        self.render(|counter, buf| counter.forward(x, buf))
    }

    fn render(
        &self,
        count: impl FnOnce(&Self, &mut Vec<u8>) -> Result<(), CountError>,
    ) -> Result<String, CountError> {
        let mut buf = Vec::new();
        count(self, &mut buf)?;
        String::from_utf8(buf)
            .map_err(|err| CountError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
    }

    fn check_depth(&self, required: u64) -> Result<(), CountError> {
        match self.max_depth {
            Some(limit) if required > limit => {
                warn!("recursion depth {required} exceeds limit {limit}");
                Err(CountError::DepthExceeded { required, limit })
            }
            _ => Ok(()),
        }
    }
}

/// Number of frames [`recursive::count_backward`] uses for `x`.
fn backward_depth(x: i64) -> u64 {
    if x <= 1 {
        1
    } else {
        x.unsigned_abs()
    }
}
