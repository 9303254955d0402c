mod config;
mod counter;
mod error;
pub mod iterative;
mod recursive;

pub use config::{ConfigError, TallyConfig, DEFAULT_CONFIG_FILE};
pub use counter::{Counter, Strategy};
pub use error::CountError;
pub use recursive::{count_backward, count_forward, SEPARATOR};
