//! Custom utilities.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
pub use logging::{Log, LogFacade, LogLevel, MemoryLog, NoopLog};
