//! Java runtime version detection and `jdeps --multi-release` value lookup.

pub mod backend;
pub mod utils;

pub use backend::java::{
    EnvProperties, JavaVersionHelper, StaticProperties, SystemProperties, Version,
    needs_multi_release_version, resolve_with_version,
};
pub use backend::jdeps::{MULTI_RELEASE_ARGUMENT, extract_multi_release};
pub use backend::utils::HelperConfig;
pub use utils::{Error, Log, LogFacade, LogLevel, MemoryLog, NoopLog, Result};
