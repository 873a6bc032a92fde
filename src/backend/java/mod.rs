//! Java runtime version utilities.
//!
//! Version parsing, the system property it comes from,
//! and the multi-release decision built on top of both.

/// Multi-release threshold check and resolution.
pub mod helper;
/// Where system properties are read from.
pub mod properties;
/// Version triple and parser.
pub mod version;

pub use helper::{JavaVersionHelper, Thresholds, needs_multi_release_version, resolve_with_version};
pub use properties::{EnvProperties, StaticProperties, SystemProperties};
pub use version::{Version, parse_java_version};
