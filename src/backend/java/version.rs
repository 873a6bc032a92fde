//! Java version triple and its parser.

use regex::Regex;
use std::{fmt, sync::LazyLock};

use crate::utils::{Error, Log, Result};

pub const VERSION_REGEXP: &str = r"^(\d+)\.(\d+)\.(\d+).*";

// VERSION_REGEXP as a JVM reads it: ASCII digits only, `.` stops at every line
// terminator, and the whole string has to match.
const VERSION_PATTERN_SOURCE: &str =
    r"^([0-9]+)\.([0-9]+)\.([0-9]+)[^\n\r\x{85}\x{2028}\x{2029}]*$";

static VERSION_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN_SOURCE).ok());

/// A `major.minor.patch` runtime version. Ordering is lexicographic over the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub const fn major(&self) -> u32 {
        self.major
    }

    pub const fn minor(&self) -> u32 {
        self.minor
    }

    pub const fn patch(&self) -> u32 {
        self.patch
    }

    /// Parses strings such as `17.0.2+8` or `11.0.11-ea`.
    ///
    /// Anything after the third component is ignored.
    pub fn parse(version_string: &str) -> Result<Self> {
        let captures = VERSION_PATTERN
            .as_ref()
            .and_then(|pattern| pattern.captures(version_string))
            .ok_or_else(|| Error::VersionFormat {
                input: version_string.to_string(),
                pattern: VERSION_REGEXP,
            })?;

        let component = |index: usize| -> Result<u32> {
            let group = captures.get(index).map_or("", |m| m.as_str());
            group.parse::<u32>().map_err(|e| Error::VersionComponent {
                input: version_string.to_string(),
                reason: format!("{e}: \"{group}\""),
            })
        };

        Ok(Self::new(component(1)?, component(2)?, component(3)?))
    }
}

impl From<(u32, u32, u32)> for Version {
    fn from((major, minor, patch): (u32, u32, u32)) -> Self {
        Self::new(major, minor, patch)
    }
}

impl From<Version> for semver::Version {
    fn from(version: Version) -> Self {
        Self::new(
            u64::from(version.major),
            u64::from(version.minor),
            u64::from(version.patch),
        )
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Parses a version string, reporting the outcome through `log`.
///
/// Format mismatches are logged as warnings, bad numbers as errors.
pub fn parse_java_version(version_string: &str, log: &dyn Log) -> Option<Version> {
    match Version::parse(version_string) {
        Ok(version) => {
            log.debug(&format!("parsed.version -> {version}"));
            Some(version)
        }
        Err(e) => {
            log.log(e.severity(), &e.to_string());
            None
        }
    }
}
