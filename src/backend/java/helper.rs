//! Decides whether `jdeps` needs an explicit `--multi-release` version.
//!
//! Newer runtimes (JDK 14+, and 11.0.11+ on the 11 line) changed how `jdeps`
//! treats multi-release JARs, so for those the version passed by the user
//! has to be picked out of the extra arguments.

use semver::{Comparator, Op, Prerelease, VersionReq};

use super::{
    properties::{EnvProperties, JAVA_VERSION_PROPERTY_NAME, SystemProperties},
    version::{Version, parse_java_version},
};
use crate::backend::jdeps::arguments::{MULTI_RELEASE_ARGUMENT, extract_version};
use crate::backend::utils::config::HelperConfig;
use crate::utils::{Log, Result, logging::or_noop};

/// Runtime versions that need the `--multi-release` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thresholds {
    requirements: Vec<VersionReq>,
}

impl Default for Thresholds {
    /// `>=14` or `~11.0.11`.
    fn default() -> Self {
        let comparator = |op, major, minor, patch| Comparator {
            op,
            major,
            minor,
            patch,
            pre: Prerelease::EMPTY,
        };

        Self {
            requirements: vec![
                VersionReq {
                    comparators: vec![comparator(Op::GreaterEq, 14, None, None)],
                },
                VersionReq {
                    comparators: vec![comparator(Op::Tilde, 11, Some(0), Some(11))],
                },
            ],
        }
    }
}

impl Thresholds {
    pub fn new(requirements: Vec<VersionReq>) -> Self {
        Self { requirements }
    }

    pub fn from_config(config: &HelperConfig) -> Result<Self> {
        config.version_requirements().map(Self::new)
    }

    /// First requirement `version` satisfies, if any.
    pub fn matching(&self, version: Version) -> Option<&VersionReq> {
        let version = semver::Version::from(version);
        self.requirements.iter().find(|req| req.matches(&version))
    }
}

/// Renders `>=14` as `14+` and `~11.0.11` as `11.0.11+`; other requirements as written.
fn describe(req: &VersionReq) -> String {
    match req.comparators.as_slice() {
        [c] if matches!(c.op, Op::GreaterEq | Op::Tilde) => {
            let mut version = c.major.to_string();
            for part in [c.minor, c.patch].into_iter().flatten() {
                version.push_str(&format!(".{part}"));
            }
            format!("{version}+")
        }
        _ => req.to_string(),
    }
}

/// Resolves the Java version and the `--multi-release` value for one call chain.
pub struct JavaVersionHelper<'a> {
    log: Option<&'a dyn Log>,
    properties: &'a dyn SystemProperties,
    property_name: String,
    flag: String,
    thresholds: Thresholds,
}

static ENV_PROPERTIES: EnvProperties = EnvProperties;

impl Default for JavaVersionHelper<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> JavaVersionHelper<'a> {
    /// Helper without a logger, reading `java.version` from the environment.
    pub fn new() -> Self {
        Self {
            log: None,
            properties: &ENV_PROPERTIES,
            property_name: JAVA_VERSION_PROPERTY_NAME.to_string(),
            flag: MULTI_RELEASE_ARGUMENT.to_string(),
            thresholds: Thresholds::default(),
        }
    }

    pub fn with_log(mut self, log: &'a dyn Log) -> Self {
        self.log = Some(log);
        self
    }

    pub fn with_properties(mut self, properties: &'a dyn SystemProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Applies property name, flag and thresholds from `config`.
    ///
    /// `config.java_version` is not read here; callers wire it in as a
    /// property source.
    pub fn with_config(mut self, config: &HelperConfig) -> Result<Self> {
        config.validate()?;
        self.thresholds = Thresholds::from_config(config)?;
        self.property_name = config.property_name.clone();
        self.flag = config.flag.clone();
        Ok(self)
    }

    fn log(&self) -> &dyn Log {
        or_noop(self.log)
    }

    /// Reads and parses the runtime version property.
    pub fn java_version(&self) -> Option<Version> {
        let Some(version_string) = self.properties.property(&self.property_name) else {
            self.log()
                .warn(&format!("{} is not set", self.property_name));
            return None;
        };
        self.log()
            .debug(&format!("{} -> {version_string}", self.property_name));

        self.parse_version(&version_string)
    }

    pub fn parse_version(&self, version_string: &str) -> Option<Version> {
        parse_java_version(version_string, self.log())
    }

    pub fn requires_release_version(&self, version: Version) -> bool {
        match self.thresholds.matching(version) {
            Some(req) => {
                self.log().debug(&format!("Detected JDK {}", describe(req)));
                true
            }
            None => false,
        }
    }

    /// True when the running JDK needs the `--multi-release` value; false if it
    /// does not, or if its version could not be read.
    pub fn resolve_with_version_if_multi_release(&self) -> bool {
        self.java_version()
            .is_some_and(|version| self.requires_release_version(version))
    }

    pub fn extract_version<S: AsRef<str>>(&self, args: &[S]) -> Option<i32> {
        extract_version(args, &self.flag, self.log())
    }

    /// Returns the `--multi-release` value from `args` when the runtime needs it.
    pub fn resolve_with_version<S: AsRef<str>>(&self, args: &[S]) -> Option<i32> {
        if !self.resolve_with_version_if_multi_release() {
            self.log().debug(&format!(
                "Java version does not need to check if {} is set",
                self.flag
            ));
            return None;
        }

        let result = self.extract_version(args);
        match result {
            Some(version) => self.log().debug(&format!(
                "Resolve with version: multi release is set to {version}"
            )),
            None => self
                .log()
                .debug("Resolve without version: multi release not set"),
        }
        result
    }
}

/// Threshold check for an already parsed version; `None` counts as "no".
pub fn needs_multi_release_version(version: Option<Version>) -> bool {
    let thresholds = Thresholds::default();
    version.is_some_and(|version| thresholds.matching(version).is_some())
}

/// Resolves against the environment's `java.version` with the default settings.
pub fn resolve_with_version<S: AsRef<str>>(args: &[S], log: Option<&dyn Log>) -> Option<i32> {
    let mut helper = JavaVersionHelper::new();
    helper.log = log;
    helper.resolve_with_version(args)
}
