use semver::VersionReq;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::backend::java::properties::JAVA_VERSION_PROPERTY_NAME;
use crate::backend::jdeps::arguments::MULTI_RELEASE_ARGUMENT;
use crate::utils::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelperConfig {
    pub property_name: String,
    pub flag: String,
    /// Runtime versions that need the flag value, as semver requirements.
    pub requirements: Vec<String>,
    /// Used instead of the system property when set.
    pub java_version: Option<String>,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            property_name: JAVA_VERSION_PROPERTY_NAME.to_string(),
            flag: MULTI_RELEASE_ARGUMENT.to_string(),
            // JDK 11.0.11 backported the jdeps behaviour, see moditect/moditect#141
            requirements: vec![">=14".to_string(), "~11.0.11".to_string()],
            java_version: None,
        }
    }
}

impl HelperConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.property_name.is_empty() {
            return Err(Error::Config("property_name must not be empty".to_string()));
        }
        if self.flag.is_empty() {
            return Err(Error::Config("flag must not be empty".to_string()));
        }
        self.version_requirements().map(|_| ())
    }

    pub fn version_requirements(&self) -> Result<Vec<VersionReq>> {
        self.requirements
            .iter()
            .map(|req| VersionReq::parse(req).map_err(Error::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_jdeps_multi_release() {
        let config = HelperConfig::default();
        assert_eq!(config.property_name, "java.version");
        assert_eq!(config.flag, "--multi-release");
        assert!(config.java_version.is_none());
        assert_eq!(config.version_requirements().unwrap().len(), 2);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = HelperConfig::from_json(r#"{ "java_version": "17.0.2" }"#).unwrap();
        assert_eq!(config.java_version.as_deref(), Some("17.0.2"));
        assert_eq!(config.flag, "--multi-release");
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = HelperConfig::from_json(r#"{ "flags": "--release" }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_bad_requirements() {
        let err = HelperConfig::from_json(r#"{ "requirements": ["not a req"] }"#).unwrap_err();
        assert!(err.to_string().starts_with("Config error: Version requirement error"));
    }

    #[test]
    fn rejects_empty_flag() {
        assert!(HelperConfig::from_json(r#"{ "flag": "" }"#).is_err());
    }
}
