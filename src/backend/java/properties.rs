//! Sources for system properties such as `java.version`.

use std::collections::HashMap;

pub const JAVA_VERSION_PROPERTY_NAME: &str = "java.version";

/// Anything that can answer a property lookup.
pub trait SystemProperties {
    fn property(&self, name: &str) -> Option<String>;
}

/// Reads properties from the process environment.
///
/// `java.version` is looked up as `JAVA_VERSION`, the variable JDK images export.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvProperties;

impl EnvProperties {
    pub fn variable_name(property: &str) -> String {
        property.replace('.', "_").to_uppercase()
    }
}

impl SystemProperties for EnvProperties {
    fn property(&self, name: &str) -> Option<String> {
        std::env::var(Self::variable_name(name)).ok()
    }
}

/// Fixed set of properties.
#[derive(Debug, Default, Clone)]
pub struct StaticProperties {
    values: HashMap<String, String>,
}

impl StaticProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Shorthand for a source that only knows `java.version`.
    pub fn java_version(value: impl Into<String>) -> Self {
        Self::new().with(JAVA_VERSION_PROPERTY_NAME, value)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl SystemProperties for StaticProperties {
    fn property(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_property_names_to_env_vars() {
        assert_eq!(EnvProperties::variable_name("java.version"), "JAVA_VERSION");
        assert_eq!(
            EnvProperties::variable_name("java.vm.version"),
            "JAVA_VM_VERSION"
        );
    }

    #[test]
    fn static_properties_answer_known_names_only() {
        let props: StaticProperties = [("java.version", "17.0.2"), ("os.name", "Linux")]
            .into_iter()
            .collect();

        assert_eq!(props.property("java.version").as_deref(), Some("17.0.2"));
        assert_eq!(props.property("os.name").as_deref(), Some("Linux"));
        assert_eq!(props.property("user.home"), None);
    }

    #[test]
    fn java_version_shorthand() {
        let props = StaticProperties::java_version("11.0.11");
        assert_eq!(
            props.property(JAVA_VERSION_PROPERTY_NAME).as_deref(),
            Some("11.0.11")
        );
    }
}
