//! Error handling.

use std::fmt;

use crate::utils::logging::LogLevel;

#[derive(Debug)]
pub enum Error {
    /// The version string does not look like `major.minor.patch`.
    VersionFormat { input: String, pattern: &'static str },
    /// A captured version component is not a valid number.
    VersionComponent { input: String, reason: String },
    /// The flag was the last argument, so there is no value to read.
    MissingArgumentValue { flag: String },
    /// The flag value is empty or not an integer.
    InvalidArgumentValue { flag: String, value: String },
    Config(String),
}

impl Error {
    /// Level this error is reported at when it is swallowed into `None`.
    pub const fn severity(&self) -> LogLevel {
        match self {
            Self::VersionFormat { .. } => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VersionFormat { input, pattern } => {
                write!(f, "The java version {input} cannot be parsed as {pattern}")
            }
            Self::VersionComponent { input, reason } => {
                write!(f, "The java version {input} has an invalid format. {reason}")
            }
            Self::MissingArgumentValue { flag } => write!(f, "No argument value for {flag}"),
            Self::InvalidArgumentValue { flag, value } => {
                write!(f, "Invalid argument value for {flag}: {value}")
            }
            Self::Config(message) => write!(f, "Config error: {message}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Config(format!("IO error: {err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<semver::Error> for Error {
    fn from(err: semver::Error) -> Self {
        Self::Config(format!("Version requirement error: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_errors_are_warnings() {
        let err = Error::VersionFormat {
            input: "abc".to_string(),
            pattern: "^x$",
        };
        assert_eq!(err.severity(), LogLevel::Warn);
        assert_eq!(err.to_string(), "The java version abc cannot be parsed as ^x$");
    }

    #[test]
    fn argument_errors_are_errors() {
        let err = Error::MissingArgumentValue {
            flag: "--multi-release".to_string(),
        };
        assert_eq!(err.severity(), LogLevel::Error);
        assert_eq!(err.to_string(), "No argument value for --multi-release");
    }

    #[test]
    fn json_errors_become_config_errors() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Config(ref msg) if msg.starts_with("JSON error:")));
    }
}
