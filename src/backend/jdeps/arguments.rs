//! Scanning of extra `jdeps` arguments for the `--multi-release` value.

use crate::utils::{Error, Log, Result};

pub const MULTI_RELEASE_ARGUMENT: &str = "--multi-release";

/// Where the flag's value was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagValue<'a> {
    /// `--flag N`
    NextArgument(&'a str),
    /// `--flag=N`
    SameArgument(&'a str),
}

impl<'a> FlagValue<'a> {
    pub const fn as_str(&self) -> &'a str {
        match *self {
            Self::NextArgument(value) | Self::SameArgument(value) => value,
        }
    }
}

/// Locates the raw value of the first argument starting with `flag`.
///
/// `Ok(None)` means the flag is not there at all.
pub fn locate_flag_value<'a, S: AsRef<str>>(
    args: &'a [S],
    flag: &str,
) -> Result<Option<FlagValue<'a>>> {
    let Some(index) = args.iter().position(|arg| arg.as_ref().starts_with(flag)) else {
        return Ok(None);
    };

    let arg = args[index].as_ref();
    if arg.len() == flag.len() {
        let next = args
            .get(index + 1)
            .ok_or_else(|| Error::MissingArgumentValue {
                flag: flag.to_string(),
            })?;
        Ok(Some(FlagValue::NextArgument(next.as_ref())))
    } else {
        inline_value(arg, flag).map(|value| Some(FlagValue::SameArgument(value)))
    }
}

/// Finds the value of `flag` in `args`, accepting `--flag N` and `--flag=N`.
///
/// Only the first argument starting with `flag` is looked at.
pub fn find_flag_value<S: AsRef<str>>(args: &[S], flag: &str) -> Result<Option<i32>> {
    locate_flag_value(args, flag)?
        .map(|value| parse_version_number(value.as_str(), flag))
        .transpose()
}

// `--flag=N`: one separator character, then at least one character of value.
fn inline_value<'a>(arg: &'a str, flag: &str) -> Result<&'a str> {
    let rest = &arg[flag.len()..];
    let value = rest
        .chars()
        .next()
        .map_or("", |separator| &rest[separator.len_utf8()..]);

    if value.is_empty() {
        return Err(Error::InvalidArgumentValue {
            flag: flag.to_string(),
            value: arg.to_string(),
        });
    }
    Ok(value)
}

fn parse_version_number(value: &str, flag: &str) -> Result<i32> {
    value
        .parse::<i32>()
        .map_err(|_| Error::InvalidArgumentValue {
            flag: flag.to_string(),
            value: value.to_string(),
        })
}

/// Extracts the `flag` value, logging instead of failing.
///
/// Malformed values are logged as errors; an absent flag is only a debug line.
pub fn extract_version<S: AsRef<str>>(args: &[S], flag: &str, log: &dyn Log) -> Option<i32> {
    let located = locate_flag_value(args, flag).and_then(|found| {
        found
            .map(|value| {
                match value {
                    FlagValue::NextArgument(raw) => {
                        log.debug(&format!("Version extracted from the next argument: {raw}"));
                    }
                    FlagValue::SameArgument(raw) => {
                        log.debug(&format!("Version extracted from the same argument: {raw}"));
                    }
                }
                parse_version_number(value.as_str(), flag)
            })
            .transpose()
    });

    match located {
        Ok(Some(version)) => Some(version),
        Ok(None) => {
            let args: Vec<&str> = args.iter().map(|arg| arg.as_ref()).collect();
            log.debug(&format!(
                "No version can be extracted from arguments: {args:?}"
            ));
            None
        }
        Err(e) => {
            log.log(e.severity(), &e.to_string());
            None
        }
    }
}

/// [`extract_version`] for the `--multi-release` flag.
pub fn extract_multi_release<S: AsRef<str>>(args: &[S], log: &dyn Log) -> Option<i32> {
    extract_version(args, MULTI_RELEASE_ARGUMENT, log)
}
