//! Prints the `--multi-release` value `jdeps` has to be run with, if the current JDK needs one.
//!
//! Usage: `multirelease [--config <file>] [--] [jdeps args...]`

use anyhow::{Context, Result, bail};
use log::{error, info};
use multirelease::utils::logging;
use multirelease::{
    EnvProperties, HelperConfig, JavaVersionHelper, LogFacade, StaticProperties, SystemProperties,
};
use std::{env, path::PathBuf, process};

fn main() {
    logging::init_from_env();

    let args: Vec<String> = env::args().skip(1).collect();

    match run(&args) {
        Ok(Some(version)) => println!("{version}"),
        Ok(None) => info!("No multi-release version needed"),
        Err(e) => {
            error!("{e:#}");
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<Option<i32>> {
    let (config_path, jdeps_args) = split_args(args)?;

    let config = match config_path {
        Some(path) => HelperConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => HelperConfig::default(),
    };

    let fixed = config
        .java_version
        .as_ref()
        .map(|value| StaticProperties::new().with(config.property_name.clone(), value.clone()));
    let properties: &dyn SystemProperties = match &fixed {
        Some(fixed) => fixed,
        None => &EnvProperties,
    };

    let helper = JavaVersionHelper::new()
        .with_log(&LogFacade)
        .with_properties(properties)
        .with_config(&config)?;

    Ok(helper.resolve_with_version(jdeps_args))
}

/// Splits off a leading `--config <file>`; everything after it goes to jdeps.
fn split_args(args: &[String]) -> Result<(Option<PathBuf>, &[String])> {
    let (config, rest) = match args {
        [flag, path, rest @ ..] if flag == "--config" => (Some(PathBuf::from(path)), rest),
        [flag] if flag == "--config" => bail!("--config needs a file path"),
        rest => (None, rest),
    };

    let rest = match rest {
        [separator, rest @ ..] if separator == "--" => rest,
        rest => rest,
    };

    Ok((config, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn config_flag_is_split_off() {
        let args = strings(&["--config", "helper.json", "--", "--multi-release", "17"]);
        let (config, rest) = split_args(&args).unwrap();
        assert_eq!(config, Some(PathBuf::from("helper.json")));
        assert_eq!(rest, &args[3..]);
    }

    #[test]
    fn plain_arguments_pass_through() {
        let args = strings(&["--multi-release=17", "app.jar"]);
        let (config, rest) = split_args(&args).unwrap();
        assert_eq!(config, None);
        assert_eq!(rest, &args[..]);
    }

    #[test]
    fn config_flag_needs_a_path() {
        assert!(split_args(&strings(&["--config"])).is_err());
    }
}
