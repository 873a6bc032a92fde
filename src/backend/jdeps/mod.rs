//! Helpers for `jdeps` invocations.

pub mod arguments;

pub use arguments::{
    FlagValue, MULTI_RELEASE_ARGUMENT, extract_multi_release, extract_version, find_flag_value,
    locate_flag_value,
};
