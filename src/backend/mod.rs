//! Backend of the application.

pub mod java;
pub mod jdeps;
pub mod utils;

pub use java::JavaVersionHelper;
