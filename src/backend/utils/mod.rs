pub mod config;

pub use config::HelperConfig;
