//! Configuration structs

mod app_config;

pub use app_config::{AppConfig, AppSettings, CdnConfig, ConfigError, Environment, LogConfig};
