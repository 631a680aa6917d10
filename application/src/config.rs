//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Remote listings endpoint configuration.
    pub server: Server,

    /// Map widget configuration.
    pub map: Map,

    /// Service configuration.
    pub service: Service,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Remote listings endpoint configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Base URL of the endpoint.
    #[default("https://23.javascript.htmlacademy.pro/keksobooking".to_owned())]
    pub url: String,

    /// Timeout of a single request.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl From<Server> for service::infra::transport::http::Config {
    fn from(value: Server) -> Self {
        let Server { url, timeout } = value;
        Self { url, timeout }
    }
}

/// Map widget configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Map {
    /// Latitude of the initial map center (Tokyo).
    #[default(35.652832)]
    pub lat: f64,

    /// Longitude of the initial map center (Tokyo).
    #[default(139.839478)]
    pub lng: f64,

    /// Initial zoom of the map.
    #[default(13)]
    pub zoom: u8,

    /// Initial offset of the draggable main marker from the center, in
    /// both coordinates.
    #[default(0.005)]
    pub marker_offset: f64,
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// Number of synthetic listings generated when the remote source is
    /// unavailable.
    #[default(10)]
    pub fallback_listings: usize,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        let Service { fallback_listings } = value;
        Self { fallback_listings }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
