use std::time::Duration;

use config::{Config, ConfigError, File};
use pickleplay_core::{
    Coordinates, DEFAULT_CENTER, DEFAULT_MAPS_BASE_URL, DEFAULT_NEARBY_RADIUS_KM,
    DiscoveryOptions, MapSettings,
};
use serde::Deserialize;
use strum::{AsRefStr, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, EnumString, AsRefStr, strum::Display)]
#[strum(ascii_case_insensitive)]
pub enum Environment {
    Local,
    Development,
    Test,
    Staging,
    Production,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub log_level: LogLevel,
    pub environment: Environment,
    pub api: ApiSettings,
    #[serde(default)]
    pub discovery: DiscoverySettings,
    pub maps: MapsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub ip: String,
    pub port: u16,
    pub num_workers: Option<u32>,
    #[serde(with = "humantime_serde", default)]
    pub shutdown_timeout: Option<Duration>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverySettings {
    pub nearby_radius_km: f64,
    pub default_center: Coordinates,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapsSettings {
    #[serde(default = "default_maps_base_url")]
    pub base_url: String,
    pub api_key: Option<String>,
    pub user_zoom: u8,
    pub default_zoom: u8,
}

fn default_maps_base_url() -> String {
    DEFAULT_MAPS_BASE_URL.into()
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            nearby_radius_km: DEFAULT_NEARBY_RADIUS_KM,
            default_center: DEFAULT_CENTER,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Environment::Test);

        let name = environment.as_ref().to_lowercase();

        Config::builder()
            .add_source(File::with_name(&format!("config/{name}")).required(true))
            .add_source(File::with_name(&format!("config/{name}.secret")).required(false))
            .add_source(config::Environment::with_prefix("PICKLEPLAY_API").separator("__"))
            .set_override("environment", environment.as_ref())?
            .build()?
            .try_deserialize()
    }

    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            nearby_radius_km: self.discovery.nearby_radius_km,
        }
    }

    pub fn map_settings(&self) -> MapSettings {
        let MapsSettings {
            base_url,
            api_key,
            user_zoom,
            default_zoom,
        } = self.maps.clone();

        MapSettings {
            base_url,
            api_key,
            default_center: self.discovery.default_center,
            user_zoom,
            default_zoom,
        }
    }
}

impl ApiSettings {
    pub fn listener_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

impl From<&LogLevel> for tracing::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
