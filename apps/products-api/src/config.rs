//! Configuration for Products API

use core_config::{app_info, database::DatabaseConfig, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, core_config::ConfigError> {
        let environment = Environment::from_env();
        let database = DatabaseConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }
}
