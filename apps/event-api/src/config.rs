use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_parse, server::ServerConfig};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;
use domain_media::DEFAULT_MAX_UPLOAD_BYTES;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Upload limits for the media routes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaConfig {
    pub max_upload_bytes: usize,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl FromEnv for MediaConfig {
    /// Reads `MEDIA_MAX_UPLOAD_BYTES` (default 15 MiB).
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            max_upload_bytes: env_parse("MEDIA_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub media: MediaConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let media = MediaConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            media,
            environment,
        })
    }
}
