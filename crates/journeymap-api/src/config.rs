use std::env;
use std::path::PathBuf;

use journeymap_core::config::LayeredConfig;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    /// Optional TOML file layered under the environment
    pub config_file: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: 3001, cors_origin: "http://localhost:3000".to_string(), config_file: None }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("JOURNEYMAP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let cors_origin = env::var("JOURNEYMAP_CORS_ORIGIN").unwrap_or(defaults.cors_origin);

        let config_file = env::var("JOURNEYMAP_CONFIG").ok().map(PathBuf::from);

        Self { port, cors_origin, config_file }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Dataset settings: defaults, then the config file if any, then the environment
    pub fn map_config(&self) -> journeymap_core::Result<LayeredConfig> {
        let mut config = LayeredConfig::with_defaults();
        if let Some(path) = &self.config_file {
            config = config.load_from_file(path)?;
        }
        Ok(config.load_from_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        env::remove_var("JOURNEYMAP_PORT");
        env::remove_var("JOURNEYMAP_CORS_ORIGIN");
        env::remove_var("JOURNEYMAP_CONFIG");

        let config = ApiConfig::from_env();
        assert_eq!(config.port, 3001);
        assert_eq!(config.cors_origin, "http://localhost:3000");
        assert!(config.config_file.is_none());
        assert_eq!(config.bind_address(), "0.0.0.0:3001");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        env::set_var("JOURNEYMAP_PORT", "8080");
        env::set_var("JOURNEYMAP_CORS_ORIGIN", "https://example.com");

        let config = ApiConfig::from_env();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origin, "https://example.com");

        // Unparseable ports fall back
        env::set_var("JOURNEYMAP_PORT", "not-a-port");
        assert_eq!(ApiConfig::from_env().port, 3001);

        env::remove_var("JOURNEYMAP_PORT");
        env::remove_var("JOURNEYMAP_CORS_ORIGIN");
    }
}
