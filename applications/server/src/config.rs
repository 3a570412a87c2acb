/// Server configuration
use crate::error::{Result, ServerError};
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_cors")]
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Cross-origin access is granted to exactly one origin
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsSettings {
    #[serde(default = "default_origin")]
    pub origin: String,
}

impl CorsSettings {
    /// The configured origin as a header value
    pub fn allowed_origin(&self) -> Result<HeaderValue> {
        let origin = self.origin.trim();
        if origin.is_empty() || origin == "*" {
            return Err(ServerError::Config(
                "CORS origin must name a single origin (set TIER_CORS_ORIGIN)".to_string(),
            ));
        }

        HeaderValue::from_str(origin)
            .map_err(|e| ServerError::Config(format!("Invalid CORS origin {:?}: {}", origin, e)))
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        default_cors()
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `config.toml` in the working
    /// directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (prefixed with TIER_)
        settings = settings.add_source(
            config::Environment::with_prefix("TIER")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "Server port must be non-zero (set TIER_SERVER_PORT)".to_string(),
            ));
        }

        self.server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| ServerError::Config(format!("Invalid host {:?}: {}", self.server.host, e)))?;

        self.cors.allowed_origin()?;

        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors() -> CorsSettings {
    CorsSettings {
        origin: default_origin(),
    }
}

fn default_origin() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            cors: default_cors(),
        }
    }
}
