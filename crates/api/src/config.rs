//! Application configuration

use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server (local binding only; the event adapters are host-invoked)
    pub bind_host: String,
    pub port: u16,

    // Registry
    /// Application ID mapped to the default customization document.
    /// Unset or empty means no default mapping is installed.
    pub default_app_id: Option<String>,
    /// Optional second application ID mapped to the alternative document.
    pub alt_app_id: Option<String>,

    // Document URL overrides
    pub logo_url: String,
    pub background_image_url: String,
    pub alt_logo_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_host: env::var("BIND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: {
                let raw = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
                raw.parse()
                    .map_err(|_| ConfigError::InvalidPort(raw))?
            },

            // An empty DEFAULT_APP_ID behaves like an unset one; the registry
            // refuses empty keys, so it must never reach construction.
            default_app_id: env::var("DEFAULT_APP_ID").ok().filter(|id| !id.is_empty()),
            alt_app_id: env::var("ALT_APP_ID").ok().filter(|id| !id.is_empty()),

            logo_url: env::var("LOGO_URL")
                .unwrap_or_else(|_| "https://biopharma.dignifiedlabs.com/pharmacy.png".to_string()),
            background_image_url: env::var("BACKGROUND_IMAGE_URL").unwrap_or_else(|_| {
                "https://biopharma.dignifiedlabs.com/molecule-pattern-background.jpg".to_string()
            }),
            alt_logo_url: env::var("ALT_LOGO_URL")
                .unwrap_or_else(|_| "https://example.com/logo.png".to_string()),
        })
    }

    /// Socket address string for the local server.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}
