//! Configuration management for the EdgeStack gateway.
//!
//! All configuration is driven by environment variables.

/// Global configuration for the EdgeStack gateway.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    /// Bind address for the gateway.
    pub gateway_listen: String,
    /// Origin value for `Access-Control-Allow-Origin` response headers.
    pub allowed_origin: String,
    /// Log level.
    pub log_level: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            gateway_listen: "0.0.0.0:8080".to_owned(),
            allowed_origin: "*".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("GATEWAY_LISTEN") {
            config.gateway_listen = v;
        }
        if let Ok(v) = std::env::var("ALLOWED_ORIGIN") {
            config.allowed_origin = v;
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }
}
