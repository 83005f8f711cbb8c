use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub delivery: DeliveryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    /// Seconds to wait for a connection from the pool before failing the request.
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Whole-request deadline. Everything here is metadata lookups; downloads
    /// resolve to external storage URLs, so nothing long-running runs in-process.
    pub request_timeout_secs: u64,
    pub enable_cors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Base URL that storage keys are resolved against. Stand-in until
    /// signed URLs are issued by the object store.
    pub asset_base_url: String,
    /// Branding shown when a tenant lookup fails. Cosmetic only.
    pub platform_name: String,
    pub platform_primary_color: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            self.database.acquire_timeout_secs = v.parse().unwrap_or(self.database.acquire_timeout_secs);
        }
        if let Ok(v) = env::var("API_REQUEST_TIMEOUT_SECS") {
            self.api.request_timeout_secs = v.parse().unwrap_or(self.api.request_timeout_secs);
        }
        if let Ok(v) = env::var("API_ENABLE_CORS") {
            self.api.enable_cors = v.parse().unwrap_or(self.api.enable_cors);
        }
        if let Ok(v) = env::var("DELIVERY_ASSET_BASE_URL") {
            self.delivery.asset_base_url = v;
        }
        if let Ok(v) = env::var("DELIVERY_PLATFORM_NAME") {
            self.delivery.platform_name = v;
        }
        if let Ok(v) = env::var("DELIVERY_PLATFORM_PRIMARY_COLOR") {
            self.delivery.platform_primary_color = v;
        }
        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            database: DatabaseConfig {
                max_connections: 10,
                acquire_timeout_secs: 30,
            },
            api: ApiConfig {
                request_timeout_secs: 10,
                enable_cors: true,
            },
            delivery: DeliveryConfig {
                asset_base_url: "http://localhost:3000/media".to_string(),
                platform_name: "EpicMoments".to_string(),
                platform_primary_color: "#2563eb".to_string(),
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            database: DatabaseConfig {
                max_connections: 20,
                acquire_timeout_secs: 10,
            },
            api: ApiConfig {
                request_timeout_secs: 5,
                enable_cors: true,
            },
            delivery: DeliveryConfig {
                asset_base_url: "https://media.staging.epicmoments.app".to_string(),
                platform_name: "EpicMoments".to_string(),
                platform_primary_color: "#2563eb".to_string(),
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig {
                max_connections: 50,
                acquire_timeout_secs: 5,
            },
            api: ApiConfig {
                request_timeout_secs: 5,
                enable_cors: true,
            },
            delivery: DeliveryConfig {
                asset_base_url: "https://media.epicmoments.app".to_string(),
                platform_name: "EpicMoments".to_string(),
                platform_primary_color: "#2563eb".to_string(),
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_defaults() {
        let config = AppConfig::development();
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.delivery.platform_name, "EpicMoments");
    }

    #[test]
    fn production_tightens_timeouts() {
        let config = AppConfig::production();
        assert_eq!(config.database.acquire_timeout_secs, 5);
        assert_eq!(config.api.request_timeout_secs, 5);
    }
}
