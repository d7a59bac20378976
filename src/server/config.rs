use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

pub struct Config {
    pub database_url: String,

    /// Address the HTTP server binds to.
    pub server_address: String,

    /// Base URL under which this core service is reachable by phase services.
    /// Phase types owned by this URL are core-internal and never probed or
    /// propagated to.
    pub core_base_url: String,

    /// Base URL of the identity service used for course group and role
    /// provisioning. Optional; deployments without an identity service skip
    /// provisioning entirely.
    pub identity_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_address: std::env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string()),
            core_base_url: std::env::var("CORE_HOST")
                .map_err(|_| ConfigError::MissingEnvVar("CORE_HOST".to_string()))?,
            identity_base_url: std::env::var("IDENTITY_URL").ok(),
        })
    }
}
