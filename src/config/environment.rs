// ABOUTME: Environment configuration for the Solicitudes admin client
// ABOUTME: Resolves the backend base URL and deployment environment from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based client configuration

use solicitudes_core::constants::{defaults, env_config, service_names};
use solicitudes_core::errors::{AppError, AppResult, ErrorCode};
use std::env;
use std::fmt;
use tracing::info;
use url::Url;

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL; resource paths are appended to it
    pub api_base_url: Url,
    /// Deployment environment
    pub environment: Environment,
    /// `User-Agent` sent with every call
    pub user_agent: String,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// `SOLICITUDES_API_URL` overrides the default `http://localhost:8081`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the URL does not parse or is not http(s).
    pub fn from_env() -> AppResult<Self> {
        let base = env_var_or(env_config::API_URL, defaults::API_BASE_URL);
        let environment = Environment::from_str_or_default(&env_var_or(
            env_config::ENVIRONMENT,
            "development",
        ));

        let config = Self {
            api_base_url: parse_base_url(&base)?,
            environment,
            user_agent: default_user_agent(),
        };
        info!("Configuration loaded: {}", config.summary());
        Ok(config)
    }

    /// Configuration pointing at an explicit backend
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the URL does not parse or is not http(s).
    pub fn with_base_url(base_url: &str) -> AppResult<Self> {
        Ok(Self {
            api_base_url: parse_base_url(base_url)?,
            environment: Environment::default(),
            user_agent: default_user_agent(),
        })
    }

    /// Replace the base URL, keeping everything else
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the URL does not parse or is not http(s).
    pub fn override_base_url(mut self, base_url: &str) -> AppResult<Self> {
        self.api_base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "api_base_url={} environment={}",
            self.api_base_url, self.environment
        )
    }
}

fn default_user_agent() -> String {
    format!(
        "{}/{}",
        service_names::SOLICITUDES_ADMIN,
        env!("CARGO_PKG_VERSION")
    )
}

fn parse_base_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        AppError::new(
            ErrorCode::ConfigInvalid,
            format!("invalid API base URL '{raw}': {e}"),
        )
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::new(
            ErrorCode::ConfigInvalid,
            format!("API base URL must be http or https, got '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
