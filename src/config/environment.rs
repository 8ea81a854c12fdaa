// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into typed server, catalog, and provider settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! Every setting comes from an environment variable with a documented
//! default. A `.env` file in the working directory is loaded first when
//! present.

use crate::catalog::{CatalogSource, RemoteSource};
use crate::constants::{catalog, external, ports, provider_selectors};
use crate::middleware::cors;
use crate::providers::ProviderKind;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        })
    }
}

/// Which kind of catalog source is configured
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSourceKind {
    /// Local JSON file
    #[default]
    File,
    /// Remote HTTP endpoint
    Remote,
}

impl FromStr for CatalogSourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "remote" => Ok(Self::Remote),
            other => bail!("unknown catalog source '{other}', expected 'file' or 'remote'"),
        }
    }
}

impl fmt::Display for CatalogSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::File => "file",
            Self::Remote => "remote",
        })
    }
}

/// Catalog snapshot settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Source kind
    pub source: CatalogSourceKind,
    /// Snapshot file used by the `file` source
    pub file: PathBuf,
    /// Endpoint used by the `remote` source
    pub remote_url: Option<String>,
    /// Deadline for remote fetches
    pub fetch_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: CatalogSourceKind::File,
            file: PathBuf::from(catalog::DEFAULT_SNAPSHOT_FILE),
            remote_url: None,
            fetch_timeout_secs: catalog::DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl CatalogConfig {
    /// Build the configured snapshot source
    ///
    /// # Errors
    ///
    /// Fails when the remote source has no URL.
    pub fn to_source(&self) -> Result<CatalogSource> {
        Ok(match self.source {
            CatalogSourceKind::File => CatalogSource::File(self.file.clone()),
            CatalogSourceKind::Remote => CatalogSource::Remote(RemoteSource {
                url: self
                    .remote_url
                    .clone()
                    .context("CATALOG_REMOTE_URL is required when CATALOG_SOURCE=remote")?,
                timeout: Duration::from_secs(self.fetch_timeout_secs),
            }),
        })
    }
}

/// External scheduling platform settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalApiConfig {
    /// Base URL; canned responses are used when unset
    pub base_url: Option<String>,
    /// API key sent with every call
    pub api_key: Option<String>,
    /// Per-call deadline
    pub timeout_secs: u64,
}

impl Default for ExternalApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_secs: external::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated origins or `*`
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Booking provider selector
    pub provider: String,
    /// Catalog settings
    pub catalog: CatalogConfig,
    /// External platform settings
    pub external_api: ExternalApiConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            http_port: ports::DEFAULT_HTTP_PORT,
            environment: Environment::Development,
            provider: provider_selectors::TEST.to_owned(),
            catalog: CatalogConfig::default(),
            external_api: ExternalApiConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads the process environment only; the binary loads `.env` once at
    /// startup, before logging is configured.
    ///
    /// # Errors
    ///
    /// Returns an error when a numeric or enumerated variable does not parse.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or("HOST", "127.0.0.1"),
            http_port: env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development")),
            provider: env_var_or("PROVIDER", provider_selectors::TEST),
            catalog: CatalogConfig {
                source: env_var_or("CATALOG_SOURCE", "file")
                    .parse()
                    .context("Invalid CATALOG_SOURCE value")?,
                file: PathBuf::from(env_var_or("CATALOG_FILE", catalog::DEFAULT_SNAPSHOT_FILE)),
                remote_url: env_var_opt("CATALOG_REMOTE_URL"),
                fetch_timeout_secs: env_var_or(
                    "CATALOG_FETCH_TIMEOUT_SECS",
                    &catalog::DEFAULT_FETCH_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid CATALOG_FETCH_TIMEOUT_SECS value")?,
            },
            external_api: ExternalApiConfig {
                base_url: env_var_opt("EXTERNAL_API_BASE_URL"),
                api_key: env_var_opt("EXTERNAL_API_KEY"),
                timeout_secs: env_var_or(
                    "EXTERNAL_API_TIMEOUT_SECS",
                    &external::DEFAULT_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid EXTERNAL_API_TIMEOUT_SECS value")?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Rejects port 0, an unknown provider selector, a remote catalog
    /// without URL, zero timeouts, and CORS origins that are not valid
    /// header values.
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            bail!("HTTP_PORT must be greater than 0");
        }

        self.provider
            .parse::<ProviderKind>()
            .with_context(|| format!("Invalid PROVIDER value '{}'", self.provider))?;

        if self.catalog.source == CatalogSourceKind::Remote && self.catalog.remote_url.is_none() {
            bail!("CATALOG_REMOTE_URL is required when CATALOG_SOURCE=remote");
        }
        if self.catalog.fetch_timeout_secs == 0 {
            bail!("CATALOG_FETCH_TIMEOUT_SECS must be greater than 0");
        }
        if self.external_api.timeout_secs == 0 {
            bail!("EXTERNAL_API_TIMEOUT_SECS must be greater than 0");
        }

        let invalid = cors::invalid_origins(&self.cors.allowed_origins);
        if !invalid.is_empty() {
            bail!("CORS_ALLOWED_ORIGINS contains invalid origins: {}", invalid.join(", "));
        }

        if self.external_api.base_url.is_some() && self.external_api.api_key.is_none() {
            warn!("EXTERNAL_API_BASE_URL is set without EXTERNAL_API_KEY");
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        let catalog_origin = match self.catalog.source {
            CatalogSourceKind::File => self.catalog.file.display().to_string(),
            CatalogSourceKind::Remote => self
                .catalog
                .remote_url
                .clone()
                .unwrap_or_else(|| "<unset>".to_owned()),
        };

        format!(
            "MedSpa Gateway Configuration:\n\
             - Bind: {}:{}\n\
             - Environment: {}\n\
             - Provider: {}\n\
             - Catalog: {} ({})\n\
             - External API: {}\n\
             - External API Key: {}\n\
             - CORS Origins: {}",
            self.host,
            self.http_port,
            self.environment,
            self.provider,
            self.catalog.source,
            catalog_origin,
            self.external_api.base_url.as_deref().unwrap_or("canned responses"),
            if self.external_api.api_key.is_some() {
                "Configured"
            } else {
                "Not set"
            },
            self.cors.allowed_origins,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_var_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    }

    #[test]
    fn test_catalog_source_kind_parsing() {
        assert_eq!("Remote".parse::<CatalogSourceKind>().unwrap(), CatalogSourceKind::Remote);
        assert!("s3".parse::<CatalogSourceKind>().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ServerConfig::default();
        assert!(config.validate().is_ok());

        config.provider = "zenith".to_owned();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.catalog.source = CatalogSourceKind::Remote;
        assert!(config.validate().is_err());
        assert!(config.catalog.to_source().is_err());

        let mut config = ServerConfig::default();
        config.http_port = 0;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.external_api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_summary_hides_api_key() {
        let mut config = ServerConfig::default();
        config.external_api.api_key = Some("secret-key".to_owned());
        let summary = config.summary();
        assert!(summary.contains("Configured"));
        assert!(!summary.contains("secret-key"));
        assert!(summary.contains("services.json"));
    }
}
