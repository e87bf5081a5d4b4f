//! Command-line and environment configuration.

use clap::Parser;
use thiserror::Error;
use users_core::{UsersClient, DEFAULT_BASE_URL};

#[derive(Debug, Clone, Parser, PartialEq, Eq)]
#[command(name = "users-dashboard", about = "Browse and edit a remote user directory")]
pub struct Config {
    /// Base URL of the users API; `/users` is appended.
    #[arg(long, env = "USERS_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, env = "USERS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Fetch once, print the dashboard and exit.
    #[arg(long)]
    pub once: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.starts_with("http://") || self.base_url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidBaseUrl(self.base_url.clone()))
        }
    }

    pub fn client(&self) -> UsersClient {
        UsersClient::new(&self.base_url)
    }
}
