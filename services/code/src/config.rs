use std::time::Duration;

use serde::Deserialize;

use vcode_core::config::Config;

use crate::domain::types::{CodeSettings, DEFAULT_DISPLAY_NAME};
use crate::error::CodeServiceError;
use crate::usecase::generator;

/// Code service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeConfig {
    /// Redis connection URL. Env var: `REDIS_URL`.
    pub redis_url: String,
    /// Email service gRPC URL (e.g. "http://email:50051"). Env var: `EMAIL_GRPC_URL`.
    pub email_grpc_url: String,
    /// TCP port for the gRPC server (default 50053). Env var: `CODE_GRPC_PORT`.
    #[serde(default = "default_grpc_port")]
    pub code_grpc_port: u16,
    /// TCP port for the health HTTP server (default 3114). Env var: `CODE_HTTP_PORT`.
    #[serde(default = "default_http_port")]
    pub code_http_port: u16,
    #[serde(default = "default_ttl_secs")]
    pub code_ttl_secs: u64,
    #[serde(default = "default_length")]
    pub code_max_length: u32,
    #[serde(default = "default_length")]
    pub code_min_length: u32,
    #[serde(default = "default_display_name")]
    pub code_display_name: String,
    /// Delete a code once it has been verified (default false).
    #[serde(default)]
    pub code_consume_on_verify: bool,
    /// Applied to every gRPC request served and to calls to the email service.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Config for CodeConfig {}

fn default_grpc_port() -> u16 {
    50053
}

fn default_http_port() -> u16 {
    3114
}

fn default_ttl_secs() -> u64 {
    900
}

fn default_length() -> u32 {
    6
}

fn default_display_name() -> String {
    DEFAULT_DISPLAY_NAME.to_owned()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl CodeConfig {
    /// Validate the code settings: `InvalidRange` on bad digit bounds,
    /// `InvalidTtl` on a zero TTL.
    pub fn settings(&self) -> Result<CodeSettings, CodeServiceError> {
        generator::validate_range(self.code_max_length, self.code_min_length)?;
        if self.code_ttl_secs == 0 {
            return Err(CodeServiceError::InvalidTtl);
        }
        Ok(CodeSettings {
            ttl: Duration::from_secs(self.code_ttl_secs),
            max_length: self.code_max_length,
            min_length: self.code_min_length,
            display_name: self.code_display_name.clone(),
            consume_on_verify: self.code_consume_on_verify,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
