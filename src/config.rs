use std::env;

use crate::error::{CheckError, Result};

pub const DEFAULT_DOMAIN: &str = "7500";
pub const DEFAULT_BASE_URL: &str = "https://webapi.bps.go.id/v1/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub domain: String,
    pub base_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let api_key = env::var("BPS_API_KEY")
            .map_err(|_| CheckError::Config("BPS_API_KEY is not set".to_string()))?;

        let domain = env::var("BPS_DOMAIN").unwrap_or_else(|_| DEFAULT_DOMAIN.to_string());
        let base_url = env::var("BPS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Config {
            api_key,
            domain,
            base_url,
        })
    }
}

/// Display name for a BPS domain code.
pub fn domain_name(code: &str) -> String {
    match code {
        "7500" => "Gorontalo".to_string(),
        _ => format!("Domain {}", code),
    }
}
