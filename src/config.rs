// src/config.rs
// =============================================================================
// Runtime settings for the API client.
//
// Values come from the process environment. A .env file in the working
// directory is loaded first (if present) so local development doesn't need
// exported variables:
//
//   KATANA_API_KEY                     required
//   KATANA_BASE_URL                    default https://api.katanamrp.com/v1
//   KATANA_TIMEOUT_SECS                default 30
//   KATANA_RAISE_ON_UNEXPECTED_STATUS  default false
// =============================================================================

use std::fmt;
use std::time::Duration;

use crate::error::{KatanaError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.katanamrp.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Shown in place of the API key in Debug output
pub(crate) const REDACTED: &str = "***";

#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub raise_on_unexpected_status: bool,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &REDACTED)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("raise_on_unexpected_status", &self.raise_on_unexpected_status)
            .finish()
    }
}

impl Settings {
    /// Loads `.env` (if any) and then reads the process environment
    pub fn from_env() -> Result<Self> {
        // A missing .env is the normal case in production
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Split out so tests can feed variables without touching the real env
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("KATANA_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| KatanaError::Config("KATANA_API_KEY is not set".into()))?;

        let base_url = lookup("KATANA_BASE_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match lookup("KATANA_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                KatanaError::Config(format!("KATANA_TIMEOUT_SECS is not a number: {raw}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let raise_on_unexpected_status = lookup("KATANA_RAISE_ON_UNEXPECTED_STATUS")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Settings {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            raise_on_unexpected_status,
        })
    }
}
