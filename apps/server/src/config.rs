use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use stockmate_market_data::{ProviderConfig, DEFAULT_BASE_URL};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub fmp_api_key: String,
    pub fmp_base_url: String,
    pub fmp_timeout: Duration,
}

impl Config {
    /// Reads `SM_*` variables, after loading a `.env` file if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let listen_addr: SocketAddr = var("SM_LISTEN_ADDR", "0.0.0.0:8088")
            .parse()
            .context("Invalid SM_LISTEN_ADDR")?;
        let db_path = var("SM_DB_PATH", "./db/stockmate.db");
        let cors_allow = var("SM_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = var("SM_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid SM_REQUEST_TIMEOUT_MS")?;
        let fmp_api_key = lookup("SM_FMP_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("SM_FMP_API_KEY must be set")?;
        let fmp_base_url = var("SM_FMP_BASE_URL", DEFAULT_BASE_URL);
        let fmp_timeout_secs: u64 = var("SM_FMP_TIMEOUT_SECS", "10")
            .parse()
            .context("Invalid SM_FMP_TIMEOUT_SECS")?;

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            fmp_api_key,
            fmp_base_url,
            fmp_timeout: Duration::from_secs(fmp_timeout_secs),
        })
    }

    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::new(self.fmp_api_key.clone())
            .with_base_url(self.fmp_base_url.clone())
            .with_timeout(self.fmp_timeout)
    }
}
