use crate::store::RecoveryMode;
use anyhow::{Context, Result, anyhow};
use std::{path::PathBuf, time::Duration};

const DEFAULT_PORT: &str = "8080";
const DEFAULT_PRODUCTS_PATH: &str = "./data/products.json";
const DEFAULT_CARTS_PATH: &str = "./data/carts.json";
const DEFAULT_STORE_TIMEOUT_SECS: &str = "5";

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub products_path: PathBuf,
    pub carts_path: PathBuf,
    pub recovery: RecoveryMode,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store: StoreConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = var("PORT")
            .unwrap_or_else(|| DEFAULT_PORT.to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let products_path = PathBuf::from(
            var("PRODUCTS_PATH").unwrap_or_else(|| DEFAULT_PRODUCTS_PATH.to_string()),
        );
        let carts_path =
            PathBuf::from(var("CARTS_PATH").unwrap_or_else(|| DEFAULT_CARTS_PATH.to_string()));

        let lenient_str = var("STORE_LENIENT_RECOVERY").unwrap_or_else(|| "false".to_string());
        let recovery = match lenient_str.as_str() {
            "true" | "1" => RecoveryMode::Lenient,
            "false" | "0" => RecoveryMode::Strict,
            other => {
                return Err(anyhow!(
                    "STORE_LENIENT_RECOVERY must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let timeout_secs = var("STORE_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_STORE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .context("STORE_TIMEOUT_SECS must be a valid u64 integer")?;

        if timeout_secs == 0 {
            return Err(anyhow!("STORE_TIMEOUT_SECS must be greater than zero"));
        }

        Ok(Self {
            port,
            store: StoreConfig {
                products_path,
                carts_path,
                recovery,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}
