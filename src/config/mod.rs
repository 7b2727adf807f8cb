//! Per-side gas price configuration.
//!
//! Configuration is read from the environment once, when a side's service is
//! constructed; it is never re-read while the process runs.
//!
//! Environment variables, prefixed with `HOME_` or `FOREIGN_`:
//! - `{SIDE}_GAS_PRICE_ORACLE_URL`: oracle endpoint; absent disables the
//!   oracle leg of the fallback chain
//! - `{SIDE}_GAS_PRICE_SPEED_TYPE`: tier used for the oracle's normalized
//!   price (default "standard")
//! - `{SIDE}_GAS_PRICE_UPDATE_INTERVAL`: refresh interval in milliseconds
//!   (default 600000)
//! - `{SIDE}_GAS_PRICE_FALLBACK`: seed price in wei (required)
//! - `{SIDE}_BRIDGE_ADDRESS`: bridge contract address (required)
//! - `{SIDE}_RPC_URL`: chain JSON-RPC endpoint (required)

use std::{env, time::Duration};

use alloy::primitives::Address;
use thiserror::Error;

use crate::{
    constants::{DEFAULT_GAS_PRICE_SPEED, DEFAULT_GAS_PRICE_UPDATE_INTERVAL_MS},
    models::{ChainSide, GasPriceSpeed},
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),

    #[error("Invalid value for {name}: {reason}")]
    InvalidEnv { name: String, reason: String },
}

/// Gas price settings for one chain side.
#[derive(Debug, Clone)]
pub struct GasPriceConfig {
    pub side: ChainSide,
    /// Oracle endpoint; `None` sends every refresh straight to the contract.
    pub oracle_url: Option<String>,
    /// Tier the oracle's normalized price is taken from.
    pub speed_type: GasPriceSpeed,
    /// Delay between refresh cycles.
    pub update_interval: Duration,
    /// Seed price in wei, used until the first refresh completes.
    pub fallback_price: u128,
    /// Address of the bridge contract exposing `gasPrice()`.
    pub bridge_address: Address,
    /// JSON-RPC endpoint of this side's chain.
    pub rpc_url: String,
}

impl GasPriceConfig {
    pub fn from_env(side: ChainSide) -> Result<Self, ConfigError> {
        let prefix = side.env_prefix();

        let oracle_url = env::var(format!("{prefix}_GAS_PRICE_ORACLE_URL")).ok();

        let speed_type = match env::var(format!("{prefix}_GAS_PRICE_SPEED_TYPE")) {
            Ok(raw) => raw
                .parse::<GasPriceSpeed>()
                .map_err(|_| invalid(prefix, "GAS_PRICE_SPEED_TYPE", "unknown speed tier"))?,
            Err(_) => DEFAULT_GAS_PRICE_SPEED,
        };

        let update_interval_ms = match env::var(format!("{prefix}_GAS_PRICE_UPDATE_INTERVAL")) {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                invalid(prefix, "GAS_PRICE_UPDATE_INTERVAL", "expected milliseconds")
            })?,
            Err(_) => DEFAULT_GAS_PRICE_UPDATE_INTERVAL_MS,
        };

        let fallback_price = required(prefix, "GAS_PRICE_FALLBACK")?
            .parse::<u128>()
            .map_err(|_| invalid(prefix, "GAS_PRICE_FALLBACK", "expected a wei amount"))?;

        let bridge_address = required(prefix, "BRIDGE_ADDRESS")?
            .parse::<Address>()
            .map_err(|e| invalid(prefix, "BRIDGE_ADDRESS", &e.to_string()))?;

        let rpc_url = required(prefix, "RPC_URL")?;

        Ok(Self {
            side,
            oracle_url,
            speed_type,
            update_interval: Duration::from_millis(update_interval_ms),
            fallback_price,
            bridge_address,
            rpc_url,
        })
    }
}

fn required(prefix: &str, name: &str) -> Result<String, ConfigError> {
    let var = format!("{prefix}_{name}");
    env::var(&var).map_err(|_| ConfigError::MissingEnv(var))
}

fn invalid(prefix: &str, name: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnv {
        name: format!("{prefix}_{name}"),
        reason: reason.to_string(),
    }
}
