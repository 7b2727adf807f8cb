//! HTTP client for the external gas price oracle.
//!
//! The oracle quotes a gwei price per speed tier together with health and
//! block metadata. One request is made per refresh cycle; retrying across
//! cycles is the scheduler's job, not this client's.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    constants::ORACLE_HTTP_TIMEOUT_SECONDS,
    models::{OracleError, OracleGasPrices},
};

#[cfg(test)]
use mockall::automock;

/// Interface for fetching per-tier gas prices from an oracle service.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait GasPriceOracleTrait: Send + Sync {
    /// Fetches the oracle's current per-tier gas prices.
    async fn fetch_gas_prices(&self) -> Result<OracleGasPrices, OracleError>;
}

/// Gas price oracle backed by an HTTP JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpGasPriceOracle {
    client: Client,
    url: String,
}

impl HttpGasPriceOracle {
    pub fn new(url: String) -> Result<Self, OracleError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(ORACLE_HTTP_TIMEOUT_SECONDS))
            .build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl GasPriceOracleTrait for HttpGasPriceOracle {
    async fn fetch_gas_prices(&self) -> Result<OracleGasPrices, OracleError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;

        response
            .json::<OracleGasPrices>()
            .await
            .map_err(|e| OracleError::InvalidResponse(e.to_string()))
    }
}
