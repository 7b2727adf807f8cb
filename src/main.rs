//! Bridge gas price service entry point.
//!
//! Reads per-side configuration from the environment, wires an oracle client
//! and a bridge contract source for each chain side, and runs one refresh
//! task per side until the process is terminated.

use std::sync::Arc;

use bridge_gas_service::{
    config::GasPriceConfig,
    logging::setup_logging,
    models::ChainSide,
    services::gas_price::{EvmBridgeContract, GasPriceService, HttpGasPriceOracle},
};
use color_eyre::Result;
use dotenvy::dotenv;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();
    setup_logging();

    let mut handles = Vec::new();
    for side in ChainSide::ALL {
        let config = GasPriceConfig::from_env(side)?;

        let oracle = match &config.oracle_url {
            Some(url) => Some(HttpGasPriceOracle::new(url.clone())?),
            None => None,
        };
        let contract = EvmBridgeContract::new(&config.rpc_url, config.bridge_address)?;

        let service = Arc::new(GasPriceService::new(config, oracle, contract));
        info!("Initialized {side} gas price service");
        handles.push(tokio::spawn(service.start()));
    }

    futures::future::join_all(handles).await;
    Ok(())
}
