//! Per-side cached gas price state and its refresh scheduler.
//!
//! Each chain side owns one [`GasPriceService`]. A repeating task refreshes
//! the cached state through the fallback chain while the submission path
//! reads snapshots and applies operator overrides, so a slow or failing data
//! source never blocks a transaction.

use std::sync::Arc;

use log::{debug, info};
use tokio::{sync::RwLock, time::sleep};

use crate::{
    config::GasPriceConfig,
    models::{GasPriceOption, GasPriceState},
};

use super::{
    contract::BridgeContractTrait, fetcher::fetch_gas_price, oracle::GasPriceOracleTrait,
    resolver::resolve_gas_price_option,
};

/// Gas price state and refresh logic for one chain side.
///
/// The state lives behind a single lock and is replaced wholesale on each
/// refresh, so concurrent readers always observe a consistent
/// price/quotes pair.
pub struct GasPriceService<O, C>
where
    O: GasPriceOracleTrait,
    C: BridgeContractTrait,
{
    config: GasPriceConfig,
    oracle: Option<O>,
    contract: C,
    state: RwLock<GasPriceState>,
}

impl<O, C> GasPriceService<O, C>
where
    O: GasPriceOracleTrait,
    C: BridgeContractTrait,
{
    /// Creates a service seeded with the configured fallback price and no
    /// oracle quotes.
    pub fn new(config: GasPriceConfig, oracle: Option<O>, contract: C) -> Self {
        let state = RwLock::new(GasPriceState {
            price: config.fallback_price,
            oracle_prices: None,
        });
        Self {
            config,
            oracle,
            contract,
            state,
        }
    }

    /// Snapshot of the cached state.
    pub async fn current(&self) -> GasPriceState {
        self.state.read().await.clone()
    }

    /// Effective gas price for one transaction, in wei.
    ///
    /// Performs no I/O; resolves the operator's option against a snapshot of
    /// the cached state.
    pub async fn resolve(&self, option: Option<&GasPriceOption>) -> u128 {
        let state = self.current().await;
        resolve_gas_price_option(option, state.price, state.oracle_prices.as_ref())
    }

    /// Runs one refresh cycle.
    ///
    /// A fetched price replaces the cached state wholesale. When both
    /// sources failed, the previous price is kept but the oracle quotes are
    /// dropped: tier data is only ever as fresh as the last successful
    /// oracle call.
    pub async fn refresh(&self) {
        let fetched = fetch_gas_price(
            self.config.side,
            self.config.speed_type,
            self.oracle.as_ref(),
            &self.contract,
        )
        .await;

        let mut state = self.state.write().await;
        let previous_price = state.price;
        *state = match fetched.price {
            Some(price) => GasPriceState {
                price,
                oracle_prices: fetched.oracle_prices,
            },
            None => GasPriceState {
                price: previous_price,
                oracle_prices: None,
            },
        };
        debug!("{} gas price is {} wei", self.config.side, state.price);
    }

    /// Refreshes the cached price forever at the configured interval.
    ///
    /// The first cycle runs immediately. The next tick is armed only after
    /// the current cycle has settled, so at most one refresh is in flight
    /// per side. There is no cancellation; the task lives until the process
    /// exits.
    pub async fn start(self: Arc<Self>) {
        let interval = self.config.update_interval;
        info!(
            "Starting {} gas price refresh every {}ms",
            self.config.side,
            interval.as_millis()
        );
        loop {
            self.refresh().await;
            sleep(interval).await;
        }
    }
}
