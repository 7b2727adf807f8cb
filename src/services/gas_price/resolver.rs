//! Operator override resolution at transaction-submission time.
//!
//! Resolution is pure and never suspends, so the submission path can run it
//! concurrently with an in-flight refresh against a state snapshot.

use log::{debug, warn};

use crate::{
    constants::WEI_IN_GWEI,
    models::{GasPriceOption, GasPriceSpeed, OracleGasPrices},
};

/// Converts a gwei quote to an integer wei amount.
///
/// Exact for values quoted to at most nine decimal places of gwei, which is
/// the full wei resolution.
pub fn gwei_to_wei(gwei: f64) -> u128 {
    (gwei * WEI_IN_GWEI).round() as u128
}

/// Resolves the effective gas price for one transaction, in wei.
///
/// An operator-supplied absolute value always wins. Speed requests are
/// served from the cached oracle quotes and degrade to the cached price when
/// no quotes are available or the tier name is unknown; an override is never
/// allowed to fail a submission.
pub fn resolve_gas_price_option(
    option: Option<&GasPriceOption>,
    cached_price: u128,
    oracle_prices: Option<&OracleGasPrices>,
) -> u128 {
    match option {
        None => cached_price,
        Some(GasPriceOption::GasPrice(value)) => match value.parse::<u128>() {
            Ok(price) => price,
            Err(_) => {
                warn!("Ignoring unparsable gas price override {value:?}");
                cached_price
            }
        },
        Some(GasPriceOption::Speed(name)) => {
            let Some(prices) = oracle_prices else {
                debug!("No oracle gas prices cached, ignoring speed override {name:?}");
                return cached_price;
            };
            match name.parse::<GasPriceSpeed>() {
                Ok(speed) => gwei_to_wei(prices.tier(speed)),
                Err(_) => {
                    warn!("Unknown gas price speed {name:?}, using cached price");
                    cached_price
                }
            }
        }
        Some(GasPriceOption::Unknown) => cached_price,
    }
}
