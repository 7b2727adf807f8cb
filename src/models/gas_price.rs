use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumString};

/// Named urgency levels quoted by the gas price oracle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GasPriceSpeed {
    Instant,
    Fast,
    Standard,
    Slow,
}

/// Per-tier gas prices quoted by the oracle, in gwei, plus oracle metadata.
///
/// Immutable once deserialized. Fields the oracle adds beyond the known set
/// are carried through opaquely in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleGasPrices {
    pub health: bool,
    #[serde(default)]
    pub block_time: f64,
    #[serde(default)]
    pub block_number: u64,
    pub instant: f64,
    pub fast: f64,
    pub standard: f64,
    pub slow: f64,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl OracleGasPrices {
    /// Gwei value quoted for the given speed tier.
    pub fn tier(&self, speed: GasPriceSpeed) -> f64 {
        match speed {
            GasPriceSpeed::Instant => self.instant,
            GasPriceSpeed::Fast => self.fast,
            GasPriceSpeed::Standard => self.standard,
            GasPriceSpeed::Slow => self.slow,
        }
    }
}

/// Outcome of one run of the oracle → bridge-contract fallback chain.
///
/// `price` is `None` only when both sources failed. `oracle_prices` is
/// `Some` only when the oracle itself responded.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedGasPrice {
    pub price: Option<u128>,
    pub oracle_prices: Option<OracleGasPrices>,
}

/// Cached gas price state for one chain side.
///
/// Refreshes replace the whole value under its lock; it is never patched
/// field by field, so readers always see a consistent snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct GasPriceState {
    /// Price in wei. Seeded from configuration, then always the most recent
    /// successfully fetched value.
    pub price: u128,
    /// Oracle quotes from the most recent cycle, if that cycle's oracle call
    /// succeeded. Cleared on contract-fallback and total-failure cycles.
    pub oracle_prices: Option<OracleGasPrices>,
}

/// Operator-supplied gas price override for a single transaction.
///
/// Supplied per resolution call and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum GasPriceOption {
    /// Explicit wei amount; always wins over the cached value.
    GasPrice(String),
    /// Named speed tier, resolved against the cached oracle quotes.
    Speed(String),
    /// Unrecognized option types fall back to the cached price.
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle_prices() -> OracleGasPrices {
        serde_json::from_str(
            r#"{
                "health": true,
                "block_number": 8053845,
                "block_time": 13.49,
                "slow": 1.1,
                "standard": 2.5,
                "fast": 5.0,
                "instant": 10.0,
                "health_latest": true
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_oracle_prices_deserialization() {
        let prices = oracle_prices();
        assert!(prices.health);
        assert_eq!(prices.block_number, 8053845);
        assert_eq!(prices.standard, 2.5);
        assert_eq!(
            prices.extra.get("health_latest"),
            Some(&serde_json::Value::Bool(true))
        );
    }

    #[test]
    fn test_tier_accessor() {
        let prices = oracle_prices();
        assert_eq!(prices.tier(GasPriceSpeed::Instant), 10.0);
        assert_eq!(prices.tier(GasPriceSpeed::Fast), 5.0);
        assert_eq!(prices.tier(GasPriceSpeed::Standard), 2.5);
        assert_eq!(prices.tier(GasPriceSpeed::Slow), 1.1);
    }

    #[test]
    fn test_speed_parsing() {
        assert_eq!(
            "standard".parse::<GasPriceSpeed>().unwrap(),
            GasPriceSpeed::Standard
        );
        assert_eq!(
            "INSTANT".parse::<GasPriceSpeed>().unwrap(),
            GasPriceSpeed::Instant
        );
        assert!("warp".parse::<GasPriceSpeed>().is_err());
    }

    #[test]
    fn test_option_deserialization() {
        let option: GasPriceOption =
            serde_json::from_str(r#"{"type": "gasPrice", "value": "1000000000"}"#).unwrap();
        assert_eq!(option, GasPriceOption::GasPrice("1000000000".to_string()));

        let option: GasPriceOption =
            serde_json::from_str(r#"{"type": "speed", "value": "fast"}"#).unwrap();
        assert_eq!(option, GasPriceOption::Speed("fast".to_string()));

        let option: GasPriceOption = serde_json::from_str(r#"{"type": "turbo"}"#).unwrap();
        assert_eq!(option, GasPriceOption::Unknown);
    }
}
