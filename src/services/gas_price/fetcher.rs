//! Ordered fallback chain for one gas price refresh.

use log::warn;

use crate::models::{ChainSide, FetchedGasPrice, GasPriceSpeed};

use super::{contract::BridgeContractTrait, oracle::GasPriceOracleTrait, resolver::gwei_to_wei};

/// Runs the oracle → bridge-contract fallback chain once.
///
/// Each source gets a single attempt. An oracle success short-circuits the
/// chain and the contract is never consulted; an oracle failure falls
/// through to the contract's on-chain price. When both fail no price is
/// returned and the caller keeps whatever it had — a failed cycle must never
/// overwrite a known-good price.
pub async fn fetch_gas_price<O, C>(
    side: ChainSide,
    speed: GasPriceSpeed,
    oracle: Option<&O>,
    contract: &C,
) -> FetchedGasPrice
where
    O: GasPriceOracleTrait,
    C: BridgeContractTrait,
{
    if let Some(oracle) = oracle {
        match oracle.fetch_gas_prices().await {
            Ok(prices) => {
                return FetchedGasPrice {
                    price: Some(gwei_to_wei(prices.tier(speed))),
                    oracle_prices: Some(prices),
                };
            }
            Err(e) => {
                warn!("{side} gas price oracle unavailable, falling back to the bridge contract: {e}");
            }
        }
    }

    match contract.gas_price().await {
        Ok(price) => FetchedGasPrice {
            price: Some(price),
            oracle_prices: None,
        },
        Err(e) => {
            warn!("{side} bridge contract gas price call failed: {e}");
            FetchedGasPrice {
                price: None,
                oracle_prices: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{ContractError, OracleError, OracleGasPrices},
        services::gas_price::{contract::MockBridgeContractTrait, oracle::MockGasPriceOracleTrait},
    };
    use futures::FutureExt;

    fn oracle_prices() -> OracleGasPrices {
        serde_json::from_str(
            r#"{
                "health": true,
                "block_number": 8053845,
                "block_time": 13.49,
                "slow": 1.1,
                "standard": 10.64,
                "fast": 22.0,
                "instant": 40.5
            }"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_oracle_success_never_consults_contract() {
        let mut oracle = MockGasPriceOracleTrait::new();
        oracle
            .expect_fetch_gas_prices()
            .times(1)
            .returning(|| async { Ok(oracle_prices()) }.boxed());
        let mut contract = MockBridgeContractTrait::new();
        contract.expect_gas_price().times(0);

        let fetched =
            fetch_gas_price(ChainSide::Home, GasPriceSpeed::Standard, Some(&oracle), &contract)
                .await;

        assert_eq!(fetched.price, Some(10_640_000_000));
        assert_eq!(fetched.oracle_prices, Some(oracle_prices()));
    }

    #[tokio::test]
    async fn test_oracle_failure_falls_back_to_contract() {
        let mut oracle = MockGasPriceOracleTrait::new();
        oracle.expect_fetch_gas_prices().times(1).returning(|| {
            async { Err(OracleError::InvalidResponse("empty body".to_string())) }.boxed()
        });
        let mut contract = MockBridgeContractTrait::new();
        contract
            .expect_gas_price()
            .times(1)
            .returning(|| async { Ok(2_000_000_000u128) }.boxed());

        let fetched =
            fetch_gas_price(ChainSide::Foreign, GasPriceSpeed::Fast, Some(&oracle), &contract)
                .await;

        assert_eq!(fetched.price, Some(2_000_000_000));
        assert_eq!(fetched.oracle_prices, None);
    }

    #[tokio::test]
    async fn test_both_sources_failing_yields_no_price() {
        let mut oracle = MockGasPriceOracleTrait::new();
        oracle.expect_fetch_gas_prices().times(1).returning(|| {
            async { Err(OracleError::InvalidResponse("timeout".to_string())) }.boxed()
        });
        let mut contract = MockBridgeContractTrait::new();
        contract.expect_gas_price().times(1).returning(|| {
            async { Err(ContractError::Transport("connection refused".to_string())) }.boxed()
        });

        let fetched =
            fetch_gas_price(ChainSide::Home, GasPriceSpeed::Standard, Some(&oracle), &contract)
                .await;

        assert_eq!(fetched.price, None);
        assert_eq!(fetched.oracle_prices, None);
    }

    #[tokio::test]
    async fn test_without_oracle_goes_straight_to_contract() {
        let mut contract = MockBridgeContractTrait::new();
        contract
            .expect_gas_price()
            .times(1)
            .returning(|| async { Ok(3_500_000_000u128) }.boxed());

        let fetched = fetch_gas_price::<MockGasPriceOracleTrait, _>(
            ChainSide::Home,
            GasPriceSpeed::Standard,
            None,
            &contract,
        )
        .await;

        assert_eq!(fetched.price, Some(3_500_000_000));
        assert_eq!(fetched.oracle_prices, None);
    }

    #[tokio::test]
    async fn test_speed_selects_the_configured_tier() {
        let mut oracle = MockGasPriceOracleTrait::new();
        oracle
            .expect_fetch_gas_prices()
            .times(1)
            .returning(|| async { Ok(oracle_prices()) }.boxed());
        let contract = MockBridgeContractTrait::new();

        let fetched =
            fetch_gas_price(ChainSide::Home, GasPriceSpeed::Instant, Some(&oracle), &contract)
                .await;

        assert_eq!(fetched.price, Some(40_500_000_000));
    }
}
