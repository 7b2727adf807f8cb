use crate::models::GasPriceSpeed;

/// Default delay between gas price refresh cycles (10 minutes).
pub const DEFAULT_GAS_PRICE_UPDATE_INTERVAL_MS: u64 = 600_000;

/// Speed tier used for the oracle's normalized price when none is configured.
pub const DEFAULT_GAS_PRICE_SPEED: GasPriceSpeed = GasPriceSpeed::Standard;

/// Request timeout for the gas price oracle HTTP client.
pub const ORACLE_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Number of wei in one gwei.
pub const WEI_IN_GWEI: f64 = 1e9;
