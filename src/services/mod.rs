//! Service implementations backing the gas price core.

pub mod gas_price;

pub use gas_price::*;
