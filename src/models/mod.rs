//! Data types shared across the gas price service.

pub mod chain_side;
pub mod error;
pub mod gas_price;

pub use chain_side::*;
pub use error::*;
pub use gas_price::*;
