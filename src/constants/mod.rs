pub mod gas_price;

pub use gas_price::*;
