//! Per-side gas price estimation.
//!
//! A refresh task keeps one [`service::GasPriceService`] per chain side up
//! to date through an ordered fallback chain: the external oracle first, the
//! bridge contract's on-chain price second, and the last known value when
//! both fail. Transaction submission resolves operator overrides against the
//! cached state and never performs I/O.

pub mod contract;
pub mod fetcher;
pub mod oracle;
pub mod resolver;
pub mod service;

pub use contract::*;
pub use fetcher::*;
pub use oracle::*;
pub use resolver::*;
pub use service::*;
