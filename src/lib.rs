//! Gas price estimation service for a cross-chain bridge relayer.
//!
//! Each bridged network ("home" and "foreign") gets an independently
//! refreshed gas price: an external oracle is consulted first, the bridge
//! contract's on-chain price is the fallback, and the last known value is
//! kept when both sources fail. Transaction submission reads the cached
//! state and applies an optional operator override, so a slow or failing
//! data source never blocks a transaction.

pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod services;
