//! On-chain fallback price source.
//!
//! Bridge contracts expose the gas price most recently pushed on-chain
//! through a public `gasPrice()` accessor; this module reads it with a plain
//! `eth_call` when the oracle is unavailable.

use async_trait::async_trait;

use alloy::{
    primitives::{keccak256, Address, Bytes, TxKind, U256},
    providers::{Provider, RootProvider},
    rpc::types::{TransactionInput, TransactionRequest},
};

use crate::models::ContractError;

#[cfg(test)]
use mockall::automock;

/// Interface for reading the bridge contract's current gas price.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait BridgeContractTrait: Send + Sync {
    /// Returns the contract's gas price in wei.
    async fn gas_price(&self) -> Result<u128, ContractError>;
}

/// Bridge contract bound to an EVM JSON-RPC endpoint.
#[derive(Clone)]
pub struct EvmBridgeContract {
    provider: RootProvider,
    address: Address,
}

impl EvmBridgeContract {
    pub fn new(rpc_url: &str, address: Address) -> Result<Self, ContractError> {
        let url = rpc_url
            .parse()
            .map_err(|e| ContractError::Transport(format!("Invalid RPC URL: {e}")))?;
        Ok(Self {
            provider: RootProvider::new_http(url),
            address,
        })
    }
}

#[async_trait]
impl BridgeContractTrait for EvmBridgeContract {
    async fn gas_price(&self) -> Result<u128, ContractError> {
        let selector = &keccak256(b"gasPrice()")[..4];
        let call = TransactionRequest {
            to: Some(TxKind::Call(self.address)),
            input: TransactionInput::new(Bytes::copy_from_slice(selector)),
            ..Default::default()
        };

        let raw = self
            .provider
            .call(call)
            .await
            .map_err(|e| ContractError::Transport(e.to_string()))?;

        decode_uint_word(&raw)
    }
}

/// Decodes a single ABI-encoded `uint256` return word into a wei amount.
fn decode_uint_word(raw: &Bytes) -> Result<u128, ContractError> {
    if raw.len() != 32 {
        return Err(ContractError::InvalidResponse(format!(
            "expected a 32-byte return word, got {} bytes",
            raw.len()
        )));
    }
    U256::from_be_slice(raw)
        .try_into()
        .map_err(|_| ContractError::InvalidResponse("gas price exceeds u128".to_string()))
}
