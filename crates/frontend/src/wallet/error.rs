use contracts::{AbiError, AddressError, TournamentIdError, UnitsError};
use thiserror::Error;

use super::provider::ProviderError;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("{method} failed: {source}")]
    Rpc {
        method: String,
        #[source]
        source: ProviderError,
    },

    #[error("Wallet returned no accounts")]
    NoAccounts,

    #[error("Unexpected response to {method}: {detail}")]
    BadResponse { method: String, detail: String },

    #[error("Transaction {0} reverted")]
    Reverted(String),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Units(#[from] UnitsError),

    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error(transparent)]
    TournamentId(#[from] TournamentIdError),
}

impl WalletError {
    pub fn bad_response(method: &str, detail: impl Into<String>) -> Self {
        WalletError::BadResponse {
            method: method.to_string(),
            detail: detail.into(),
        }
    }

    /// EIP-1193 error code when the wallet itself rejected the request.
    pub fn provider_code(&self) -> Option<i64> {
        match self {
            WalletError::Rpc { source, .. } => Some(source.code),
            _ => None,
        }
    }
}
