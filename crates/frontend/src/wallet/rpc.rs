//! Typed wrappers over the raw provider request channel.

use contracts::abi::codec::{from_hex_data, to_hex_data};
use contracts::network::{AddChainParams, SwitchChainParams};
use contracts::{parse_quantity, Address};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::WalletError;
use super::provider::WalletProvider;

/// `eth_sendTransaction` payload. Gas, fees and nonce are left to the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    #[serde(default)]
    pub block_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TransactionReceipt {
    /// Post-Byzantium receipts carry `status`; a missing one counts as success.
    pub fn succeeded(&self) -> bool {
        !matches!(self.status.as_deref(), Some("0x0") | Some("0x00"))
    }
}

pub struct WalletRpc<'a> {
    provider: &'a dyn WalletProvider,
}

impl<'a> WalletRpc<'a> {
    pub fn new(provider: &'a dyn WalletProvider) -> Self {
        Self { provider }
    }

    async fn call_method(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        log::debug!("wallet request: {}", method);
        self.provider
            .request(method, params)
            .await
            .map_err(|source| WalletError::Rpc {
                method: method.to_string(),
                source,
            })
    }

    async fn call_string(&self, method: &str, params: Value) -> Result<String, WalletError> {
        match self.call_method(method, params).await? {
            Value::String(s) => Ok(s),
            other => Err(WalletError::bad_response(method, other.to_string())),
        }
    }

    async fn call_accounts(&self, method: &str) -> Result<Vec<Address>, WalletError> {
        let value = self.call_method(method, Value::Null).await?;
        let raw: Vec<String> = serde_json::from_value(value)
            .map_err(|e| WalletError::bad_response(method, e.to_string()))?;
        raw.iter()
            .map(|a| Address::parse(a).map_err(WalletError::from))
            .collect()
    }

    /// Accounts the site is already authorized for; never prompts.
    pub async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.call_accounts("eth_accounts").await
    }

    /// Prompts the user to authorize the site.
    pub async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.call_accounts("eth_requestAccounts").await
    }

    pub async fn chain_id(&self) -> Result<String, WalletError> {
        self.call_string("eth_chainId", Value::Null).await
    }

    pub async fn switch_chain(&self, params: &SwitchChainParams) -> Result<(), WalletError> {
        self.call_method("wallet_switchEthereumChain", json!([params]))
            .await
            .map(|_| ())
    }

    pub async fn add_chain(&self, params: &AddChainParams) -> Result<(), WalletError> {
        self.call_method("wallet_addEthereumChain", json!([params]))
            .await
            .map(|_| ())
    }

    /// Native balance in wei at the latest block.
    pub async fn get_balance(&self, address: &Address) -> Result<u128, WalletError> {
        let raw = self
            .call_string("eth_getBalance", json!([address, "latest"]))
            .await?;
        Ok(parse_quantity(&raw)?)
    }

    /// Read-only contract call; returns the raw return data.
    pub async fn call(&self, to: &Address, data: &[u8]) -> Result<Vec<u8>, WalletError> {
        let raw = self
            .call_string(
                "eth_call",
                json!([{ "to": to, "data": to_hex_data(data) }, "latest"]),
            )
            .await?;
        Ok(from_hex_data(&raw)?)
    }

    /// Hands the transaction to the wallet for signing; returns its hash.
    pub async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, WalletError> {
        self.call_string("eth_sendTransaction", json!([tx])).await
    }

    pub async fn transaction_receipt(
        &self,
        tx_hash: &str,
    ) -> Result<Option<TransactionReceipt>, WalletError> {
        let method = "eth_getTransactionReceipt";
        let value = self.call_method(method, json!([tx_hash])).await?;
        if value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| WalletError::bad_response(method, e.to_string()))
    }

    /// Polls until the transaction is mined. There is no upper bound: a
    /// dropped transaction keeps the caller waiting.
    pub async fn wait_for_receipt(
        &self,
        tx_hash: &str,
        poll_interval_ms: u32,
    ) -> Result<TransactionReceipt, WalletError> {
        loop {
            if let Some(receipt) = self.transaction_receipt(tx_hash).await? {
                return Ok(receipt);
            }
            self.provider.sleep(poll_interval_ms).await;
        }
    }
}
