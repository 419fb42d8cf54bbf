//! Chain and deployment configuration.
//!
//! The application is built against one network. Its parameters live in an
//! embedded TOML document so alternate networks (tests, forks) can be
//! described by parsing a different document instead of editing constants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::abi::{self, AbiError, ContractAbi};
use crate::shared::address::Address;
use crate::shared::units;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Failed to load contract ABI: {0}")]
    Abi(#[from] AbiError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub chain_name: String,
    pub rpc_url: String,
    pub block_explorer_url: String,
    pub native_currency: NativeCurrency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAddresses {
    /// Wrapping token that accepts `deposit()`.
    pub token: Address,
    /// Tournament registry read through `tournaments(uint256)`.
    pub tournament: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSettings {
    pub receipt_poll_interval_ms: u32,
    pub balance_decimals: u32,
    pub toast_duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub contracts: ContractAddresses,
    pub wallet: WalletSettings,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[network]
chain_id = 84532
chain_name = "Base Sepolia"
rpc_url = "https://sepolia.base.org"
block_explorer_url = "https://sepolia.basescan.org"

[network.native_currency]
name = "ETH"
symbol = "ETH"
decimals = 18

[contracts]
token = "0x4200000000000000000000000000000000000006"
tournament = "0x3f1c8b2a9e5d4c7b6a0f9e8d7c6b5a4938271605"

[wallet]
receipt_poll_interval_ms = 2000
balance_decimals = 4
toast_duration_ms = 4000
"#;

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.network.chain_id == 0 {
            return Err(ConfigError::Invalid("network.chain_id must be non-zero".into()));
        }
        if self.network.rpc_url.trim().is_empty() {
            return Err(ConfigError::Invalid("network.rpc_url is empty".into()));
        }
        if self.network.block_explorer_url.trim().is_empty() {
            return Err(ConfigError::Invalid("network.block_explorer_url is empty".into()));
        }
        if self.wallet.receipt_poll_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "wallet.receipt_poll_interval_ms must be non-zero".into(),
            ));
        }
        if self.wallet.balance_decimals > units::ETHER_DECIMALS {
            return Err(ConfigError::Invalid(format!(
                "wallet.balance_decimals must be at most {}",
                units::ETHER_DECIMALS
            )));
        }
        Ok(())
    }
}

/// Parameters for `wallet_switchEthereumChain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchChainParams {
    pub chain_id: String,
}

/// Parameters for `wallet_addEthereumChain` (EIP-3085).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    pub chain_id: String,
    pub chain_name: String,
    pub rpc_urls: Vec<String>,
    pub native_currency: NativeCurrency,
    pub block_explorer_urls: Vec<String>,
}

impl NetworkConfig {
    /// Chain id as the wallet reports it from `eth_chainId`.
    pub fn chain_id_hex(&self) -> String {
        units::to_quantity(u128::from(self.chain_id))
    }

    /// Compares a wallet-reported chain id, ignoring hex casing and padding.
    pub fn is_current_chain(&self, reported: &str) -> bool {
        units::parse_quantity(reported)
            .map(|id| id == u128::from(self.chain_id))
            .unwrap_or(false)
    }

    pub fn switch_chain_params(&self) -> SwitchChainParams {
        SwitchChainParams {
            chain_id: self.chain_id_hex(),
        }
    }

    pub fn add_chain_params(&self) -> AddChainParams {
        AddChainParams {
            chain_id: self.chain_id_hex(),
            chain_name: self.chain_name.clone(),
            rpc_urls: vec![self.rpc_url.clone()],
            native_currency: self.native_currency.clone(),
            block_explorer_urls: vec![self.block_explorer_url.clone()],
        }
    }

    pub fn explorer_address_url(&self, address: &str) -> String {
        format!(
            "{}/address/{}",
            self.block_explorer_url.trim_end_matches('/'),
            address
        )
    }

    pub fn explorer_tx_url(&self, tx_hash: &str) -> String {
        format!(
            "{}/tx/{}",
            self.block_explorer_url.trim_end_matches('/'),
            tx_hash
        )
    }
}

/// Configuration plus the parsed contract interfaces. Built once at startup
/// and shared read-only with the component tree.
#[derive(Debug, Clone)]
pub struct Deployment {
    pub config: AppConfig,
    pub token_abi: ContractAbi,
    pub tournament_abi: ContractAbi,
}

impl Deployment {
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let token_abi = abi::token_abi()?;
        let tournament_abi = abi::tournament_abi()?;

        // Fail at startup rather than on the first click.
        token_abi.function("deposit")?;
        tournament_abi.function("tournaments")?;

        Ok(Self {
            config,
            token_abi,
            tournament_abi,
        })
    }

    pub fn load_default() -> Result<Self, ConfigError> {
        Self::new(AppConfig::load_default()?)
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.config.network
    }
}
