//! Contract interfaces.
//!
//! The JSON ABIs under `abi/` are schema constants: they are embedded at
//! compile time and parsed once when the application starts.

pub mod codec;
pub mod schema;

pub use codec::{DecodedOutputs, Token};
pub use schema::{AbiItem, AbiParam, ContractAbi, StateMutability};

use thiserror::Error;

pub const TOKEN_ABI_JSON: &str = include_str!("../../abi/weth.json");
pub const TOURNAMENT_ABI_JSON: &str = include_str!("../../abi/tournament.json");

#[derive(Debug, Error)]
pub enum AbiError {
    #[error("Invalid ABI JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Unsupported ABI type: {0}")]
    UnsupportedType(String),

    #[error("Value does not match ABI type {0}")]
    TypeMismatch(String),

    #[error("Value out of range for {0}")]
    ValueOutOfRange(String),

    #[error("{function} expects {expected} arguments, got {got}")]
    ArgumentCount {
        function: String,
        expected: usize,
        got: usize,
    },

    #[error("Return data too short: expected {expected} bytes, got {got}")]
    ShortData { expected: usize, got: usize },

    #[error("Missing output: {0}")]
    MissingOutput(String),

    #[error("Invalid hex data: {0}")]
    InvalidHex(String),
}

/// Wrapping-token interface (`deposit`).
pub fn token_abi() -> Result<ContractAbi, AbiError> {
    ContractAbi::from_json(TOKEN_ABI_JSON)
}

/// Tournament contract interface (`tournaments(uint256)`).
pub fn tournament_abi() -> Result<ContractAbi, AbiError> {
    ContractAbi::from_json(TOURNAMENT_ABI_JSON)
}
