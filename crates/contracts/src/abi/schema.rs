use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use super::codec::{self, DecodedOutputs, Token};
use super::AbiError;

/// One `inputs`/`outputs` entry of a Solidity JSON ABI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    Pure,
    View,
    Nonpayable,
    Payable,
}

/// A single ABI item. Only `function` items are callable; events, errors and
/// constructors are kept so whole compiler output can be embedded as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiItem {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<StateMutability>,
}

impl AbiItem {
    pub fn is_function(&self) -> bool {
        self.kind == "function"
    }

    /// Canonical signature used for selector hashing: `name(type,type)`.
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self.inputs.iter().map(|p| p.kind.as_str()).collect();
        format!("{}({})", self.name, types.join(","))
    }

    /// First four bytes of keccak256(signature).
    pub fn selector(&self) -> [u8; 4] {
        let digest = Keccak256::digest(self.signature().as_bytes());
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&digest[..4]);
        selector
    }

    pub fn is_payable(&self) -> bool {
        self.state_mutability == Some(StateMutability::Payable)
    }

    /// Selector followed by the head-encoded arguments.
    pub fn encode_call(&self, args: &[Token]) -> Result<Vec<u8>, AbiError> {
        if args.len() != self.inputs.len() {
            return Err(AbiError::ArgumentCount {
                function: self.name.clone(),
                expected: self.inputs.len(),
                got: args.len(),
            });
        }

        let mut data = Vec::with_capacity(4 + 32 * args.len());
        data.extend_from_slice(&self.selector());
        for (param, token) in self.inputs.iter().zip(args) {
            data.extend_from_slice(&codec::encode_word(&param.kind, token)?);
        }
        Ok(data)
    }

    pub fn decode_outputs(&self, data: &[u8]) -> Result<DecodedOutputs, AbiError> {
        codec::decode_words(&self.outputs, data)
    }
}

/// A contract interface: the parsed JSON ABI array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractAbi {
    items: Vec<AbiItem>,
}

impl ContractAbi {
    pub fn from_json(json: &str) -> Result<Self, AbiError> {
        let abi: ContractAbi = serde_json::from_str(json)?;
        for item in abi.functions() {
            for param in item.inputs.iter().chain(item.outputs.iter()) {
                codec::check_supported(&param.kind)?;
            }
        }
        Ok(abi)
    }

    pub fn functions(&self) -> impl Iterator<Item = &AbiItem> {
        self.items.iter().filter(|item| item.is_function())
    }

    pub fn function(&self, name: &str) -> Result<&AbiItem, AbiError> {
        self.functions()
            .find(|item| item.name == name)
            .ok_or_else(|| AbiError::UnknownFunction(name.to_string()))
    }
}
