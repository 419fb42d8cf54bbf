//! Head-only ABI encoding for the static types these contracts use.
//!
//! Every supported value occupies exactly one 32-byte word, so calls and
//! return data are plain word sequences with no offsets.

use crate::shared::address::Address;

use super::schema::AbiParam;
use super::AbiError;

pub type Word = [u8; 32];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Big-endian unsigned integer of any `uintN` width.
    Uint(Word),
    Address(Address),
    Bool(bool),
    FixedBytes(Word),
}

impl Token {
    pub fn uint(value: u128) -> Self {
        let mut word = [0u8; 32];
        word[16..].copy_from_slice(&value.to_be_bytes());
        Token::Uint(word)
    }

    /// Narrows a `uint` word to `u128`, failing when the high half is set.
    pub fn as_u128(&self) -> Option<u128> {
        match self {
            Token::Uint(word) if word[..16].iter().all(|b| *b == 0) => {
                let mut low = [0u8; 16];
                low.copy_from_slice(&word[16..]);
                Some(u128::from_be_bytes(low))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StaticKind {
    Uint(usize),
    Address,
    Bool,
    Bytes32,
}

fn classify(kind: &str) -> Result<StaticKind, AbiError> {
    match kind {
        "address" => return Ok(StaticKind::Address),
        "bool" => return Ok(StaticKind::Bool),
        "bytes32" => return Ok(StaticKind::Bytes32),
        _ => {}
    }

    if let Some(bits) = kind.strip_prefix("uint") {
        let bits: usize = if bits.is_empty() {
            256
        } else {
            bits.parse()
                .map_err(|_| AbiError::UnsupportedType(kind.to_string()))?
        };
        if bits > 0 && bits <= 256 && bits % 8 == 0 {
            return Ok(StaticKind::Uint(bits));
        }
    }

    Err(AbiError::UnsupportedType(kind.to_string()))
}

pub fn check_supported(kind: &str) -> Result<(), AbiError> {
    classify(kind).map(|_| ())
}

pub fn encode_word(kind: &str, token: &Token) -> Result<Word, AbiError> {
    let mut word = [0u8; 32];
    match (classify(kind)?, token) {
        (StaticKind::Uint(bits), Token::Uint(value)) => {
            let used = bits / 8;
            if value[..32 - used].iter().any(|b| *b != 0) {
                return Err(AbiError::ValueOutOfRange(kind.to_string()));
            }
            word = *value;
        }
        (StaticKind::Address, Token::Address(addr)) => {
            word[12..].copy_from_slice(addr.as_bytes());
        }
        (StaticKind::Bool, Token::Bool(flag)) => {
            word[31] = u8::from(*flag);
        }
        (StaticKind::Bytes32, Token::FixedBytes(bytes)) => {
            word = *bytes;
        }
        _ => return Err(AbiError::TypeMismatch(kind.to_string())),
    }
    Ok(word)
}

fn decode_word(kind: &str, word: &Word) -> Result<Token, AbiError> {
    match classify(kind)? {
        StaticKind::Uint(bits) => {
            let used = bits / 8;
            if word[..32 - used].iter().any(|b| *b != 0) {
                return Err(AbiError::ValueOutOfRange(kind.to_string()));
            }
            Ok(Token::Uint(*word))
        }
        StaticKind::Address => {
            if word[..12].iter().any(|b| *b != 0) {
                return Err(AbiError::ValueOutOfRange(kind.to_string()));
            }
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(&word[12..]);
            Ok(Token::Address(Address::from_bytes(bytes)))
        }
        StaticKind::Bool => match (word[..31].iter().all(|b| *b == 0), word[31]) {
            (true, 0) => Ok(Token::Bool(false)),
            (true, 1) => Ok(Token::Bool(true)),
            _ => Err(AbiError::ValueOutOfRange(kind.to_string())),
        },
        StaticKind::Bytes32 => Ok(Token::FixedBytes(*word)),
    }
}

/// Decoded return values, addressable by position or by output name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedOutputs {
    values: Vec<(String, Token)>,
}

impl DecodedOutputs {
    pub fn get(&self, name: &str) -> Option<&Token> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, token)| token)
    }

    pub fn at(&self, index: usize) -> Option<&Token> {
        self.values.get(index).map(|(_, token)| token)
    }

    /// Named `uint` output narrowed to `u128`.
    pub fn uint(&self, name: &str) -> Result<u128, AbiError> {
        let token = self
            .get(name)
            .ok_or_else(|| AbiError::MissingOutput(name.to_string()))?;
        token
            .as_u128()
            .ok_or_else(|| AbiError::ValueOutOfRange(name.to_string()))
    }
}

pub fn decode_words(params: &[AbiParam], data: &[u8]) -> Result<DecodedOutputs, AbiError> {
    let needed = params.len() * 32;
    if data.len() < needed {
        return Err(AbiError::ShortData {
            expected: needed,
            got: data.len(),
        });
    }

    let mut values = Vec::with_capacity(params.len());
    for (index, param) in params.iter().enumerate() {
        let mut word = [0u8; 32];
        word.copy_from_slice(&data[index * 32..(index + 1) * 32]);
        values.push((param.name.clone(), decode_word(&param.kind, &word)?));
    }
    Ok(DecodedOutputs { values })
}

/// `0x`-prefixed lowercase hex, the JSON-RPC `data` encoding.
pub fn to_hex_data(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

pub fn from_hex_data(input: &str) -> Result<Vec<u8>, AbiError> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .ok_or_else(|| AbiError::InvalidHex(input.to_string()))?;
    hex::decode(digits).map_err(|_| AbiError::InvalidHex(input.to_string()))
}
