//! Ether denominations and JSON-RPC hex quantities.
//!
//! Amounts are carried as `u128` wei. That covers every realistic balance
//! (about 3.4 * 10^20 ETH) while keeping the arithmetic exact.

use thiserror::Error;

pub const ETHER_DECIMALS: u32 = 18;
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitsError {
    #[error("Amount is empty")]
    Empty,

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Too many decimal places (max {max})")]
    TooManyDecimals { max: u32 },

    #[error("Amount is too large")]
    Overflow,

    #[error("Invalid hex quantity: {0}")]
    InvalidQuantity(String),
}

/// Parses a decimal ETH amount ("0.5", "1", ".25") into wei.
pub fn parse_ether(input: &str) -> Result<u128, UnitsError> {
    parse_units(input, ETHER_DECIMALS)
}

/// Parses a decimal amount with `decimals` fractional digits into base units.
pub fn parse_units(input: &str, decimals: u32) -> Result<u128, UnitsError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UnitsError::Empty);
    }

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(UnitsError::InvalidNumber(trimmed.to_string()));
    }
    if fraction.len() > decimals as usize {
        return Err(UnitsError::TooManyDecimals { max: decimals });
    }

    let scale = 10u128.pow(decimals);
    let whole_value = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().map_err(|_| UnitsError::Overflow)?
    };

    let mut fraction_value = 0u128;
    if !fraction.is_empty() {
        let padded = format!("{:0<width$}", fraction, width = decimals as usize);
        fraction_value = padded.parse::<u128>().map_err(|_| UnitsError::Overflow)?;
    }

    whole_value
        .checked_mul(scale)
        .and_then(|v| v.checked_add(fraction_value))
        .ok_or(UnitsError::Overflow)
}

/// ETH rendering rounded half-up to a fixed number of decimals.
///
/// `decimals` is clamped to 18.
pub fn format_ether_fixed(wei: u128, decimals: u32) -> String {
    let decimals = decimals.min(ETHER_DECIMALS);
    let scale = 10u128.pow(ETHER_DECIMALS - decimals);

    let mut rounded = wei / scale;
    if scale > 1 && wei % scale >= scale / 2 {
        rounded += 1;
    }

    if decimals == 0 {
        return rounded.to_string();
    }

    let unit = 10u128.pow(decimals);
    format!(
        "{}.{:0width$}",
        rounded / unit,
        rounded % unit,
        width = decimals as usize
    )
}

/// Parses a JSON-RPC quantity ("0x1bc16d674ec80000").
pub fn parse_quantity(input: &str) -> Result<u128, UnitsError> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .ok_or_else(|| UnitsError::InvalidQuantity(input.to_string()))?;

    if digits.is_empty() {
        return Err(UnitsError::InvalidQuantity(input.to_string()));
    }

    u128::from_str_radix(digits, 16).map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow => UnitsError::Overflow,
        _ => UnitsError::InvalidQuantity(input.to_string()),
    })
}

/// Renders a JSON-RPC quantity: lowercase hex, no leading zeros, `0x0` for zero.
pub fn to_quantity(value: u128) -> String {
    format!("0x{:x}", value)
}
