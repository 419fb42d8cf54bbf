use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::abi::{AbiError, DecodedOutputs};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TournamentIdError {
    #[error("Tournament ID is empty")]
    Empty,

    #[error("Invalid tournament ID: {0}")]
    Invalid(String),
}

/// On-chain state returned by `tournaments(id)`.
///
/// Pools are raw base units as stored by the contract; `end_time` is a unix
/// timestamp in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentDetails {
    pub prize_pool: u128,
    pub seed_pool: u128,
    pub end_time: u64,
}

impl TournamentDetails {
    pub fn from_outputs(outputs: &DecodedOutputs) -> Result<Self, AbiError> {
        let end_time = outputs.uint("endTime")?;
        Ok(Self {
            prize_pool: outputs.uint("prizePool")?,
            seed_pool: outputs.uint("seedPool")?,
            end_time: u64::try_from(end_time)
                .map_err(|_| AbiError::ValueOutOfRange("endTime".to_string()))?,
        })
    }

    /// One-line display form shown under "Tournament Details".
    pub fn summary(&self) -> String {
        format!(
            "Prize Pool: {} | Seed Pool: {} | Ends At: {}",
            self.prize_pool, self.seed_pool, self.end_time
        )
    }

    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.end_time).ok()?;
        DateTime::<Utc>::from_timestamp(secs, 0)
    }
}

/// Reads a tournament id the way a leading-integer parse does: surrounding
/// whitespace is ignored, the leading run of digits is taken, anything after
/// it is dropped. "12abc" is 12; "abc" is an error.
pub fn parse_tournament_id(input: &str) -> Result<u128, TournamentIdError> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Err(TournamentIdError::Empty);
    }

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: &str = {
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        &unsigned[..end]
    };

    if digits.is_empty() {
        return Err(TournamentIdError::Invalid(input.trim().to_string()));
    }

    digits
        .parse::<u128>()
        .map_err(|_| TournamentIdError::Invalid(input.trim().to_string()))
}
