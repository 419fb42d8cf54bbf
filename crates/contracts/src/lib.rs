//! Chain-facing types shared by the tournament wallet front-end.
//!
//! Nothing in this crate touches the browser, so it is tested natively.

pub mod abi;
pub mod domain;
pub mod network;
pub mod shared;

pub use abi::{AbiError, ContractAbi, Token};
pub use domain::tournament::{parse_tournament_id, TournamentDetails, TournamentIdError};
pub use network::{AppConfig, ConfigError, Deployment, NetworkConfig};
pub use shared::address::{format_address, Address, AddressError};
pub use shared::units::{format_ether_fixed, parse_ether, parse_quantity, to_quantity, UnitsError};
