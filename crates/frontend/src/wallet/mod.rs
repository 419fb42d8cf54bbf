//! Browser wallet access and the page actions built on it.

pub mod controller;
pub mod eip1193;
pub mod error;
#[cfg(test)]
pub mod mock;
pub mod provider;
pub mod rpc;
pub mod session;

pub use controller::{WalletController, WalletState};
pub use session::{Activity, SessionState};

use leptos::prelude::*;

/// Controller provided by `App`.
pub fn use_wallet() -> WalletController {
    use_context::<WalletController>().expect("WalletController not provided in context")
}
