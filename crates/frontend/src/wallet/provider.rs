use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// EIP-1193 rejection: `{ code, message }` as thrown by the injected provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (code {code})")]
pub struct ProviderError {
    pub code: i64,
    pub message: String,
}

impl ProviderError {
    pub const USER_REJECTED: i64 = 4001;
    pub const UNRECOGNIZED_CHAIN: i64 = 4902;
    pub const INTERNAL: i64 = -32603;

    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Self::INTERNAL, message)
    }
}

/// The wallet-injected request channel.
///
/// `params` is sent as-is; pass `Value::Null` to omit it. Futures are not
/// `Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait WalletProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;

    /// Suspends between receipt polls.
    async fn sleep(&self, ms: u32);
}
