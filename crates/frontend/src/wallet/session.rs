use contracts::Address;

/// Wallet connection as seen by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Disconnected,
    Connecting,
    Connected { account: Address },
}

impl SessionState {
    pub fn account(&self) -> Option<Address> {
        match self {
            SessionState::Connected { account } => Some(*account),
            _ => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, SessionState::Connected { .. })
    }
}

/// The network action currently holding the page. Only one runs at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Connecting,
    RefreshingBalance,
    FetchingDetails,
    Depositing,
}
