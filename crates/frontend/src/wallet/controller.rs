//! Page state and the wallet-facing actions that mutate it.
//!
//! Every action follows the same shape: validate input, make sure a wallet
//! is present, take the busy slot, run the RPC calls, then report the
//! outcome as a toast. Failures are logged and never change visible state.

use std::rc::Rc;

use contracts::abi::codec::to_hex_data;
use contracts::{
    format_ether_fixed, parse_ether, parse_tournament_id, to_quantity, Address, Deployment,
    TournamentDetails, Token,
};
use leptos::prelude::*;

use super::error::WalletError;
use super::provider::{ProviderError, WalletProvider};
use super::rpc::{TransactionRequest, WalletRpc};
use super::session::{Activity, SessionState};
use crate::shared::toast::ToastService;

pub const MSG_INSTALL_WALLET: &str = "Please install MetaMask!";
pub const MSG_RESTORE_FAILED: &str = "Error connecting to wallet";
pub const MSG_CONNECT_FAILED: &str = "Error connecting wallet";
pub const MSG_SWITCH_FAILED: &str = "Failed to switch network";
pub const MSG_CONNECTED: &str = "Wallet connected!";
pub const MSG_BALANCE_FAILED: &str = "Error fetching ETH balance";
pub const MSG_BALANCES_REFRESHED: &str = "Balances refreshed!";
pub const MSG_ENTER_TOURNAMENT_ID: &str = "Please enter a tournament ID";
pub const MSG_INVALID_TOURNAMENT_ID: &str = "Invalid tournament ID";
pub const MSG_DETAILS_FETCHED: &str = "Tournament details fetched!";
pub const MSG_DETAILS_FAILED: &str = "Error fetching tournament details";
pub const MSG_ENTER_DEPOSIT: &str = "Enter an amount to deposit";
pub const MSG_CONNECT_FIRST: &str = "Please connect your wallet first";
pub const MSG_INVALID_DEPOSIT: &str = "Invalid deposit amount";
pub const MSG_DEPOSIT_SENT: &str = "Deposit transaction sent. Waiting for confirmation...";
pub const MSG_DEPOSIT_CONFIRMED: &str = "Deposit confirmed!";
pub const MSG_DEPOSIT_FAILED: &str = "Error during deposit";

/// UI state owned by the page. Each field is its own signal so views only
/// re-render what they read.
#[derive(Clone, Copy)]
pub struct WalletState {
    pub session: RwSignal<SessionState>,
    pub busy: RwSignal<Option<Activity>>,
    pub eth_balance: RwSignal<String>,
    pub tournament_id: RwSignal<String>,
    pub amount: RwSignal<String>,
    pub deposit_amount: RwSignal<String>,
    pub tournament: RwSignal<Option<TournamentDetails>>,
    pub tournament_details: RwSignal<String>,
    pub tx_hash: RwSignal<Option<String>>,
}

impl WalletState {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::Disconnected),
            busy: RwSignal::new(None),
            eth_balance: RwSignal::new("0".to_string()),
            tournament_id: RwSignal::new(String::new()),
            amount: RwSignal::new(String::new()),
            deposit_amount: RwSignal::new(String::new()),
            tournament: RwSignal::new(None),
            tournament_details: RwSignal::new(String::new()),
            tx_hash: RwSignal::new(None),
        }
    }
}

impl Default for WalletState {
    fn default() -> Self {
        Self::new()
    }
}

enum ConnectFailure {
    Network(WalletError),
    Wallet(WalletError),
}

#[derive(Clone, Copy)]
pub struct WalletController {
    provider: StoredValue<Option<Rc<dyn WalletProvider>>, LocalStorage>,
    deployment: StoredValue<Deployment>,
    pub state: WalletState,
    pub toasts: ToastService,
}

impl WalletController {
    pub fn new(
        provider: Option<Rc<dyn WalletProvider>>,
        deployment: Deployment,
        toasts: ToastService,
    ) -> Self {
        Self {
            provider: StoredValue::new_local(provider),
            deployment: StoredValue::new(deployment),
            state: WalletState::new(),
            toasts,
        }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.with_value(|p| p.is_some())
    }

    pub fn deployment(&self) -> Deployment {
        self.deployment.get_value()
    }

    /// Provider handle, or the install-wallet toast when there is none.
    fn require_provider(&self) -> Option<Rc<dyn WalletProvider>> {
        let provider = self.provider.get_value();
        if provider.is_none() {
            log::warn!("No injected wallet provider");
            self.toasts.error(MSG_INSTALL_WALLET);
        }
        provider
    }

    fn begin(&self, activity: Activity) -> bool {
        if let Some(current) = self.state.busy.get_untracked() {
            log::debug!("{:?} ignored while {:?} is in progress", activity, current);
            return false;
        }
        self.state.busy.set(Some(activity));
        true
    }

    fn finish(&self) {
        self.state.busy.set(None);
    }

    fn report(&self, err: &WalletError, message: &str) {
        log::error!("{}: {}", message, err);
        self.toasts.error(message);
    }

    /// Adopts an already-authorized account on page load. Never prompts.
    pub async fn restore(self) {
        let Some(provider) = self.require_provider() else {
            return;
        };
        if !self.begin(Activity::Connecting) {
            return;
        }

        match WalletRpc::new(provider.as_ref()).accounts().await {
            Ok(accounts) => {
                if let Some(account) = accounts.first().copied() {
                    log::info!("Restored wallet session for {}", account);
                    self.state.session.set(SessionState::Connected { account });
                    self.load_balances(provider.as_ref(), &account).await;
                }
            }
            Err(err) => self.report(&err, MSG_RESTORE_FAILED),
        }

        self.finish();
    }

    /// Switches to the configured chain if needed, then asks for accounts.
    pub async fn connect(self) {
        let Some(provider) = self.require_provider() else {
            return;
        };
        if !self.begin(Activity::Connecting) {
            return;
        }

        let previous = self.state.session.get_untracked();
        self.state.session.set(SessionState::Connecting);

        match self.connect_account(provider.as_ref()).await {
            Ok(account) => {
                log::info!("Wallet connected: {}", account);
                self.state.session.set(SessionState::Connected { account });
                self.load_balances(provider.as_ref(), &account).await;
                self.toasts.success(MSG_CONNECTED);
            }
            Err(ConnectFailure::Network(err)) => {
                self.state.session.set(previous);
                self.report(&err, MSG_SWITCH_FAILED);
            }
            Err(ConnectFailure::Wallet(err)) => {
                self.state.session.set(previous);
                self.report(&err, MSG_CONNECT_FAILED);
            }
        }

        self.finish();
    }

    async fn connect_account(&self, provider: &dyn WalletProvider) -> Result<Address, ConnectFailure> {
        let rpc = WalletRpc::new(provider);

        let chain_id = rpc.chain_id().await.map_err(ConnectFailure::Wallet)?;
        let on_chain = self
            .deployment
            .with_value(|d| d.network().is_current_chain(&chain_id));
        if !on_chain {
            log::info!("Wallet is on chain {}, switching", chain_id);
            self.switch_network(&rpc).await.map_err(ConnectFailure::Network)?;
        }

        let accounts = rpc.request_accounts().await.map_err(ConnectFailure::Wallet)?;
        accounts
            .first()
            .copied()
            .ok_or(ConnectFailure::Wallet(WalletError::NoAccounts))
    }

    async fn switch_network(&self, rpc: &WalletRpc<'_>) -> Result<(), WalletError> {
        let (switch, add) = self.deployment.with_value(|d| {
            (d.network().switch_chain_params(), d.network().add_chain_params())
        });

        match rpc.switch_chain(&switch).await {
            Ok(()) => Ok(()),
            Err(err) if err.provider_code() == Some(ProviderError::UNRECOGNIZED_CHAIN) => {
                log::info!("Chain {} unknown to wallet, adding it", add.chain_id);
                rpc.add_chain(&add).await
            }
            Err(err) => Err(err),
        }
    }

    /// Re-reads balances for the connected account.
    pub async fn refresh_balances(self) {
        let Some(provider) = self.require_provider() else {
            return;
        };
        let Some(account) = self.state.session.get_untracked().account() else {
            return;
        };
        if !self.begin(Activity::RefreshingBalance) {
            return;
        }

        if self.load_balances(provider.as_ref(), &account).await {
            self.toasts.success(MSG_BALANCES_REFRESHED);
        }

        self.finish();
    }

    /// Single `eth_getBalance` for the account. Returns whether it succeeded;
    /// a failure is reported and leaves the shown figure as it was.
    async fn load_balances(&self, provider: &dyn WalletProvider, account: &Address) -> bool {
        let decimals = self.deployment.with_value(|d| d.config.wallet.balance_decimals);

        match WalletRpc::new(provider).get_balance(account).await {
            Ok(wei) => {
                self.state.eth_balance.set(format_ether_fixed(wei, decimals));
                true
            }
            Err(err) => {
                self.report(&err, MSG_BALANCE_FAILED);
                false
            }
        }
    }

    /// Reads `tournaments(id)` and publishes the summary line.
    pub async fn fetch_tournament(self) {
        let input = self.state.tournament_id.get_untracked();
        if input.trim().is_empty() {
            self.toasts.error(MSG_ENTER_TOURNAMENT_ID);
            return;
        }
        let Some(provider) = self.require_provider() else {
            return;
        };
        let id = match parse_tournament_id(&input) {
            Ok(id) => id,
            Err(err) => {
                self.report(&err.into(), MSG_INVALID_TOURNAMENT_ID);
                return;
            }
        };
        if !self.begin(Activity::FetchingDetails) {
            return;
        }

        match self.read_tournament(provider.as_ref(), id).await {
            Ok(details) => {
                log::debug!("tournament {} details: {:?}", id, details);
                self.state.tournament.set(Some(details));
                self.state.tournament_details.set(details.summary());
                self.toasts.success(MSG_DETAILS_FETCHED);
            }
            Err(err) => self.report(&err, MSG_DETAILS_FAILED),
        }

        self.finish();
    }

    async fn read_tournament(
        &self,
        provider: &dyn WalletProvider,
        id: u128,
    ) -> Result<TournamentDetails, WalletError> {
        let (address, function) = self.deployment.with_value(|d| {
            (
                d.config.contracts.tournament,
                d.tournament_abi.function("tournaments").cloned(),
            )
        });
        let function = function?;

        let data = function.encode_call(&[Token::uint(id)])?;
        let output = WalletRpc::new(provider).call(&address, &data).await?;
        let decoded = function.decode_outputs(&output)?;
        Ok(TournamentDetails::from_outputs(&decoded)?)
    }

    /// Wraps `deposit_amount` ETH via the token's payable `deposit()`.
    ///
    /// The transaction hash is published as soon as the wallet returns it;
    /// balances and the input are only touched after the receipt arrives.
    pub async fn deposit(self) {
        let input = self.state.deposit_amount.get_untracked();
        if input.trim().is_empty() {
            self.toasts.error(MSG_ENTER_DEPOSIT);
            return;
        }
        let Some(provider) = self.require_provider() else {
            return;
        };
        let Some(account) = self.state.session.get_untracked().account() else {
            self.toasts.error(MSG_CONNECT_FIRST);
            return;
        };
        let wei = match parse_ether(&input) {
            Ok(wei) => wei,
            Err(err) => {
                self.report(&err.into(), MSG_INVALID_DEPOSIT);
                return;
            }
        };
        if !self.begin(Activity::Depositing) {
            return;
        }

        match self.send_deposit(provider.as_ref(), account, wei).await {
            Ok(()) => {
                self.toasts.success(MSG_DEPOSIT_CONFIRMED);
                self.load_balances(provider.as_ref(), &account).await;
                self.state.deposit_amount.set(String::new());
            }
            Err(err) => self.report(&err, MSG_DEPOSIT_FAILED),
        }

        self.finish();
    }

    async fn send_deposit(
        &self,
        provider: &dyn WalletProvider,
        account: Address,
        wei: u128,
    ) -> Result<(), WalletError> {
        let (token, function, poll_ms) = self.deployment.with_value(|d| {
            (
                d.config.contracts.token,
                d.token_abi.function("deposit").cloned(),
                d.config.wallet.receipt_poll_interval_ms,
            )
        });
        let data = function?.encode_call(&[])?;

        let rpc = WalletRpc::new(provider);
        let tx = TransactionRequest {
            from: account,
            to: token,
            value: Some(to_quantity(wei)),
            data: to_hex_data(&data),
        };
        let tx_hash = rpc.send_transaction(&tx).await?;
        log::info!("Deposit submitted: {}", tx_hash);
        self.state.tx_hash.set(Some(tx_hash.clone()));
        self.toasts.success(MSG_DEPOSIT_SENT);

        let receipt = rpc.wait_for_receipt(&tx_hash, poll_ms).await?;
        if !receipt.succeeded() {
            return Err(WalletError::Reverted(tx_hash));
        }
        log::info!(
            "Deposit {} mined in block {}",
            tx_hash,
            receipt.block_number.as_deref().unwrap_or("?")
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::mock::MockProvider;
    use serde_json::{json, Value};

    const ACCOUNT: &str = "0xabcdef0000000000000000000000000000001234";
    const TX_HASH: &str = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";

    fn setup(mock: Option<Rc<MockProvider>>) -> WalletController {
        let deployment = Deployment::load_default().unwrap();
        let provider = mock.map(|m| m as Rc<dyn WalletProvider>);
        WalletController::new(provider, deployment, ToastService::new())
    }

    fn word(value: u128) -> String {
        format!("{:064x}", value)
    }

    fn account() -> Address {
        Address::parse(ACCOUNT).unwrap()
    }

    fn connected(controller: &WalletController) {
        controller
            .state
            .session
            .set(SessionState::Connected { account: account() });
    }

    #[tokio::test]
    async fn test_no_provider_reports_once_per_action() {
        let controller = setup(None);
        controller.state.tournament_id.set("1".to_string());
        controller.state.deposit_amount.set("0.1".to_string());

        controller.restore().await;
        assert_eq!(controller.toasts.messages(), vec![MSG_INSTALL_WALLET]);

        controller.connect().await;
        controller.refresh_balances().await;
        controller.fetch_tournament().await;
        controller.deposit().await;

        assert_eq!(controller.toasts.messages(), vec![MSG_INSTALL_WALLET; 5]);
        assert_eq!(controller.state.session.get_untracked(), SessionState::Disconnected);
        assert_eq!(controller.state.eth_balance.get_untracked(), "0");
        assert_eq!(controller.state.tournament_details.get_untracked(), "");
        assert_eq!(controller.state.tx_hash.get_untracked(), None);
        assert_eq!(controller.state.busy.get_untracked(), None);
    }

    #[tokio::test]
    async fn test_restore_adopts_first_account() {
        let mock = Rc::new(MockProvider::new());
        mock.respond(
            "eth_accounts",
            json!([ACCOUNT, "0x0000000000000000000000000000000000000001"]),
        );
        mock.respond("eth_getBalance", json!("0x112210f47de98115"));
        let controller = setup(Some(mock.clone()));

        controller.restore().await;

        assert_eq!(controller.state.session.get_untracked().account(), Some(account()));
        assert_eq!(mock.methods(), vec!["eth_accounts", "eth_getBalance"]);
        assert_eq!(
            mock.params_of("eth_getBalance"),
            Some(json!([ACCOUNT, "latest"]))
        );
        assert_eq!(controller.state.eth_balance.get_untracked(), "1.2346");
        assert!(controller.toasts.messages().is_empty());
    }

    #[tokio::test]
    async fn test_restore_without_accounts_stays_disconnected() {
        let mock = Rc::new(MockProvider::new());
        mock.respond("eth_accounts", json!([]));
        let controller = setup(Some(mock.clone()));

        controller.restore().await;

        assert_eq!(controller.state.session.get_untracked(), SessionState::Disconnected);
        assert_eq!(mock.methods(), vec!["eth_accounts"]);
        assert!(controller.toasts.messages().is_empty());
    }

    #[tokio::test]
    async fn test_connect_on_right_chain_skips_switch() {
        let mock = Rc::new(MockProvider::new());
        mock.respond("eth_chainId", json!("0x14a34"));
        mock.respond("eth_requestAccounts", json!([ACCOUNT]));
        mock.respond("eth_getBalance", json!("0x0"));
        let controller = setup(Some(mock.clone()));

        controller.connect().await;

        assert_eq!(mock.count("wallet_switchEthereumChain"), 0);
        assert!(controller.state.session.get_untracked().is_connected());
        assert_eq!(controller.state.eth_balance.get_untracked(), "0.0000");
        assert_eq!(controller.toasts.messages(), vec![MSG_CONNECTED]);
        assert_eq!(controller.state.busy.get_untracked(), None);
    }

    #[tokio::test]
    async fn test_connect_switches_then_adds_unknown_chain() {
        let mock = Rc::new(MockProvider::new());
        mock.respond("eth_chainId", json!("0x1"));
        mock.fail(
            "wallet_switchEthereumChain",
            ProviderError::UNRECOGNIZED_CHAIN,
            "Unrecognized chain ID",
        );
        mock.respond("wallet_addEthereumChain", Value::Null);
        mock.respond("eth_requestAccounts", json!([ACCOUNT]));
        mock.respond("eth_getBalance", json!("0x0"));
        let controller = setup(Some(mock.clone()));

        controller.connect().await;

        let methods = mock.methods();
        let switch_at = methods
            .iter()
            .position(|m| m == "wallet_switchEthereumChain")
            .unwrap();
        let add_at = methods.iter().position(|m| m == "wallet_addEthereumChain").unwrap();
        let request_at = methods.iter().position(|m| m == "eth_requestAccounts").unwrap();
        assert!(switch_at < add_at && add_at < request_at);

        assert_eq!(
            mock.params_of("wallet_switchEthereumChain"),
            Some(json!([{ "chainId": "0x14a34" }]))
        );
        assert_eq!(
            mock.params_of("wallet_addEthereumChain"),
            Some(json!([{
                "chainId": "0x14a34",
                "chainName": "Base Sepolia",
                "rpcUrls": ["https://sepolia.base.org"],
                "nativeCurrency": { "name": "ETH", "symbol": "ETH", "decimals": 18 },
                "blockExplorerUrls": ["https://sepolia.basescan.org"]
            }]))
        );
        assert!(controller.state.session.get_untracked().is_connected());
    }

    #[tokio::test]
    async fn test_connect_aborts_when_switch_rejected() {
        let mock = Rc::new(MockProvider::new());
        mock.respond("eth_chainId", json!("0x1"));
        mock.fail(
            "wallet_switchEthereumChain",
            ProviderError::USER_REJECTED,
            "User rejected the request.",
        );
        let controller = setup(Some(mock.clone()));

        controller.connect().await;

        assert_eq!(mock.count("wallet_addEthereumChain"), 0);
        assert_eq!(mock.count("eth_requestAccounts"), 0);
        assert_eq!(controller.toasts.messages(), vec![MSG_SWITCH_FAILED]);
        assert_eq!(controller.state.session.get_untracked(), SessionState::Disconnected);
        assert_eq!(controller.state.busy.get_untracked(), None);
    }

    #[tokio::test]
    async fn test_connect_rejected_by_user() {
        let mock = Rc::new(MockProvider::new());
        mock.respond("eth_chainId", json!("0x14a34"));
        mock.fail(
            "eth_requestAccounts",
            ProviderError::USER_REJECTED,
            "User rejected the request.",
        );
        let controller = setup(Some(mock.clone()));

        controller.connect().await;

        assert_eq!(controller.toasts.messages(), vec![MSG_CONNECT_FAILED]);
        assert_eq!(controller.state.session.get_untracked(), SessionState::Disconnected);
        assert_eq!(mock.count("eth_getBalance"), 0);
    }

    #[tokio::test]
    async fn test_refresh_reports_balance_failure() {
        let mock = Rc::new(MockProvider::new());
        mock.fail("eth_getBalance", -32000, "header not found");
        let controller = setup(Some(mock.clone()));
        connected(&controller);
        controller.state.eth_balance.set("3.0000".to_string());

        controller.refresh_balances().await;

        assert_eq!(controller.state.eth_balance.get_untracked(), "3.0000");
        assert_eq!(controller.toasts.messages(), vec![MSG_BALANCE_FAILED]);
    }

    #[tokio::test]
    async fn test_fetch_tournament_details() {
        let mock = Rc::new(MockProvider::new());
        let output = format!(
            "0x{}{}{}",
            word(5_000_000_000_000_000_000),
            word(250),
            word(1_735_689_600)
        );
        mock.respond("eth_call", json!(output));
        let controller = setup(Some(mock.clone()));
        controller.state.tournament_id.set("12".to_string());

        controller.fetch_tournament().await;

        assert_eq!(
            controller.state.tournament_details.get_untracked(),
            "Prize Pool: 5000000000000000000 | Seed Pool: 250 | Ends At: 1735689600"
        );
        assert_eq!(controller.toasts.messages(), vec![MSG_DETAILS_FETCHED]);

        let params = mock.params_of("eth_call").unwrap();
        assert_eq!(params[0]["to"], json!("0x3f1c8b2a9e5d4c7b6a0f9e8d7c6b5a4938271605"));
        assert_eq!(params[0]["data"], json!(format!("0x7503e1b7{}", word(12))));
        assert_eq!(params[1], json!("latest"));
    }

    #[tokio::test]
    async fn test_fetch_tournament_failure_keeps_previous_details() {
        let mock = Rc::new(MockProvider::new());
        mock.fail("eth_call", 3, "execution reverted");
        let controller = setup(Some(mock.clone()));
        controller.state.tournament_id.set("2".to_string());
        controller.state.tournament_details.set("previous".to_string());

        controller.fetch_tournament().await;

        assert_eq!(controller.state.tournament_details.get_untracked(), "previous");
        assert_eq!(controller.toasts.messages(), vec![MSG_DETAILS_FAILED]);
        assert_eq!(mock.count("eth_call"), 1);
    }

    #[tokio::test]
    async fn test_fetch_tournament_validates_input() {
        let mock = Rc::new(MockProvider::new());
        let controller = setup(Some(mock.clone()));

        controller.fetch_tournament().await;
        controller.state.tournament_id.set("abc".to_string());
        controller.fetch_tournament().await;

        assert_eq!(
            controller.toasts.messages(),
            vec![MSG_ENTER_TOURNAMENT_ID, MSG_INVALID_TOURNAMENT_ID]
        );
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_deposit_makes_no_call() {
        let mock = Rc::new(MockProvider::new());
        let controller = setup(Some(mock.clone()));
        connected(&controller);

        controller.deposit().await;

        assert_eq!(controller.toasts.messages(), vec![MSG_ENTER_DEPOSIT]);
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_deposit_amount_makes_no_call() {
        let mock = Rc::new(MockProvider::new());
        let controller = setup(Some(mock.clone()));
        connected(&controller);
        controller.state.deposit_amount.set("1.2.3".to_string());

        controller.deposit().await;

        assert_eq!(controller.toasts.messages(), vec![MSG_INVALID_DEPOSIT]);
        assert!(mock.calls().is_empty());
        assert_eq!(controller.state.deposit_amount.get_untracked(), "1.2.3");
    }

    #[tokio::test]
    async fn test_deposit_submits_and_confirms() {
        let mock = Rc::new(MockProvider::new());
        mock.respond("eth_sendTransaction", json!(TX_HASH));
        mock.respond("eth_getTransactionReceipt", Value::Null);
        mock.respond(
            "eth_getTransactionReceipt",
            json!({ "transactionHash": TX_HASH, "blockNumber": "0x1b4", "status": "0x1" }),
        );
        mock.respond("eth_getBalance", json!("0xde0b6b3a7640000"));
        let controller = setup(Some(mock.clone()));
        connected(&controller);
        controller.state.deposit_amount.set("0.5".to_string());

        controller.deposit().await;

        assert_eq!(
            mock.params_of("eth_sendTransaction"),
            Some(json!([{
                "from": ACCOUNT,
                "to": "0x4200000000000000000000000000000000000006",
                "value": "0x6f05b59d3b20000",
                "data": "0xd0e30db0"
            }]))
        );
        assert_eq!(controller.state.tx_hash.get_untracked().as_deref(), Some(TX_HASH));
        assert_eq!(
            controller.toasts.messages(),
            vec![MSG_DEPOSIT_SENT, MSG_DEPOSIT_CONFIRMED]
        );
        assert_eq!(mock.sleeps(), vec![2000]);
        assert_eq!(controller.state.deposit_amount.get_untracked(), "");
        assert_eq!(controller.state.eth_balance.get_untracked(), "1.0000");
        assert_eq!(mock.count("eth_call"), 0);
        assert_eq!(controller.state.busy.get_untracked(), None);
    }

    #[tokio::test]
    async fn test_reverted_deposit_keeps_hash_and_input() {
        let mock = Rc::new(MockProvider::new());
        mock.respond("eth_sendTransaction", json!(TX_HASH));
        mock.respond(
            "eth_getTransactionReceipt",
            json!({ "transactionHash": TX_HASH, "status": "0x0" }),
        );
        let controller = setup(Some(mock.clone()));
        connected(&controller);
        controller.state.deposit_amount.set("0.5".to_string());

        controller.deposit().await;

        assert_eq!(controller.state.tx_hash.get_untracked().as_deref(), Some(TX_HASH));
        assert_eq!(controller.state.deposit_amount.get_untracked(), "0.5");
        assert_eq!(
            controller.toasts.messages(),
            vec![MSG_DEPOSIT_SENT, MSG_DEPOSIT_FAILED]
        );
        assert_eq!(mock.count("eth_getBalance"), 0);
    }

    #[tokio::test]
    async fn test_restore_failure_reports_connection_error() {
        let mock = Rc::new(MockProvider::new());
        mock.fail("eth_accounts", ProviderError::INTERNAL, "Internal JSON-RPC error.");
        let controller = setup(Some(mock.clone()));

        controller.restore().await;

        assert_eq!(controller.toasts.messages(), vec![MSG_RESTORE_FAILED]);
        assert_eq!(controller.state.session.get_untracked(), SessionState::Disconnected);
        assert_eq!(mock.methods(), vec!["eth_accounts"]);
        assert_eq!(controller.state.busy.get_untracked(), None);
    }

    #[tokio::test]
    async fn test_connect_aborts_when_add_chain_fails() {
        let mock = Rc::new(MockProvider::new());
        mock.respond("eth_chainId", json!("0x1"));
        mock.fail(
            "wallet_switchEthereumChain",
            ProviderError::UNRECOGNIZED_CHAIN,
            "Unrecognized chain ID",
        );
        mock.fail(
            "wallet_addEthereumChain",
            ProviderError::USER_REJECTED,
            "User rejected the request.",
        );
        let controller = setup(Some(mock.clone()));

        controller.connect().await;

        assert_eq!(mock.count("wallet_addEthereumChain"), 1);
        assert_eq!(mock.count("eth_requestAccounts"), 0);
        assert_eq!(controller.toasts.messages(), vec![MSG_SWITCH_FAILED]);
        assert_eq!(controller.state.session.get_untracked(), SessionState::Disconnected);
        assert_eq!(controller.state.busy.get_untracked(), None);
    }

    #[tokio::test]
    async fn test_refresh_updates_balance() {
        let mock = Rc::new(MockProvider::new());
        mock.respond("eth_getBalance", json!("0xde0b6b3a7640000"));
        let controller = setup(Some(mock.clone()));
        connected(&controller);

        controller.refresh_balances().await;

        assert_eq!(controller.state.eth_balance.get_untracked(), "1.0000");
        assert_eq!(controller.toasts.messages(), vec![MSG_BALANCES_REFRESHED]);
        assert_eq!(mock.methods(), vec!["eth_getBalance"]);
    }

    #[tokio::test]
    async fn test_deposit_requires_connected_account() {
        let mock = Rc::new(MockProvider::new());
        let controller = setup(Some(mock.clone()));
        controller.state.deposit_amount.set("0.5".to_string());

        controller.deposit().await;

        assert_eq!(controller.toasts.messages(), vec![MSG_CONNECT_FIRST]);
        assert!(mock.calls().is_empty());
        assert_eq!(controller.state.deposit_amount.get_untracked(), "0.5");
    }

    #[tokio::test]
    async fn test_tournament_id_uses_leading_digits() {
        let mock = Rc::new(MockProvider::new());
        mock.respond(
            "eth_call",
            json!(format!("0x{}{}{}", word(1), word(2), word(3))),
        );
        let controller = setup(Some(mock.clone()));
        controller.state.tournament_id.set(" 12abc".to_string());

        controller.fetch_tournament().await;

        let params = mock.params_of("eth_call").unwrap();
        assert_eq!(params[0]["data"], json!(format!("0x7503e1b7{}", word(12))));
        assert_eq!(controller.toasts.messages(), vec![MSG_DETAILS_FETCHED]);
    }

    #[tokio::test]
    async fn test_busy_slot_rejects_overlapping_actions() {
        let mock = Rc::new(MockProvider::new());
        let controller = setup(Some(mock.clone()));
        connected(&controller);
        controller.state.busy.set(Some(Activity::Depositing));
        controller.state.tournament_id.set("1".to_string());

        controller.refresh_balances().await;
        controller.fetch_tournament().await;
        controller.connect().await;

        assert!(mock.calls().is_empty());
        assert!(controller.toasts.messages().is_empty());
        assert_eq!(controller.state.busy.get_untracked(), Some(Activity::Depositing));
    }
}
