pub mod connect;
pub mod dashboard;

use leptos::prelude::*;

use crate::wallet::use_wallet;
use connect::ConnectPrompt;
use dashboard::Dashboard;

/// Connect prompt until an account is known, then the dashboard.
#[component]
pub fn HomePage() -> impl IntoView {
    let wallet = use_wallet();
    let connected = move || wallet.state.session.get().is_connected();

    view! {
        <Show when=connected fallback=|| view! { <ConnectPrompt /> }>
            <Dashboard />
        </Show>
    }
}
