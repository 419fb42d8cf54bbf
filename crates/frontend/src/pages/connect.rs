use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonSize};

use crate::shared::icons::icon;
use crate::wallet::{use_wallet, Activity};

#[component]
pub fn ConnectPrompt() -> impl IntoView {
    let wallet = use_wallet();
    let state = wallet.state;
    let chain_name = wallet.deployment().network().chain_name.clone();

    let connect = move |_| {
        spawn_local(wallet.connect());
    };

    view! {
        <div class="connect-prompt">
            <div class="connect-prompt__icon">{icon("wallet-large")}</div>
            <h1 class="connect-prompt__title">"Connect Your Wallet"</h1>
            <p class="connect-prompt__text">
                {format!("Connect MetaMask to view balances and deposit on {}.", chain_name)}
            </p>
            <Button
                appearance=ButtonAppearance::Primary
                size=ButtonSize::Large
                disabled=Signal::derive(move || state.busy.get().is_some())
                on_click=connect
            >
                {move || {
                    if state.busy.get() == Some(Activity::Connecting) {
                        "Connecting..."
                    } else {
                        "Connect MetaMask"
                    }
                }}
            </Button>
        </div>
    }
}
