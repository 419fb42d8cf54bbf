//! TopHeader component - application top bar.
//!
//! Contains:
//! - Application title
//! - Connect button, or the connected account with a copy action

use contracts::format_address;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;
use crate::wallet::{use_wallet, Activity};

#[component]
pub fn TopHeader() -> impl IntoView {
    let wallet = use_wallet();
    let state = wallet.state;

    let connect = move |_| {
        spawn_local(wallet.connect());
    };

    let copy_account = move |_| {
        if let Some(account) = state.session.get_untracked().account() {
            copy_to_clipboard_with_callback(&account.to_string(), move || {
                wallet.toasts.success("Copied to clipboard!");
            });
        }
    };

    let is_connecting = move || state.busy.get() == Some(Activity::Connecting);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("wallet")}
                <span class="top-header__title">"Tournament Wallet"</span>
            </div>

            <div class="top-header__actions">
                {move || match state.session.get().account() {
                    Some(account) => view! {
                        <div class="top-header__user">
                            <span class="top-header__dot"></span>
                            <span title=account.to_string()>
                                {format_address(&account.to_string())}
                            </span>
                            <button class="top-header__icon-btn" title="Copy address" on:click=copy_account>
                                {icon("copy")}
                            </button>
                        </div>
                    }.into_any(),
                    None => view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || state.busy.get().is_some())
                            on_click=connect
                        >
                            {move || if is_connecting() { "Connecting..." } else { "Connect Wallet" }}
                        </Button>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
