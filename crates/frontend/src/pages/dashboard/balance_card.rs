use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Input, InputType};

use crate::shared::components::copy_field::CopyField;
use crate::shared::components::panel::Panel;
use crate::shared::icons::icon;
use crate::wallet::{use_wallet, Activity};

/// ETH balance plus the deposit form.
#[component]
pub fn BalanceCard() -> impl IntoView {
    let wallet = use_wallet();
    let state = wallet.state;
    let deployment = wallet.deployment();
    let network = deployment.network();
    let symbol = network.native_currency.symbol.clone();
    let token = deployment.config.contracts.token.to_string();
    let token_href = network.explorer_address_url(&token);
    let tournament = deployment.config.contracts.tournament.to_string();
    let tournament_href = network.explorer_address_url(&tournament);

    let refresh = move || {
        view! {
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=Signal::derive(move || state.busy.get().is_some())
                on_click=move |_| spawn_local(wallet.refresh_balances())
                attr:title="Refresh balances"
            >
                {icon("refresh")}
            </Button>
        }
    };

    let deposit_disabled = Signal::derive(move || {
        state.busy.get().is_some() || state.deposit_amount.get().trim().is_empty()
    });

    view! {
        <Panel title="Balance" action=refresh>
            <div class="balance">
                <div class="balance__row">
                    <span class="balance__label">{symbol.clone()}</span>
                    <span class="balance__value">{move || state.eth_balance.get()}</span>
                </div>
            </div>

            <div class="deposit-form">
                <label class="form__label">{format!("Wrap {} (deposit)", symbol)}</label>
                <div class="deposit-form__row">
                    <Input
                        value=state.deposit_amount
                        input_type=InputType::Number
                        placeholder="0.0"
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=deposit_disabled
                        on_click=move |_| spawn_local(wallet.deposit())
                    >
                        {move || {
                            if state.busy.get() == Some(Activity::Depositing) {
                                "Depositing..."
                            } else {
                                "Deposit"
                            }
                        }}
                    </Button>
                </div>
            </div>

            <CopyField label="Token contract" value=token href=token_href />
            <CopyField label="Tournament contract" value=tournament href=tournament_href />
        </Panel>
    }
}
