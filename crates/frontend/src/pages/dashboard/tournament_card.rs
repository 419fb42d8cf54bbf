use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Input, InputType};

use crate::shared::components::copy_field::CopyField;
use crate::shared::components::panel::Panel;
use crate::wallet::{use_wallet, Activity};

#[component]
pub fn TournamentCard() -> impl IntoView {
    let wallet = use_wallet();
    let state = wallet.state;
    let network = wallet.deployment().network().clone();

    let fetching = move || state.busy.get() == Some(Activity::FetchingDetails);

    let ends_at = move || {
        state.tournament.get().map(|details| match details.ends_at() {
            Some(at) => at.format("%Y-%m-%d %H:%M UTC").to_string(),
            None => details.end_time.to_string(),
        })
    };

    let tx_link = move || {
        state.tx_hash.get().map(|hash| {
            let href = network.explorer_tx_url(&hash);
            view! { <CopyField label="Last transaction" value=hash href=href /> }
        })
    };

    view! {
        <Panel title="Tournament">
            <div class="form">
                <label class="form__label">"Tournament ID"</label>
                <Input value=state.tournament_id input_type=InputType::Text placeholder="1" />

                <label class="form__label">"Amount to Add to Pool"</label>
                <Input value=state.amount input_type=InputType::Number placeholder="0.0" />

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || state.busy.get().is_some())
                    on_click=move |_| spawn_local(wallet.fetch_tournament())
                >
                    {move || if fetching() { "Fetching..." } else { "Get Details" }}
                </Button>
            </div>

            <Show when=move || !state.tournament_details.get().is_empty()>
                <div class="tournament-details">
                    <p class="tournament-details__summary">
                        {move || state.tournament_details.get()}
                    </p>
                    {move || ends_at().map(|at| view! {
                        <p class="tournament-details__ends">{format!("Ends: {}", at)}</p>
                    })}
                </div>
            </Show>

            {tx_link}
        </Panel>
    }
}
