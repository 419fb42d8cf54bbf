use leptos::prelude::*;

use crate::shared::components::panel::Panel;
use crate::wallet::use_wallet;

#[component]
pub fn NetworkInfo() -> impl IntoView {
    let network = use_wallet().deployment().network().clone();

    view! {
        <Panel title="Network" class="network-info">
            <dl class="network-info__list">
                <dt>"Network"</dt>
                <dd>{network.chain_name}</dd>
                <dt>"Chain ID"</dt>
                <dd>{network.chain_id.to_string()}</dd>
                <dt>"RPC URL"</dt>
                <dd>{network.rpc_url}</dd>
            </dl>
        </Panel>
    }
}
