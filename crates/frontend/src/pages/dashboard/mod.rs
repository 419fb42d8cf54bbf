mod balance_card;
mod network_info;
mod tournament_card;

use leptos::prelude::*;

use balance_card::BalanceCard;
use network_info::NetworkInfo;
use tournament_card::TournamentCard;

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="dashboard">
            <div class="dashboard__grid">
                <BalanceCard />
                <TournamentCard />
            </div>
            <NetworkInfo />
        </div>
    }
}
