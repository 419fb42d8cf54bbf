use std::rc::Rc;

use contracts::Deployment;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    ConfigProvider, MessageBar, MessageBarIntent, ToastPosition, ToasterInjection, ToasterProvider,
};

use crate::layout::Shell;
use crate::pages::HomePage;
use crate::shared::toast::ToastService;
use crate::wallet::eip1193::Eip1193Provider;
use crate::wallet::provider::WalletProvider;
use crate::wallet::WalletController;

#[component]
pub fn App() -> impl IntoView {
    let deployment = match Deployment::load_default() {
        Ok(deployment) => deployment,
        Err(err) => {
            log::error!("Invalid deployment configuration: {}", err);
            return view! { <ConfigError message=err.to_string() /> }.into_any();
        }
    };

    view! {
        <ConfigProvider>
            <ToasterProvider position=ToastPosition::TopEnd>
                <WalletRoot deployment=deployment />
            </ToasterProvider>
        </ConfigProvider>
    }
    .into_any()
}

/// Provides `ToastService` and `WalletController` to the page. Lives under
/// `ToasterProvider` so the toaster is in context.
#[component]
fn WalletRoot(deployment: Deployment) -> impl IntoView {
    let toasts = ToastService::with_toaster(
        ToasterInjection::expect_context(),
        deployment.config.wallet.toast_duration_ms,
    );
    provide_context(toasts);

    let provider = Eip1193Provider::detect().map(|p| Rc::new(p) as Rc<dyn WalletProvider>);
    if provider.is_none() {
        log::warn!("window.ethereum not found");
    }
    let controller = WalletController::new(provider, deployment, toasts);
    provide_context(controller);

    // Pick up an already-authorized account once the tree is mounted.
    Effect::new(move |_| {
        spawn_local(controller.restore());
    });

    view! {
        <Shell>
            <HomePage />
        </Shell>
    }
}

#[component]
fn ConfigError(message: String) -> impl IntoView {
    view! {
        <div class="config-error">
            <MessageBar intent=MessageBarIntent::Error>
                {format!("Configuration error: {}", message)}
            </MessageBar>
        </div>
    }
}
