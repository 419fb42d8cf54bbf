use contracts::format_address;
use leptos::prelude::*;

use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

/// Shortened address or hash with copy and explorer-link buttons.
#[component]
pub fn CopyField(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    /// Block-explorer page for `value`.
    #[prop(into)]
    href: String,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let short = format_address(&value);

    let on_copy = move |_| {
        copy_to_clipboard_with_callback(&value, move || {
            toasts.success("Copied to clipboard!");
        });
    };

    view! {
        <div class="copy-field">
            <div class="copy-field__label">{label}</div>
            <div class="copy-field__row">
                <span class="copy-field__value">{short}</span>
                <div class="copy-field__actions">
                    <button class="icon-btn" title="Copy" on:click=on_copy>
                        {icon("copy")}
                    </button>
                    <a
                        class="icon-btn"
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        title="View on explorer"
                    >
                        {icon("external-link")}
                    </a>
                </div>
            </div>
        </div>
    }
}
