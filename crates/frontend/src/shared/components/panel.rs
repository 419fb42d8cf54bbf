//! Panel: thaw `Card` with a title row and an optional header action.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn Panel(
    /// Heading shown in the top-left corner.
    #[prop(into)]
    title: String,
    /// Optional control rendered to the right of the title.
    #[prop(optional, into)]
    action: Option<ViewFn>,
    /// Extra classes for layout (grid spans).
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "panel".to_string()
    } else {
        format!("panel {}", class)
    };

    view! {
        <Card class=class>
            <div class="panel__header">
                <h2 class="panel__title">{title}</h2>
                {action.map(|action| action.run())}
            </div>
            {children()}
        </Card>
    }
}
