use crate::layout::tabs::{TabLink, TabState};
use leptos::prelude::*;

#[component]
pub fn TabBar(#[prop(into)] tabs: Signal<Vec<TabState>>) -> impl IntoView {
    view! {
        <div class="tabs">
            <ul>
                {move || {
                    tabs.get()
                        .into_iter()
                        .map(|tab| view! { <TabLink tab=tab /> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
