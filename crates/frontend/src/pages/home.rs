use leptos::prelude::*;

/// Landing view bound to `/`.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class="home">
            <h1 class="title">"strimertul"</h1>
        </section>
    }
}
